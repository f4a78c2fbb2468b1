use crate::{
    defaults,
    utils::{is_opt_env_var, trim_opt_env_key},
};
pub use clap::{Args, Parser};
use serde::Deserialize;
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use strum::{AsRefStr, EnumString};
use thiserror::Error;
use tracing::debug;

/// Error type returned by configuration operations.
#[derive(Error, Debug)]
pub enum KaminariConfigError {
    #[error("Error parsing env variables from config")]
    EnvVarParseError(#[from] std::env::VarError),
    #[error("Error processing file: {0:?}")]
    ConfigFileError(#[from] std::io::Error),
    #[error("Error processing YAML file: {0:?}")]
    SerdeYamlError(#[from] serde_yaml::Error),
    #[error("Invalid value for {0:?}: {1:?}")]
    InvalidValue(String, String),
}

/// Result type returned by configuration operations.
pub type KaminariConfigResult<T> = core::result::Result<T, KaminariConfigError>;

/// Environment variables read by the configuration.
#[derive(Debug, EnumString, AsRefStr)]
pub enum EnvVar {
    #[strum(serialize = "KAMINARI_PAGE_DATA_TYPE_NAME")]
    PageDataTypeName,
}

/// Return the value of an environment variable or a default value.
pub fn env_or_default(var: EnvVar, default: String) -> String {
    std::env::var(var.as_ref()).unwrap_or(default)
}

pub trait Env {
    fn inject_opt_env_vars(&mut self) -> KaminariConfigResult<()>;
}

/// Arguments a host binary can flatten into its own command line.
#[derive(Debug, Parser, Clone)]
#[clap(
    name = "kaminari-connection",
    about = "Page-numbered GraphQL connection types.",
    version
)]
pub struct KaminariArgs {
    /// Log level. Falls back to the config file, then to `info`.
    #[clap(long, value_parser(["info", "debug", "error", "warn"]), help = "Log level.")]
    pub log_level: Option<String>,

    /// Config file.
    #[clap(short, long, value_name = "FILE", help = "Config file.")]
    pub config: Option<PathBuf>,

    /// GraphQL name of the shared page data type.
    #[clap(long, help = "GraphQL name of the shared page data type.")]
    pub page_data_type_name: Option<String>,

    /// Enable verbose logging.
    #[clap(short, long, help = "Enable verbose logging.")]
    pub verbose: bool,
}

impl Default for KaminariArgs {
    fn default() -> Self {
        Self {
            log_level: None,
            config: None,
            page_data_type_name: None,
            verbose: defaults::VERBOSE_LOGGING,
        }
    }
}

/// Connection type generation configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct KaminariConfig {
    /// GraphQL name of the shared page data type. Only read before the type is
    /// first built.
    #[serde(default = "default_page_data_type_name")]
    pub page_data_type_name: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub verbose: bool,
}

fn default_page_data_type_name() -> String {
    defaults::PAGE_DATA_TYPE_NAME.to_string()
}

fn default_log_level() -> String {
    defaults::LOG_LEVEL.to_string()
}

impl Default for KaminariConfig {
    fn default() -> Self {
        Self {
            page_data_type_name: default_page_data_type_name(),
            log_level: default_log_level(),
            verbose: defaults::VERBOSE_LOGGING,
        }
    }
}

impl Env for KaminariConfig {
    fn inject_opt_env_vars(&mut self) -> KaminariConfigResult<()> {
        if is_opt_env_var(&self.page_data_type_name) {
            let key = trim_opt_env_key(&self.page_data_type_name).ok_or_else(|| {
                KaminariConfigError::InvalidValue(
                    "page_data_type_name".to_string(),
                    self.page_data_type_name.clone(),
                )
            })?;
            self.page_data_type_name = std::env::var(key)?;
        }
        Ok(())
    }
}

impl TryFrom<KaminariArgs> for KaminariConfig {
    type Error = KaminariConfigError;

    fn try_from(args: KaminariArgs) -> KaminariConfigResult<Self> {
        let mut config = match &args.config {
            Some(path) => KaminariConfig::from_file(path)?,
            None => KaminariConfig::default(),
        };

        // Explicit flags win over the file; the env var only fills a missing name.
        config.page_data_type_name = match args.page_data_type_name {
            Some(name) => name,
            None if args.config.is_some() => config.page_data_type_name,
            None => env_or_default(
                EnvVar::PageDataTypeName,
                defaults::PAGE_DATA_TYPE_NAME.to_string(),
            ),
        };
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }
        config.verbose = config.verbose || args.verbose;

        config.inject_opt_env_vars()?;
        config.validate()?;

        Ok(config)
    }
}

impl KaminariConfig {
    /// Read a YAML config file. Missing keys keep their default values.
    pub fn from_file(path: impl AsRef<Path>) -> KaminariConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading kaminari config from {}", path.display());

        let file = File::open(path)?;
        let mut config: KaminariConfig = serde_yaml::from_reader(file)?;

        config.inject_opt_env_vars()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> KaminariConfigResult<()> {
        if self.page_data_type_name.trim().is_empty() {
            return Err(KaminariConfigError::InvalidValue(
                "page_data_type_name".to_string(),
                self.page_data_type_name.clone(),
            ));
        }
        Ok(())
    }
}
