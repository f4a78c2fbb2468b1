use crate::config::KaminariConfig;
use std::{env, str::FromStr};
use tracing_subscriber::filter::EnvFilter;

const RUST_LOG: &str = "RUST_LOG";
const HUMAN_LOGGING: &str = "HUMAN_LOGGING";

/// The variable name in an environment variable key, `$FOO` or `${FOO}`.
///
/// Returns `None` for a malformed key such as `$`, `${` or `${FOO`.
pub fn trim_opt_env_key(key: &str) -> Option<&str> {
    let name = match key.strip_prefix("${") {
        Some(rest) => rest.strip_suffix('}')?,
        None => key.strip_prefix('$')?,
    };
    (!name.is_empty() && !name.contains(['{', '}'])).then_some(name)
}

/// Whether a config value refers to an environment variable. The key itself
/// may still be malformed; see [`trim_opt_env_key`].
pub fn is_opt_env_var(k: &str) -> bool {
    k.starts_with('$')
}

/// Initialize the logging context for a process building a schema.
///
/// `RUST_LOG` wins over the configured log level. `HUMAN_LOGGING=false`
/// switches to JSON output.
pub fn init_logging(config: &KaminariConfig) -> anyhow::Result<()> {
    let level = env::var(RUST_LOG).unwrap_or_else(|_| config.log_level.clone());

    // Quiet the schema engine unless asked to be verbose.
    let directives = if config.verbose {
        level
    } else {
        format!("{level},async_graphql=warn")
    };
    let filter = EnvFilter::try_new(directives)?;

    let human_logging = match env::var_os(HUMAN_LOGGING) {
        Some(s) => bool::from_str(&s.to_string_lossy()).map_err(|_| {
            anyhow::anyhow!("Expected `true` or `false` to be provided for `HUMAN_LOGGING`")
        })?,
        None => true,
    };

    let sub = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    if human_logging {
        sub.with_ansi(true)
            .with_level(true)
            .with_line_number(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    } else {
        sub.with_ansi(false)
            .with_level(true)
            .with_line_number(true)
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}
