use async_graphql::dynamic::SchemaError;
use kaminari_connection_lib::config::KaminariConfigError;

#[derive(thiserror::Error, Debug)]
pub enum KaminariError {
    #[error("Error building dynamic schema: {0:?}")]
    Schema(#[from] SchemaError),
    #[error("Cannot resolve field {field:?}: {reason}")]
    ResolverMismatch { field: String, reason: String },
    #[error("Invalid argument {0:?}: {1}")]
    InvalidArgument(String, String),
    #[error(transparent)]
    Config(#[from] KaminariConfigError),
}

pub type KaminariResult<T> = core::result::Result<T, KaminariError>;

impl KaminariError {
    pub fn resolver_mismatch(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResolverMismatch {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
