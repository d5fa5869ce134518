//! Errors that reach the lambda runtime, and the causes logged with error responses.

use lambda_runtime::Error as LambdaRuntimeError;

pub type LambdaRuntimeResult = std::result::Result<(), LambdaRuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum LambdaError {
    #[error("{0:#}")]
    Unknown(#[source] anyhow::Error),
    #[error("invalid configuration: {0}")]
    Configuration(#[from] envy::Error),
}

impl From<anyhow::Error> for LambdaError {
    fn from(e: anyhow::Error) -> Self {
        Self::Unknown(e)
    }
}
