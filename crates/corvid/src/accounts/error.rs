use account_utils::KeyError;
use corvid_config::ConfigError;
use corvid_gateway::{GatewayError, PollError};

/// Failure of an account creation flow. No account is persisted when one is returned.
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    NotFound(ConfigError),

    #[error(transparent)]
    Remote(GatewayError),

    #[error(
        "failed to get the account address: no account was created between heights {start} and {end} (ceiling of {ceiling} blocks), please retry"
    )]
    TimedOut { start: u64, end: u64, ceiling: u64 },

    #[error(transparent)]
    Persistence(ConfigError),

    #[error(transparent)]
    Key(KeyError),

    #[error("prompt failed: {0}")]
    Prompt(String),
}

impl From<ConfigError> for CreateError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound { .. } => CreateError::NotFound(err),
            ConfigError::Validation(msg) => CreateError::Validation(msg),
            err => CreateError::Persistence(err),
        }
    }
}

impl From<KeyError> for CreateError {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::InvalidSignatureAlgorithm(_)
            | KeyError::InvalidHashAlgorithm(_)
            | KeyError::InvalidPublicKey { .. }
            | KeyError::InvalidWeight(_) => CreateError::Validation(err.to_string()),
            err => CreateError::Key(err),
        }
    }
}

impl From<GatewayError> for CreateError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Validation(msg) => CreateError::Validation(msg),
            err => CreateError::Remote(err),
        }
    }
}

impl From<PollError> for CreateError {
    fn from(err: PollError) -> Self {
        match err {
            PollError::TimedOut {
                start,
                end,
                ceiling,
            } => CreateError::TimedOut {
                start,
                end,
                ceiling,
            },
            PollError::Gateway(err) => err.into(),
        }
    }
}
