use std::result::Result as StdResult;

use thiserror::Error;

use crate::config::ConfigError;

/// Unified error type for domain, registry, and storage layers.
#[derive(Debug, Error)]
pub enum EcoError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Household ID already exists: {0}")]
    DuplicateId(String),
    #[error("Household not found: {0}")]
    NotFound(String),
    #[error("No households registered")]
    EmptyRegistry,
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, EcoError>;

impl From<std::io::Error> for EcoError {
    fn from(err: std::io::Error) -> Self {
        EcoError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for EcoError {
    fn from(err: serde_json::Error) -> Self {
        EcoError::Persistence(err.to_string())
    }
}

impl From<ConfigError> for EcoError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => EcoError::Config(io.to_string()),
            ConfigError::Serde(message) | ConfigError::Invalid(message) => {
                EcoError::Config(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_become_persistence_errors() {
        let err = EcoError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(matches!(err, EcoError::Persistence(message) if message.contains("denied")));
    }

    #[test]
    fn config_errors_keep_their_message() {
        let err = EcoError::from(ConfigError::Invalid("rate for metal is negative".into()));
        assert_eq!(
            err.to_string(),
            "Configuration error: rate for metal is negative"
        );
    }
}
