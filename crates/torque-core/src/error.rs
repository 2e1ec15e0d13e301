use thiserror::Error;

/// Top-level error type for the Torque system.
///
/// Subsystem crates define their own error types (dispatch failures, ask-flow
/// errors); the variants here cover the cross-cutting concerns so that the
/// `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TorqueError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for TorqueError {
    fn from(err: toml::de::Error) -> Self {
        TorqueError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for TorqueError {
    fn from(err: toml::ser::Error) -> Self {
        TorqueError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TorqueError {
    fn from(err: serde_json::Error) -> Self {
        TorqueError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Torque operations.
pub type Result<T> = std::result::Result<T, TorqueError>;
