//! Error types for the Nimbus bridge

use thiserror::Error;

/// Configuration shape errors.
///
/// Raised before any network activity and never retried: a rejected
/// configuration means the whole setup attempt is abandoned.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid camera entry '{name}': {reason}")]
    InvalidCameraEntry { name: String, reason: String },
}

/// Authentication and bootstrap errors.
///
/// Any of these makes the integration instance non-functional for its
/// lifetime; nothing in the bridge retries on its own.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("account credentials were not accepted by the device cloud")]
    InvalidCredentials,
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}

/// Context store sequencing errors.
///
/// These indicate a defect in the caller's ordering, not a runtime
/// condition to recover from.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("context store queried before a session was stored")]
    NotInitialized,

    #[error("context store already holds a session")]
    AlreadyInitialized,
}

/// Logging initialization error
#[derive(Error, Debug)]
#[error("failed to initialize logging: {0}")]
pub struct LoggingError(pub String);
