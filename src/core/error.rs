use rusqlite;
use serde::Serialize;
use std::env;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathgenError {
    #[error("SQLite error: {0}")]
    RusqliteError(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] env::VarError),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unknown {kind}: {key}")]
    UnknownKey { kind: &'static str, key: String },
}

/// Domain failures. These never surface as `PathgenError`; they are folded into
/// an outcome with a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    DuplicateUsername,
    UserNotFound,
    InvalidCredentials,
    PersistenceFailure,
    InvalidUsername,
    NotAuthenticated,
}

/// Result of a mutating operation: a success flag plus the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub failure: Option<FailureKind>,
    pub message: String,
}

impl Outcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            failure: None,
            message: message.into(),
        }
    }

    pub fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            failure: Some(kind),
            message: message.into(),
        }
    }
}
