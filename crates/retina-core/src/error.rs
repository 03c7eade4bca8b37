//! Error taxonomy shared by every layer of the client.
//!
//! Failures are never retried or swallowed: each variant is a hard failure of
//! the requested operation, surfaced to the immediate caller.

use std::time::Duration;

use thiserror::Error;

/// Errors produced while building, issuing or correlating a request.
#[derive(Debug, Error)]
pub enum Error {
    /// Blank or missing api key, server address or retina name, or a config
    /// source that could not be loaded. No usable client is produced.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid input rejected before any network activity.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// A model tree could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The transport (or the server behind it) signalled a failure.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl Error {
    pub fn argument(message: impl Into<String>) -> Self {
        Error::Argument(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Configuration(err.to_string())
    }
}

/// Failures reported by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A bulk response did not contain one result group per submitted input.
    #[error("expected {expected} result groups, server returned {actual}")]
    ResultCount { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
