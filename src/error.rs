//! Error types

use thiserror::Error;

/// Errors produced by the scraper
#[derive(Debug, Error)]
pub enum Error {
    /// A search was requested with no terms
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP request could not be completed
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// A task was spawned outside of a tokio runtime
    #[error("no tokio runtime available to spawn the search task")]
    NoRuntime,

    /// Settings could not be parsed or failed validation
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
