//! Error types for the group engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Engine errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to fetch data from {location}: {reason}")]
    FetchFailed { location: String, reason: String },

    #[error("No groups returned by {location}")]
    EmptyResult { location: String },

    #[error("Invalid group payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {dimension} filter: '{value}'")]
    InvalidCriteria {
        dimension: &'static str,
        value: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] groupboard_config::ConfigError),

    #[error("User input error: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}
