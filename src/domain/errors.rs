use thiserror::Error;

/// Failure while reading a page of passengers from the remote source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Request failed with status {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Failure reported by the submission collaborator. The display string
/// is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(String),
    #[error("Could not reach the signup service: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
    #[error("Invalid configuration value for {key}: {message}")]
    Invalid { key: String, message: String },
}

pub type FetchResult<T> = Result<T, FetchError>;
