//! GitHub API error types

use std::time::Duration;
use thiserror::Error;

/// Error types for the repository search call
#[derive(Debug, Error)]
pub enum FetchError {
    /// Octocrab library error (transport, non-success status, undecodable body)
    #[error("GitHub request failed: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// The search call did not answer in time
    #[error("GitHub request timed out after {0:?}")]
    Timeout(Duration),

    /// The response decoded but was not a repository search page
    #[error("Failed to parse GitHub repositories: {0}")]
    Parse(String),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Convenience result alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
