//! GitHub API operations module
//!
//! Provides the repository search call using the octocrab library.

pub mod client;
pub mod error;
pub mod search_repositories;
pub mod util;

// Re-export client types
pub use client::{DEFAULT_BASE_URI, GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{FetchError, FetchResult};
pub use util::spawn_task;

// Re-export search functionality
pub use search_repositories::{
    DEFAULT_SEARCH_PATH, GithubSearch, RepositoryFetcher, RepositoryRecord, SearchConfig,
    SearchPage, SearchQuery,
};
