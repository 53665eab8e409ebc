//! `github_scoring` - rank GitHub repositories by popularity and recency
//!
//! Searches GitHub for repositories in a language created after a date and
//! scores each one from its stars, forks and a recency ratio. The scoring
//! engine is pure; the fetcher and HTTP server wrap it.

// Module declarations
pub mod config;
pub mod github;
pub mod runtime;
pub mod scoring;
pub mod server;
pub mod service;

// Re-export runtime types
pub use runtime::{AsyncTask, TaskDropped};

// Re-export configuration
pub use config::{AppConfig, ConfigError};

// Re-export GitHub client and search types
pub use github::{
    FetchError, FetchResult, GitHubClient, GitHubClientBuilder, GithubSearch, RepositoryFetcher,
    RepositoryRecord, SearchConfig, SearchQuery,
};

// Re-export scoring types
pub use scoring::{
    ScoreComponents, ScoreResult, ScoringError, ScoringWeights, WeightedScoring, score_all,
    score_all_at,
};

// Re-export service and server entry points
pub use server::{ApiError, router, serve};
pub use service::{ScoringService, ServiceError};
