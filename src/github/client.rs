//! GitHub API client wrapper
//!
//! Provides a clean API for the repository search call without exposing
//! Octocrab to the rest of the crate.
//!
//! # Examples
//!
//! ```rust,no_run
//! use github_scoring::GitHubClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gh = GitHubClient::builder()
//!     .base_uri("https://api.github.com")
//!     .build()?;
//! # let _ = gh;
//! # Ok(())
//! # }
//! ```

use crate::github::error::{FetchError, FetchResult};
use crate::github::search_repositories::SearchPage;
use crate::github::util::join_url;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

/// Public GitHub REST endpoint
pub const DEFAULT_BASE_URI: &str = "https://api.github.com";

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
    base_uri: String,
}

/// Query string of a repository search request.
#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    sort: &'a str,
    order: &'a str,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Base URI every request is resolved against
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Run a repository search against `path` (relative to the base URI),
    /// sorted by stars, descending.
    pub async fn search_repositories(&self, path: &str, query: &str) -> FetchResult<SearchPage> {
        let url = join_url(&self.base_uri, path);
        let params = SearchParams {
            q: query,
            sort: "stars",
            order: "desc",
        };
        let body: serde_json::Value = self.inner.get(url, Some(&params)).await?;
        let page = serde_json::from_value::<SearchPage>(body)?;
        Ok(page)
    }
}

/// Builder for `GitHubClient`
#[derive(Debug, Clone)]
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (GitHub Enterprise, or a local stand-in)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> FetchResult<GitHubClient> {
        // Several rustls backends are linked; pick one before octocrab needs it.
        // An already installed provider is fine.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut builder = Octocrab::builder();

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        let base_uri = self
            .base_uri
            .unwrap_or_else(|| DEFAULT_BASE_URI.to_string());
        builder = builder
            .base_uri(&base_uri)
            .map_err(|e| FetchError::ClientSetup(e.to_string()))?;

        let octocrab = builder
            .build()
            .map_err(|e| FetchError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
            base_uri,
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
