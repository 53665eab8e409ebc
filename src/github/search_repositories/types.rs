//! Type definitions for GitHub repository search

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Input of one search: every repository in `language` created after
/// `created_after`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    pub language: String,
    pub created_after: NaiveDate,
}

impl SearchQuery {
    #[must_use]
    pub fn new(language: impl Into<String>, created_after: NaiveDate) -> Self {
        Self {
            language: language.into(),
            created_after,
        }
    }

    /// GitHub search expression, e.g. `language:rust created:>2024-01-31`.
    #[must_use]
    pub fn to_search_terms(&self) -> String {
        format!(
            "language:{} created:>{}",
            self.language,
            self.created_after.format("%Y-%m-%d")
        )
    }
}

/// One repository as returned by the search endpoint.
///
/// Only the fields the scorer needs are kept; everything else in the upstream
/// payload is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `GET /search/repositories`
#[derive(Clone, Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<RepositoryRecord>,
}

/// Cache entry with expiration tracking
pub(crate) struct SearchCacheEntry {
    pub records: Vec<RepositoryRecord>,
    pub cached_at: DateTime<Utc>,
}

impl SearchCacheEntry {
    pub fn is_expired(&self, ttl: Duration) -> bool {
        let ttl = chrono::TimeDelta::from_std(ttl).unwrap_or(chrono::TimeDelta::MAX);
        Utc::now() - self.cached_at > ttl
    }
}
