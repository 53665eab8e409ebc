//! GitHub Repository Search Operation
//!
//! Looks up repositories by language and creation date, memoizing results per
//! exact `(language, created_after)` pair.

mod cache;
mod config;
mod fetch;
mod types;

pub use config::{DEFAULT_SEARCH_PATH, SearchConfig};
pub use types::{RepositoryRecord, SearchPage, SearchQuery};

use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, error, info};
use tokio::sync::Mutex;

use crate::github::client::GitHubClient;
use crate::github::error::{FetchError, FetchResult};
use crate::github::util::spawn_task;
use crate::runtime::AsyncTask;

use cache::SearchCache;
use fetch::fetch_repos;

/// Source of repository records for a language and cutoff date.
///
/// Returns a task handle rather than a future so the trait stays object safe
/// and the lookup runs on the runtime independently of the caller.
pub trait RepositoryFetcher: Send + Sync + 'static {
    fn fetch(
        &self,
        language: &str,
        created_after: NaiveDate,
    ) -> AsyncTask<FetchResult<Vec<RepositoryRecord>>>;
}

/// GitHub-backed fetcher with an LRU/TTL response cache
pub struct GithubSearch {
    client: GitHubClient,
    cache: Arc<Mutex<SearchCache>>,
    config: SearchConfig,
}

impl GithubSearch {
    #[must_use]
    pub fn new(client: GitHubClient, config: SearchConfig) -> Self {
        Self {
            client,
            cache: Arc::new(Mutex::new(SearchCache::new(
                config.cache_capacity,
                config.cache_ttl,
            ))),
            config,
        }
    }

    /// Cache hits and misses since start
    pub async fn cache_stats(&self) -> (u64, u64) {
        self.cache.lock().await.cache_stats()
    }

    async fn run_search(
        query: SearchQuery,
        client: GitHubClient,
        cache: Arc<Mutex<SearchCache>>,
        config: SearchConfig,
    ) -> FetchResult<Vec<RepositoryRecord>> {
        {
            let mut c = cache.lock().await;
            c.cleanup_expired();
            if let Some(records) = c.get_if_valid(&query) {
                let (hits, misses) = c.cache_stats();
                debug!(
                    "Cache hit for {} created after {} (hits: {hits}, misses: {misses})",
                    query.language, query.created_after
                );
                return Ok(records);
            }
        }

        info!(
            "Fetching {} repositories created after {}",
            query.language, query.created_after
        );
        let records = fetch_repos(&client, &query, &config)
            .await
            .inspect_err(|e| error!("Repository search failed: {e}"))?;

        cache.lock().await.put(query, records.clone());
        Ok(records)
    }
}

impl RepositoryFetcher for GithubSearch {
    fn fetch(
        &self,
        language: &str,
        created_after: NaiveDate,
    ) -> AsyncTask<FetchResult<Vec<RepositoryRecord>>> {
        if language.trim().is_empty() {
            return AsyncTask::ready(Err(FetchError::InvalidInput(
                "language must not be blank".to_string(),
            )));
        }

        let query = SearchQuery::new(language, created_after);
        let client = self.client.clone();
        let cache = self.cache.clone();
        let config = self.config.clone();

        spawn_task(Self::run_search(query, client, cache, config))
    }
}
