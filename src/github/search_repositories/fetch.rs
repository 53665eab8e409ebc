//! Repository fetching logic

use log::{debug, warn};

use crate::github::client::GitHubClient;
use crate::github::error::{FetchError, FetchResult};
use crate::github::search_repositories::config::SearchConfig;
use crate::github::search_repositories::types::{RepositoryRecord, SearchQuery};

/// Fetches repositories from GitHub matching the query
pub(crate) async fn fetch_repos(
    client: &GitHubClient,
    query: &SearchQuery,
    config: &SearchConfig,
) -> FetchResult<Vec<RepositoryRecord>> {
    let search_terms = query.to_search_terms();
    debug!("Searching GitHub repositories: {search_terms}");

    let search_future = client.search_repositories(&config.path, &search_terms);

    let page = tokio::time::timeout(config.api_timeout, search_future)
        .await
        .map_err(|_| FetchError::Timeout(config.api_timeout))??;

    if page.incomplete_results {
        warn!("GitHub reported incomplete results for `{search_terms}`");
    }
    debug!(
        "GitHub returned {} of {} repositories for `{search_terms}`",
        page.items.len(),
        page.total_count.unwrap_or(0)
    );

    Ok(page.items)
}
