//! Request-scoped orchestration: fetch repositories, then score them.

use std::sync::Arc;

use chrono::NaiveDate;
use log::info;
use thiserror::Error;

use crate::github::{FetchError, RepositoryFetcher};
use crate::runtime::TaskDropped;
use crate::scoring::{ScoreResult, ScoringWeights, score_all};

/// Failure of one scoring request
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("repository fetch did not complete: {0}")]
    Unexpected(#[from] TaskDropped),
}

/// Fetches repositories and ranks them with fixed weights.
#[derive(Clone)]
pub struct ScoringService {
    fetcher: Arc<dyn RepositoryFetcher>,
    weights: ScoringWeights,
}

impl ScoringService {
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>, weights: ScoringWeights) -> Self {
        Self { fetcher, weights }
    }

    /// Repositories in `language` created after `created_after`, best first.
    pub async fn score_repositories(
        &self,
        language: &str,
        created_after: NaiveDate,
    ) -> Result<Vec<ScoreResult>, ServiceError> {
        let records = self.fetcher.fetch(language, created_after).await??;
        let results = score_all(&records, self.weights);
        info!(
            "Scored {} {language} repositories created after {created_after}",
            results.len()
        );
        Ok(results)
    }
}
