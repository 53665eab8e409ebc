//! Repository scoring engine
//!
//! Turns a batch of repository records into score results ranked by a
//! weighted sum of normalized stars, normalized forks and a recency ratio.

mod rounding;
mod weighted;

pub use rounding::round_half_up;
pub use weighted::{ScoreComponents, WeightedScoring};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::github::RepositoryRecord;

/// Errors raised while setting up scoring
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("scoring weight `{name}` must be a finite, non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
}

/// Coefficients of the three score components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub stars: f64,
    pub forks: f64,
    pub recency: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            stars: 0.4,
            forks: 0.3,
            recency: 0.3,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), ScoringError> {
        for (name, value) in [
            ("stars", self.stars),
            ("forks", self.forks),
            ("recency", self.recency),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// A repository with its computed score, as returned to API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub score: Decimal,
}

impl ScoreResult {
    fn from_record(repo: &RepositoryRecord, score: Decimal) -> Self {
        Self {
            full_name: repo.full_name.clone(),
            description: repo.description.clone(),
            language: repo.language.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            open_issues: repo.open_issues_count,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
            score,
        }
    }
}

/// Scores every record and sorts the results by score, highest first.
#[must_use]
pub fn score_all(records: &[RepositoryRecord], weights: ScoringWeights) -> Vec<ScoreResult> {
    score_all_at(records, weights, Utc::now())
}

/// [`score_all`] with an explicit clock.
///
/// Stars and forks are normalized by the batch maximum (floored at 1). Ties
/// keep their input order.
#[must_use]
pub fn score_all_at(
    records: &[RepositoryRecord],
    weights: ScoringWeights,
    now: DateTime<Utc>,
) -> Vec<ScoreResult> {
    if records.is_empty() {
        return Vec::new();
    }

    let max_stars = records
        .iter()
        .map(|r| r.stargazers_count)
        .fold(1, u64::max) as f64;
    let max_forks = records.iter().map(|r| r.forks_count).fold(1, u64::max) as f64;

    let scorer = WeightedScoring::new(weights);
    let mut results: Vec<ScoreResult> = records
        .iter()
        .map(|repo| {
            ScoreResult::from_record(repo, scorer.score(repo, max_stars, max_forks, now))
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
