//! Weighted stars/forks/recency scorer.

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::github::RepositoryRecord;
use crate::scoring::ScoringWeights;
use crate::scoring::rounding::round_half_up;

/// Unrounded weighted parts of one repository score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreComponents {
    pub stars: f64,
    pub forks: f64,
    pub recency: f64,
}

impl ScoreComponents {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.stars + self.forks + self.recency
    }
}

/// Scores repositories against the maxima of the batch they came in.
#[derive(Debug, Clone, Copy)]
pub struct WeightedScoring {
    weights: ScoringWeights,
}

impl WeightedScoring {
    #[must_use]
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Weighted components of `repo`'s score. `max_stars` and `max_forks`
    /// must be at least 1.
    #[must_use]
    pub fn components(
        &self,
        repo: &RepositoryRecord,
        max_stars: f64,
        max_forks: f64,
        now: DateTime<Utc>,
    ) -> ScoreComponents {
        let stars = (repo.stargazers_count as f64 / max_stars) * self.weights.stars;
        let forks = (repo.forks_count as f64 / max_forks) * self.weights.forks;
        let recency =
            self.recency_score(repo, now).to_f64().unwrap_or_default() * self.weights.recency;

        ScoreComponents {
            stars,
            forks,
            recency,
        }
    }

    /// Composite score of `repo`, rounded half-up to 2 decimals.
    #[must_use]
    pub fn score(
        &self,
        repo: &RepositoryRecord,
        max_stars: f64,
        max_forks: f64,
        now: DateTime<Utc>,
    ) -> Decimal {
        let components = self.components(repo, max_stars, max_forks, now);
        debug!(
            "raw scores. repo:{} - stars: {}, forks: {}, recency: {}",
            repo.full_name, components.stars, components.forks, components.recency
        );
        round_half_up(components.total(), 2)
    }

    /// Ratio of the repository's age in days to the days since its last
    /// update, both offset by one, rounded half-up to 2 decimals.
    ///
    /// Old repositories updated recently score high; one created and updated
    /// today scores exactly 1.00. There is no upper bound.
    #[must_use]
    pub fn recency_score(&self, repo: &RepositoryRecord, now: DateTime<Utc>) -> Decimal {
        let days_since_update = whole_days_between(repo.updated_at, now) + 1;
        let days_since_created = whole_days_between(repo.created_at, now) + 1;
        round_half_up(days_since_created as f64 / days_since_update as f64, 2)
    }
}

/// Complete 24-hour periods from `from` to `to`; timestamps after `to` count
/// as zero.
fn whole_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_days().max(0)
}
