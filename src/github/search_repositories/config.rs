//! Configuration for search operations

use std::time::Duration;

/// Default search endpoint, relative to the client's base URI
pub const DEFAULT_SEARCH_PATH: &str = "/search/repositories";

/// Configuration for search operations
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub path: String,
    pub api_timeout: Duration,
    pub cache_capacity: usize,
    pub cache_ttl: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_SEARCH_PATH.to_string(),
            api_timeout: Duration::from_secs(10),
            cache_capacity: 1000,
            cache_ttl: Duration::from_secs(3600), // 1 hour
        }
    }
}
