//! Process configuration, read once at startup.
//!
//! Settings come from a TOML file (every key optional) with a few
//! environment overrides layered on top:
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:8080"
//!
//! [github]
//! base_url = "https://api.github.com"
//! path = "/search/repositories"
//! timeout_secs = 10
//!
//! [cache]
//! capacity = 1000
//! ttl_secs = 3600
//!
//! [scoring.weights]
//! stars = 0.4
//! forks = 0.3
//! recency = 0.3
//! ```

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::github::{DEFAULT_BASE_URI, DEFAULT_SEARCH_PATH, SearchConfig};
use crate::scoring::{ScoringError, ScoringWeights};

pub const DEFAULT_CONFIG_FILE: &str = "github-scoring.toml";
pub const CONFIG_PATH_ENV: &str = "GITHUB_SCORING_CONFIG";
pub const BIND_ENV: &str = "GITHUB_SCORING_BIND";
pub const BASE_URL_ENV: &str = "GITHUB_API_BASE_URL";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Weights(#[from] ScoringError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub github: GitHubApiConfig,
    pub cache: CacheConfig,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct GitHubApiConfig {
    pub base_url: String,
    pub path: String,
    pub timeout_secs: u64,
    /// Only ever taken from the environment.
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URI.to_string(),
            path: DEFAULT_SEARCH_PATH.to_string(),
            timeout_secs: 10,
            token: None,
        }
    }
}

impl fmt::Debug for GitHubApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubApiConfig")
            .field("base_url", &self.base_url)
            .field("path", &self.path)
            .field("timeout_secs", &self.timeout_secs)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub capacity: usize,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            ttl_secs: 3600,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
}

impl AppConfig {
    /// Loads the file named by `GITHUB_SCORING_CONFIG`, or
    /// `github-scoring.toml` in the working directory when present, applies
    /// environment overrides and validates the result.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let path = explicit.or_else(|| {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.exists().then_some(default)
        });

        let mut config = match path {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overrides taken from `lookup` (normally the process environment).
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(bind) = lookup(BIND_ENV) {
            self.server.bind = bind;
        }
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.github.base_url = base_url;
        }
        self.github.token = lookup(TOKEN_ENV).filter(|t| !t.trim().is_empty());
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        if !(self.github.base_url.starts_with("http://")
            || self.github.base_url.starts_with("https://"))
        {
            return Err(ConfigError::Invalid(format!(
                "github.base_url must be an http(s) URL, got `{}`",
                self.github.base_url
            )));
        }
        if self.github.path.trim().is_empty() {
            return Err(ConfigError::Invalid("github.path must not be empty".to_string()));
        }
        if self.github.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "github.timeout_secs must be positive".to_string(),
            ));
        }
        self.scoring.weights.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server.bind.parse().map_err(|e| {
            ConfigError::Invalid(format!("server.bind `{}`: {e}", self.server.bind))
        })
    }

    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            path: self.github.path.clone(),
            api_timeout: Duration::from_secs(self.github.timeout_secs),
            cache_capacity: self.cache.capacity,
            cache_ttl: Duration::from_secs(self.cache.ttl_secs),
        }
    }
}
