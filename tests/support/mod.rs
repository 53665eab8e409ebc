//! Local stand-in for the GitHub search endpoint.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use chrono::{DateTime, Duration as Days, Utc};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use github_scoring::{GitHubClient, GithubSearch, SearchConfig};

pub const SEARCH_PATH: &str = "/search/repositories";

struct UpstreamState {
    status: StatusCode,
    body: String,
    delay: Duration,
    requests: Mutex<Vec<HashMap<String, String>>>,
}

pub struct MockUpstream {
    pub base_url: String,
    state: Arc<UpstreamState>,
}

impl MockUpstream {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(
        status: StatusCode,
        body: impl Into<String>,
        delay: Duration,
    ) -> Self {
        let state = Arc::new(UpstreamState {
            status,
            body: body.into(),
            delay,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route(SEARCH_PATH, get(search))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Query strings of every request received so far.
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn search(&self, config: SearchConfig) -> GithubSearch {
        let client = GitHubClient::builder()
            .base_uri(self.base_url.clone())
            .build()
            .unwrap();
        GithubSearch::new(client, config)
    }
}

async fn search(
    State(state): State<Arc<UpstreamState>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(params);
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (
        state.status,
        [("content-type", "application/json")],
        state.body.clone(),
    )
}

/// One upstream repository object, including fields the service ignores.
pub fn repo_json(
    full_name: &str,
    stars: u64,
    forks: u64,
    created_days_ago: i64,
    updated_days_ago: i64,
) -> Value {
    let now = Utc::now();
    let ts = |days: i64| -> String { (now - Days::days(days)).to_rfc3339() };
    json!({
        "id": 1,
        "name": full_name.split('/').next_back().unwrap_or(full_name),
        "full_name": full_name,
        "description": "Test repository",
        "language": "Java",
        "stargazers_count": stars,
        "forks_count": forks,
        "open_issues_count": 5,
        "created_at": ts(created_days_ago),
        "updated_at": ts(updated_days_ago),
        "owner": { "login": "someone" },
        "html_url": "https://github.com/example",
        "topics": [],
        "archived": false
    })
}

pub fn search_body(items: Vec<Value>) -> String {
    json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items
    })
    .to_string()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Days::days(days)
}
