//! Tests for the repository fetcher against a local search endpoint.

use std::time::Duration;

use axum::http::StatusCode;
use chrono::NaiveDate;
use github_scoring::{FetchError, RepositoryFetcher, SearchConfig};

use crate::support::{MockUpstream, repo_json, search_body};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
}

#[tokio::test]
async fn test_builds_search_query() {
    let upstream = MockUpstream::start(StatusCode::OK, search_body(vec![])).await;
    let search = upstream.search(SearchConfig::default());

    let records = search.fetch("rust", date()).await.unwrap().unwrap();
    assert!(records.is_empty());

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["q"], "language:rust created:>2024-01-31");
    assert_eq!(requests[0]["sort"], "stars");
    assert_eq!(requests[0]["order"], "desc");
}

#[tokio::test]
async fn test_parses_items_and_ignores_unknown_fields() {
    let body = search_body(vec![
        repo_json("owner1/repo1", 100, 50, 10, 5),
        repo_json("owner2/repo2", 200, 100, 20, 2),
    ]);
    let upstream = MockUpstream::start(StatusCode::OK, body).await;
    let search = upstream.search(SearchConfig::default());

    let records = search.fetch("java", date()).await.unwrap().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].full_name, "owner1/repo1");
    assert_eq!(records[0].name.as_deref(), Some("repo1"));
    assert_eq!(records[1].stargazers_count, 200);
    assert_eq!(records[1].forks_count, 100);
    assert_eq!(records[1].open_issues_count, 5);
    assert!(records[1].updated_at >= records[1].created_at);
}

#[tokio::test]
async fn test_same_query_is_served_from_cache() {
    let body = search_body(vec![repo_json("owner/repo", 1, 1, 3, 1)]);
    let upstream = MockUpstream::start(StatusCode::OK, body).await;
    let search = upstream.search(SearchConfig::default());

    let first = search.fetch("rust", date()).await.unwrap().unwrap();
    let second = search.fetch("rust", date()).await.unwrap().unwrap();

    assert_eq!(first, second);
    assert_eq!(upstream.requests().len(), 1);
    assert_eq!(search.cache_stats().await, (1, 1));
}

#[tokio::test]
async fn test_cache_key_is_language_and_date() {
    let upstream = MockUpstream::start(StatusCode::OK, search_body(vec![])).await;
    let search = upstream.search(SearchConfig::default());

    search.fetch("rust", date()).await.unwrap().unwrap();
    search.fetch("go", date()).await.unwrap().unwrap();
    search
        .fetch("rust", date().succ_opt().unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(upstream.requests().len(), 3);
}

#[tokio::test]
async fn test_expired_entries_are_refetched() {
    let upstream = MockUpstream::start(StatusCode::OK, search_body(vec![])).await;
    let search = upstream.search(SearchConfig {
        cache_ttl: Duration::ZERO,
        ..Default::default()
    });

    search.fetch("rust", date()).await.unwrap().unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    search.fetch("rust", date()).await.unwrap().unwrap();

    assert_eq!(upstream.requests().len(), 2);
}

#[tokio::test]
async fn test_upstream_error_status_is_fetch_error() {
    let upstream = MockUpstream::start(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"message":"Validation Failed","documentation_url":"https://docs.github.com"}"#,
    )
    .await;
    let search = upstream.search(SearchConfig::default());

    let result = search.fetch("rust", date()).await.unwrap();
    assert!(matches!(result, Err(FetchError::Octocrab(_))));
}

#[tokio::test]
async fn test_malformed_body_is_fetch_error_and_not_cached() {
    let upstream = MockUpstream::start(StatusCode::OK, r#"{"total_count": 3}"#).await;
    let search = upstream.search(SearchConfig::default());

    let first = search.fetch("rust", date()).await.unwrap();
    assert!(matches!(first, Err(FetchError::Parse(_))));
    assert!(search.fetch("rust", date()).await.unwrap().is_err());
    assert_eq!(upstream.requests().len(), 2);
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let upstream = MockUpstream::start_with_delay(
        StatusCode::OK,
        search_body(vec![]),
        Duration::from_secs(5),
    )
    .await;
    let search = upstream.search(SearchConfig {
        api_timeout: Duration::from_millis(100),
        ..Default::default()
    });

    let result = search.fetch("rust", date()).await.unwrap();
    assert!(matches!(result, Err(FetchError::Timeout(_))));
}

#[tokio::test]
async fn test_blank_language_is_rejected_without_calling_upstream() {
    let upstream = MockUpstream::start(StatusCode::OK, search_body(vec![])).await;
    let search = upstream.search(SearchConfig::default());

    let result = search.fetch("  ", date()).await.unwrap();
    assert!(matches!(result, Err(FetchError::InvalidInput(_))));
    assert!(upstream.requests().is_empty());
}
