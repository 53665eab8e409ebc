// HTTP Server: GitHub repository scoring
//
// Reads configuration once, wires the GitHub fetcher into the scoring service
// and serves `POST /score` until interrupted.

use std::sync::Arc;

use anyhow::{Context, Result};
use github_scoring::{AppConfig, GitHubClient, GithubSearch, ScoringService, router, serve};
use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load().context("loading configuration")?;
    let weights = config.scoring.weights;
    info!(
        "Scoring weights: stars={}, forks={}, recency={}",
        weights.stars, weights.forks, weights.recency
    );

    let mut client = GitHubClient::builder().base_uri(config.github.base_url.clone());
    if let Some(token) = config.github.token.clone() {
        client = client.personal_token(token);
    } else {
        info!("GITHUB_TOKEN not set, using unauthenticated GitHub requests");
    }
    let client = client.build().context("building GitHub client")?;

    let fetcher = Arc::new(GithubSearch::new(client, config.search_config()));
    let service = ScoringService::new(fetcher, weights);

    let bind = config.bind_addr()?;
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {bind}"))?;

    serve(listener, router(service), shutdown_signal()).await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
