//! HTTP server exposing the scoring endpoint.

pub mod error;
pub mod handlers;
pub mod request;

pub use error::ApiError;
pub use request::{FieldError, ScoreRequest, ValidScoreRequest};

use std::future::Future;
use std::io;

use axum::Router;
use axum::routing::post;
use log::info;
use tokio::net::TcpListener;

use crate::service::ScoringService;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub service: ScoringService,
}

/// Routes of the service
pub fn router(service: ScoringService) -> Router {
    Router::new()
        .route("/score", post(handlers::score_repositories))
        .with_state(AppState { service })
}

/// Serves `router` on `listener` until `shutdown` resolves.
pub async fn serve<S>(listener: TcpListener, router: Router, shutdown: S) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
