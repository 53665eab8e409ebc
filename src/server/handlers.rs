//! HTTP handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;

use crate::scoring::ScoreResult;
use crate::server::AppState;
use crate::server::error::ApiError;
use crate::server::request::{FieldError, ScoreRequest};

// POST /score
// request: {"language": "rust", "createdAfter": "2024-01-31"}
// return: repositories in that language created after the date, best score first
pub async fn score_repositories(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vec<ScoreResult>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
    })?;
    let request = ScoreRequest::from_json(request).map_err(ApiError::Validation)?;

    let scores = state
        .service
        .score_repositories(&request.language, request.created_after)
        .await?;
    Ok(Json(scores))
}
