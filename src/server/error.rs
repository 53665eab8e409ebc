//! Mapping of request failures onto HTTP responses.
//!
//! Full detail goes to the log; callers only ever see the fixed messages
//! below.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use log::{error, warn};
use serde_json::json;
use thiserror::Error;

use crate::github::FetchError;
use crate::server::request::FieldError;
use crate::service::ServiceError;

pub const VALIDATION_ERROR: &str = "Validation Error";
pub const GITHUB_API_ERROR: &str = "GitHub API Error";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

const GITHUB_API_MESSAGE: &str = "Unable to fetch data from GitHub API";
const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Unexpected(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Fetch(e) => ApiError::Fetch(e),
            other => ApiError::Unexpected(other.to_string()),
        }
    }
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Fetch(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let timestamp = Utc::now().to_rfc3339();

        let body = match &self {
            ApiError::Validation(errors) => {
                warn!("Validation error: {errors:?}");
                json!({
                    "timestamp": timestamp,
                    "status": status.as_u16(),
                    "error": VALIDATION_ERROR,
                    "errors": errors,
                })
            }
            ApiError::Fetch(e) => {
                error!("GitHub API exception: {e:?}");
                json!({
                    "timestamp": timestamp,
                    "status": status.as_u16(),
                    "error": GITHUB_API_ERROR,
                    "message": GITHUB_API_MESSAGE,
                })
            }
            ApiError::Unexpected(detail) => {
                error!("Unknown exception: {detail}");
                json!({
                    "timestamp": timestamp,
                    "status": status.as_u16(),
                    "error": INTERNAL_SERVER_ERROR,
                    "message": UNEXPECTED_MESSAGE,
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
