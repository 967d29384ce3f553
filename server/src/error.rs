//! Error signal for the todo API.
//!
//! # Design
//! Handlers never render errors themselves; they return an `ApiError` and
//! let the `IntoResponse` impl below produce the response. Every error kind
//! shares one JSON envelope, `{"success": false, "message": …}`, so clients
//! distinguish kinds by HTTP status and message text alone. `NotFound` and
//! `Validation` carry caller-facing messages; `Internal` carries a detail
//! string that is logged and never leaves the process — the client sees a
//! fixed generic message with status 500.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// A typed failure that short-circuits a request.
#[derive(Debug)]
pub enum ApiError {
    /// The requested record does not exist — rendered as 404.
    NotFound(String),

    /// Required input is missing or empty — rendered as 400.
    Validation(String),

    /// Any other failure. The detail is logged; the response is a generic
    /// 500 with no internals leaked.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "not found: {msg}"),
            ApiError::Validation(msg) => write!(f, "validation failed: {msg}"),
            ApiError::Internal(detail) => write!(f, "internal error: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "unexpected failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { success: false, message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_value(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_renders_404_envelope() {
        let response = ApiError::NotFound("Todo not found with this id".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_value(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Todo not found with this id");
    }

    #[tokio::test]
    async fn validation_renders_400_envelope() {
        let response =
            ApiError::Validation("Please enter the appropriate fields".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_value(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Please enter the appropriate fields");
    }

    #[tokio::test]
    async fn internal_never_leaks_its_detail() {
        let response = ApiError::Internal("lock poisoned at store.rs:42".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_value(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Internal server error");
    }
}
