use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use relay_core::CoreError;
use relay_generate::GenerateError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The request itself is unusable.
    BadRequest(String),
    /// The generation service failed or produced nothing usable.
    BadGateway(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("bad request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::BadGateway(msg) => {
                tracing::error!("upstream error: {msg}");
                (StatusCode::BAD_GATEWAY, msg)
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::EmptyGeneration => ApiError::BadGateway(e.to_string()),
            CoreError::MalformedTurn { .. } | CoreError::MissingMessage => {
                ApiError::BadRequest(e.to_string())
            }
        }
    }
}

impl From<GenerateError> for ApiError {
    fn from(e: GenerateError) -> Self {
        ApiError::BadGateway(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("invalid request body: {e}"))
    }
}
