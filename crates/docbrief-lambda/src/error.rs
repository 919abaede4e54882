use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
///
/// Messages are surfaced verbatim in the response body; this boundary
/// serves a trusted front end, not a public API.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
    MethodNotAllowed,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            ApiError::Internal(msg) => {
                tracing::error!("request failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<docbrief_storage::error::StorageError> for ApiError {
    fn from(e: docbrief_storage::error::StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<docbrief_extract::error::ExtractError> for ApiError {
    fn from(e: docbrief_extract::error::ExtractError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<docbrief_bedrock::error::BedrockError> for ApiError {
    fn from(e: docbrief_bedrock::error::BedrockError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
