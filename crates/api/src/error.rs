use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meetscribe_services::{CompletionError, MinutesError, QaError, StoreError};
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Validation(String),
    Unavailable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation", msg),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<CompletionError> for ApiError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::NotConfigured => {
                ApiError::Unavailable("Completion backend not configured".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<MinutesError> for ApiError {
    fn from(err: MinutesError) -> Self {
        match err {
            MinutesError::Completion(e) => e.into(),
            MinutesError::InvalidJson(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<QaError> for ApiError {
    fn from(err: QaError) -> Self {
        match err {
            QaError::Completion(e) => e.into(),
            QaError::Store(e) => e.into(),
        }
    }
}
