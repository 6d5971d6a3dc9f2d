use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::core::GatewayError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Error surface of the HTTP handlers.
///
/// Every handler is a single error boundary: validation problems answer 400,
/// explicit lookup misses on the game endpoints answer 404, and everything
/// the persistence layer reports is surfaced as 500 with the message in the
/// body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Validation(message) => Self::BadRequest(message),
            // NotFound/AlreadyExists from the gateway keep the original
            // contract: surfaced through the catch-all with their message.
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorResponse { message })).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
