//! API error type and its status-code mapping.
//!
//! Each variant maps to a fixed HTTP status via [`ApiError::status_code`]
//! and renders as a `{"error": "..."}` JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;
use std::fmt::{Display, Formatter};

/// Tagged API failure, one variant per error kind the boundary surfaces.
#[derive(Debug)]
pub enum ApiError {
    /// 400 - a required field is absent or empty.
    Validation(String),
    /// 400 - a foreign-key target does not exist.
    Reference(String),
    /// 404 - no row matched the id.
    NotFound(String),
    /// 409 - a write would duplicate a unique key.
    Conflict(String),
    /// 500 - underlying persistence failure.
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Reference(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::Reference(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Internal(message) => message,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(
                "event=request_failed module=api status=error code=500 error={}",
                self.message()
            );
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
