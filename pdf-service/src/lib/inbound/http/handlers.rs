use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::document::errors::QueueError;
use crate::document::errors::RenderError;

pub mod download_pdf;
pub mod enqueue_pdf;

/// HTTP error envelope: `{"error": <category>, "message": <detail>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 401 - missing/malformed header or any token fault
    Unauthorized(String),
    /// 500 - internal detail is logged, never returned
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "Auth Error", msg),
            ApiError::InternalServerError(msg) => {
                tracing::error!(detail = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(ApiErrorBody {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<QueueError> for ApiError {
    fn from(err: QueueError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}
