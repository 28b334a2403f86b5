use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::AccountError;

pub mod login;
pub mod signup;

/// HTTP error envelope: `{"error": <category>, "message": <detail>}`.
///
/// The wire contract both services and their clients agree on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400 - duplicate email and other user-recoverable registration faults
    Registration(String),
    /// 401 - invalid credentials, one message for every cause
    Unauthorized,
    /// 422 - syntactically invalid input
    UnprocessableEntity(String),
    /// 500 - internal detail is logged, never returned
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Registration(msg) => {
                (StatusCode::BAD_REQUEST, "Registration Error", msg)
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Auth Error",
                "Incorrect email or password".to_string(),
            ),
            ApiError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", msg)
            }
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

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::DuplicateEmail => ApiError::Registration(err.to_string()),
            AccountError::InvalidCredentials => ApiError::Unauthorized,
            AccountError::InvalidName(_)
            | AccountError::InvalidEmail(_)
            | AccountError::InvalidUserId(_) => ApiError::UnprocessableEntity(err.to_string()),
            AccountError::Password(_)
            | AccountError::Token(_)
            | AccountError::Database(_)
            | AccountError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}
