use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const NOT_FOUND_MESSAGE: &str = "The requested resource was not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";

/// JSON body returned for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: message.into(),
            status_code: status.as_u16(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    pub(crate) fn from_error(err: &AppError) -> Self {
        match err {
            AppError::Internal(_) => Self::internal(),
            _ => Self::new(status_for(err), err.message()),
        }
    }

    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            log_app_error(&self, status);
        }
        ErrorBody::from_error(&self).into_response()
    }
}

pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Conflict(_) => StatusCode::CONFLICT,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn log_app_error(err: &AppError, status: StatusCode) {
    tracing::error!(status = status.as_u16(), error = %err, "request failed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_details() {
        let body = ErrorBody::from_error(&AppError::internal("connection refused"));
        assert_eq!(body, ErrorBody::internal());
        assert_eq!(body.error, "Internal Server Error");
        assert_eq!(body.status_code, 500);
    }

    #[test]
    fn client_errors_keep_their_message() {
        let body = ErrorBody::from_error(&AppError::conflict("Duplicate value: slug"));
        assert_eq!(body.error, "Conflict");
        assert_eq!(body.message, "Duplicate value: slug");
        assert_eq!(body.status_code, 409);
    }

    #[test]
    fn not_found_body_matches_public_contract() {
        let body = ErrorBody::not_found();
        assert_eq!(body.error, "Not Found");
        assert_eq!(body.message, "The requested resource was not found");
        assert_eq!(body.status_code, 404);
    }
}
