//! Application error type and its HTTP rendering

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use crate::response::ApiResponse;
use http::StatusCode;
use thiserror::Error;

/// Message sent to clients for every system-category error.
///
/// The real cause is logged, never returned.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application error with structured error code
///
/// This is the primary error type for the booking service, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Message safe to show to the client
    pub fn client_message(&self) -> &str {
        if self.is_system() {
            INTERNAL_ERROR_MESSAGE
        } else {
            &self.message
        }
    }

    fn is_system(&self) -> bool {
        matches!(self.code.category(), ErrorCategory::System)
            || self.http_status().is_server_error()
    }

    // ==================== Convenience constructors ====================

    /// Required booking fields are absent
    pub fn missing_fields() -> Self {
        Self::new(ErrorCode::BookingFieldsMissing)
    }

    /// Booking fields have the wrong JSON type
    pub fn invalid_fields() -> Self {
        Self::new(ErrorCode::BookingFieldsInvalid)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        if self.is_system() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        let body = ApiResponse::error(self.client_message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::BookingFieldsMissing);
        assert_eq!(err.code, ErrorCode::BookingFieldsMissing);
        assert_eq!(err.message, "Missing fields");
    }

    #[test]
    fn test_app_error_with_message() {
        let err = AppError::with_message(ErrorCode::DatabaseError, "disk I/O error");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "disk I/O error");
        assert_eq!(format!("{}", err), "disk I/O error");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(AppError::missing_fields().http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::invalid_fields().http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::database("boom").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_message_hides_system_errors() {
        let err = AppError::database("no such table: bookings");
        assert_eq!(err.client_message(), INTERNAL_ERROR_MESSAGE);

        let err = AppError::missing_fields();
        assert_eq!(err.client_message(), "Missing fields");
    }

    #[tokio::test]
    async fn test_into_response_missing_fields() {
        let response = AppError::missing_fields().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "error", "message": "Missing fields"})
        );
    }

    #[tokio::test]
    async fn test_into_response_database_error() {
        let response = AppError::database("database is locked").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "error", "message": "Internal Server Error"})
        );
    }
}
