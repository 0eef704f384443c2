//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::BookingFieldsMissing | Self::BookingFieldsInvalid => {
                StatusCode::BAD_REQUEST
            }
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
