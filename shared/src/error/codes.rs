//! Error codes for the booking service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Booking errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize compactly
/// and map cleanly onto log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Body is not a JSON object
    InvalidRequest = 1,

    // ==================== 1xxx: Booking ====================
    /// One or more required booking fields are absent or null
    BookingFieldsMissing = 1001,
    /// A booking field has the wrong JSON type
    BookingFieldsInvalid = 1002,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    ///
    /// For booking codes this is the exact text sent to clients.
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "Invalid request body",
            ErrorCode::BookingFieldsMissing => "Missing fields",
            ErrorCode::BookingFieldsInvalid => "Invalid fields",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ErrorCode::InvalidRequest),
            1001 => Ok(ErrorCode::BookingFieldsMissing),
            1002 => Ok(ErrorCode::BookingFieldsInvalid),
            9001 => Ok(ErrorCode::DatabaseError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
