//! Unified error system for the booking service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`AppError`]: Error type with code and message, renders as an HTTP response
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Booking errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::BookingFieldsMissing);
//! assert_eq!(err.message, "Missing fields");
//!
//! let err = AppError::with_message(ErrorCode::InvalidRequest, "Invalid request body");
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, INTERNAL_ERROR_MESSAGE};
