//! API Response types
//!
//! Every endpoint answers with the same small envelope:
//! ```json
//! { "status": "success", "message": "Reservation received" }
//! ```

use serde::{Deserialize, Serialize};

/// Status value for successful responses
pub const STATUS_SUCCESS: &str = "success";
/// Status value for error responses
pub const STATUS_ERROR: &str = "error";

/// Unified API response structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// `success` or `error`
    pub status: String,
    /// Human-readable message
    pub message: String,
}

impl ApiResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: message.into(),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
        }
    }
}
