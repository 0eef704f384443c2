//! Shared types for the booking service
//!
//! Common types used by the server crate and its tests: error codes,
//! the response envelope, the booking model and small utilities.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

pub use error::{AppError, ErrorCode};
pub use models::{Booking, NewBooking};
pub use response::ApiResponse;
