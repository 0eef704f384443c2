//! Data models

pub mod booking;

pub use booking::{Booking, BookingPayloadError, NewBooking, REQUIRED_FIELDS};
