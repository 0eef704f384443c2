//! Booking Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::AppError;

/// Keys every reservation request must carry, in display order
pub const REQUIRED_FIELDS: [&str; 6] = ["date", "time", "guests", "occasion", "phone", "email"];

/// Stored booking (one row of `bookings`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub occasion: String,
    pub phone: String,
    pub email: String,
    /// Insert time, UTC milliseconds
    pub created_at: i64,
}

/// Validated reservation request, ready to insert
///
/// Values are kept as sent: dates and times are free-form text and the
/// party size is not range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub occasion: String,
    pub phone: String,
    pub email: String,
}

/// Why a reservation payload was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingPayloadError {
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("missing fields: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid fields: {}", .0.join(", "))]
    Invalid(Vec<&'static str>),
}

impl From<BookingPayloadError> for AppError {
    fn from(e: BookingPayloadError) -> Self {
        match e {
            BookingPayloadError::NotAnObject => AppError::invalid_request("Invalid request body"),
            BookingPayloadError::Missing(_) => AppError::missing_fields(),
            BookingPayloadError::Invalid(_) => AppError::invalid_fields(),
        }
    }
}

impl NewBooking {
    /// Validate a decoded JSON body.
    ///
    /// Presence is checked before types: a payload that is missing one key
    /// and has another of the wrong type reports `Missing`. A key holding
    /// `null` counts as missing.
    pub fn from_json(value: &Value) -> Result<Self, BookingPayloadError> {
        let obj = value.as_object().ok_or(BookingPayloadError::NotAnObject)?;

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|key| obj.get(*key).is_none_or(Value::is_null))
            .collect();
        if !missing.is_empty() {
            return Err(BookingPayloadError::Missing(missing));
        }

        let mut invalid = Vec::new();
        let date = text_field(obj, "date", &mut invalid);
        let time = text_field(obj, "time", &mut invalid);
        let guests = obj.get("guests").and_then(Value::as_i64);
        if guests.is_none() {
            invalid.push("guests");
        }
        let occasion = text_field(obj, "occasion", &mut invalid);
        let phone = text_field(obj, "phone", &mut invalid);
        let email = text_field(obj, "email", &mut invalid);

        match (date, time, guests, occasion, phone, email) {
            (Some(date), Some(time), Some(guests), Some(occasion), Some(phone), Some(email)) => {
                Ok(Self {
                    date,
                    time,
                    guests,
                    occasion,
                    phone,
                    email,
                })
            }
            _ => Err(BookingPayloadError::Invalid(invalid)),
        }
    }
}

fn text_field(
    obj: &Map<String, Value>,
    key: &'static str,
    invalid: &mut Vec<&'static str>,
) -> Option<String> {
    match obj.get(key).and_then(Value::as_str) {
        Some(s) => Some(s.to_string()),
        None => {
            invalid.push(key);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "date": "2024-05-01",
            "time": "19:00",
            "guests": 4,
            "occasion": "Birthday",
            "phone": "555-1234",
            "email": "a@b.com"
        })
    }

    #[test]
    fn test_valid_payload() {
        let booking = NewBooking::from_json(&sample()).unwrap();
        assert_eq!(booking.date, "2024-05-01");
        assert_eq!(booking.time, "19:00");
        assert_eq!(booking.guests, 4);
        assert_eq!(booking.occasion, "Birthday");
        assert_eq!(booking.phone, "555-1234");
        assert_eq!(booking.email, "a@b.com");
    }

    #[test]
    fn test_each_field_is_required() {
        for key in REQUIRED_FIELDS {
            let mut payload = sample();
            payload.as_object_mut().unwrap().remove(key);
            assert_eq!(
                NewBooking::from_json(&payload),
                Err(BookingPayloadError::Missing(vec![key])),
                "removing {key}"
            );
        }
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut payload = sample();
        payload["phone"] = Value::Null;
        assert_eq!(
            NewBooking::from_json(&payload),
            Err(BookingPayloadError::Missing(vec!["phone"]))
        );
    }

    #[test]
    fn test_empty_object_reports_all_fields() {
        let err = NewBooking::from_json(&json!({})).unwrap_err();
        assert_eq!(err, BookingPayloadError::Missing(REQUIRED_FIELDS.to_vec()));
        assert_eq!(
            err.to_string(),
            "missing fields: date, time, guests, occasion, phone, email"
        );
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(
            NewBooking::from_json(&json!(["2024-05-01"])),
            Err(BookingPayloadError::NotAnObject)
        );
    }

    #[test]
    fn test_wrong_types_are_invalid() {
        let mut payload = sample();
        payload["guests"] = json!("four");
        payload["email"] = json!(42);
        assert_eq!(
            NewBooking::from_json(&payload),
            Err(BookingPayloadError::Invalid(vec!["guests", "email"]))
        );
    }

    #[test]
    fn test_no_plausibility_checks() {
        let mut payload = sample();
        payload["guests"] = json!(-3);
        payload["date"] = json!("next friday");
        payload["time"] = json!("");
        let booking = NewBooking::from_json(&payload).unwrap();
        assert_eq!(booking.guests, -3);
        assert_eq!(booking.date, "next friday");
        assert_eq!(booking.time, "");
    }

    #[test]
    fn test_extra_keys_ignored() {
        let mut payload = sample();
        payload["table"] = json!(12);
        assert!(NewBooking::from_json(&payload).is_ok());
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = BookingPayloadError::Missing(vec!["date"]).into();
        assert_eq!(err.code, ErrorCode::BookingFieldsMissing);
        assert_eq!(err.message, "Missing fields");

        let err: AppError = BookingPayloadError::Invalid(vec!["guests"]).into();
        assert_eq!(err.code, ErrorCode::BookingFieldsInvalid);

        let err: AppError = BookingPayloadError::NotAnObject.into();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "Invalid request body");
    }
}
