//! Reservation intake: `POST /api/reserve`

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;
use shared::AppError;
use shared::NewBooking;
use shared::ApiResponse;

use crate::db::bookings;
use crate::error::ServiceResult;
use crate::notify::DispatchOutcome;
use crate::state::AppState;

pub const RESERVATION_RECEIVED: &str = "Reservation received";

/// Validate, store, then notify.
///
/// The response depends only on validation and the insert. Once the row is
/// committed the request succeeds whatever the notification outcome; if the
/// insert fails no notification is attempted.
pub async fn reserve_table(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ServiceResult<Json<ApiResponse>> {
    let Json(payload) = body.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "Rejected reservation body");
        AppError::invalid_request("Invalid request body")
    })?;

    let booking = NewBooking::from_json(&payload)
        .inspect_err(|e| tracing::warn!(reason = %e, "Rejected reservation request"))?;

    let stored =
        bookings::insert_booking(&state.db.pool, &booking, shared::util::now_millis()).await?;
    tracing::info!(
        booking_id = stored.id,
        date = %stored.date,
        time = %stored.time,
        guests = stored.guests,
        created_at = %shared::util::format_millis(stored.created_at),
        "Booking stored"
    );

    let outcome = state.notifier.notify_booking(&booking).await;
    match &outcome {
        DispatchOutcome::Delivered | DispatchOutcome::Skipped => {
            tracing::info!(booking_id = stored.id, outcome = outcome.as_str(), "Booking notification");
        }
        DispatchOutcome::Failed(reason) => {
            tracing::warn!(
                booking_id = stored.id,
                outcome = outcome.as_str(),
                reason = %reason,
                "Booking notification"
            );
        }
    }

    Ok(Json(ApiResponse::success(RESERVATION_RECEIVED)))
}
