//! Booking database operations

use shared::{Booking, NewBooking};
use sqlx::SqlitePool;

/// Insert one booking and return the stored row.
///
/// The id comes from SQLite; `created_at` is supplied by the caller so the
/// handler owns the clock.
pub async fn insert_booking(
    pool: &SqlitePool,
    data: &NewBooking,
    created_at: i64,
) -> Result<Booking, sqlx::Error> {
    let booking = sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (date, time, guests, occasion, phone, email, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, date, time, guests, occasion, phone, email, created_at
        "#,
    )
    .bind(&data.date)
    .bind(&data.time)
    .bind(data.guests)
    .bind(&data.occasion)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(created_at)
    .fetch_one(pool)
    .await?;
    Ok(booking)
}

pub async fn find_booking(pool: &SqlitePool, id: i64) -> Result<Option<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        "SELECT id, date, time, guests, occasion, phone, email, created_at FROM bookings WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn count_bookings(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
