//! Service-layer error type
//!
//! `ServiceError` bridges DB-layer errors (`sqlx::Error`) and the API-layer
//! error (`AppError`), so handlers can use `?` without hand-written
//! `map_err` + logging at every call site.

use axum::response::IntoResponse;
use shared::AppError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service-layer error, two variants:
///
/// - `Db`: Database/infrastructure errors (auto-logged, mapped to DatabaseError)
/// - `App`: Business-rule errors (transparent pass-through to client)
#[derive(Debug)]
pub enum ServiceError {
    /// Database or infrastructure error
    Db(BoxError),
    /// Business-rule error (already an AppError with the correct ErrorCode)
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<shared::models::BookingPayloadError> for ServiceError {
    fn from(e: shared::models::BookingPayloadError) -> Self {
        ServiceError::App(e.into())
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::database(db_err.to_string())
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use shared::ErrorCode;
    use shared::models::BookingPayloadError;

    #[test]
    fn test_db_error_maps_to_500() {
        let err: AppError = ServiceError::from(sqlx::Error::PoolClosed).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Internal Server Error");
    }

    #[test]
    fn test_app_error_passes_through() {
        let err: AppError = ServiceError::from(BookingPayloadError::Missing(vec!["email"])).into();
        assert_eq!(err.code, ErrorCode::BookingFieldsMissing);
        assert_eq!(err.client_message(), "Missing fields");
    }

    #[test]
    fn test_into_response_status() {
        let response = ServiceError::from(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
