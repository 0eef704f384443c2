//! Application state

use http::HeaderValue;

use crate::config::Config;
use crate::db::DbService;
use crate::notify::Notifier;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, injected into handlers through axum `State`
#[derive(Clone)]
pub struct AppState {
    /// Booking store
    pub db: DbService,
    /// Telegram notifier
    pub notifier: Notifier,
    /// Only origin allowed to call `/api/*`
    pub allowed_origin: HeaderValue,
}

impl AppState {
    /// Open the store and build the notifier
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let db = DbService::connect(&config.database_url).await?;
        let notifier = Notifier::new(config.telegram.clone())?;

        if notifier.is_enabled() {
            tracing::info!(api_base = %config.telegram.api_base, "Telegram notifications enabled");
        } else {
            tracing::warn!(
                "TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID not set, booking notifications are disabled"
            );
        }

        Ok(Self::from_parts(db, notifier, config.allowed_origin.clone()))
    }

    /// Assemble state from already-built parts
    pub fn from_parts(db: DbService, notifier: Notifier, allowed_origin: HeaderValue) -> Self {
        Self {
            db,
            notifier,
            allowed_origin,
        }
    }
}
