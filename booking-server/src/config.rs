//! Booking server configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | ENVIRONMENT | development | development / staging / production |
//! | HTTP_PORT | 5000 | HTTP listen port |
//! | DATABASE_URL | sqlite:bookings.db | SQLite database location |
//! | ALLOWED_ORIGIN | http://localhost:3000 | Only origin allowed to call `/api/*` |
//! | TELEGRAM_BOT_TOKEN | (unset) | Bot credential; unset disables notifications |
//! | TELEGRAM_CHAT_ID | (unset) | Target chat; unset disables notifications |
//! | TELEGRAM_API_BASE | https://api.telegram.org | Bot API base URL |
//! | TELEGRAM_TIMEOUT_SECS | 10 | Outbound request timeout |
//! | LOG_LEVEL | info | Default log level when RUST_LOG is unset |
//! | LOG_DIR | (unset) | Directory for daily rolling log files |

use std::time::Duration;

use http::HeaderValue;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment: development | staging | production
    pub environment: String,
    /// HTTP port
    pub http_port: u16,
    /// SQLite connection URL
    pub database_url: String,
    /// The single origin allowed by the CORS policy on `/api/*`
    pub allowed_origin: HeaderValue,
    /// Notification settings
    pub telegram: TelegramConfig,
    /// Default log level (overridden by RUST_LOG)
    pub log_level: String,
    /// Optional directory for file logs
    pub log_dir: Option<String>,
}

/// Telegram Bot API settings
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base: String,
    pub timeout: Duration,
}

impl TelegramConfig {
    /// Credentials, if both are configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.bot_token.as_deref(), self.chat_id.as_deref()) {
            (Some(token), Some(chat_id)) => Some((token, chat_id)),
            _ => None,
        }
    }
}

// The bot token is a secret: keep it out of Debug output.
impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "***"))
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values behave like unset ones
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let http_port: u16 = match var("HTTP_PORT") {
            Some(p) => p
                .parse()
                .map_err(|_| format!("HTTP_PORT is not a valid port: {p}"))?,
            None => 5000,
        };

        let origin = var("ALLOWED_ORIGIN").unwrap_or_else(|| "http://localhost:3000".into());
        let allowed_origin = HeaderValue::from_str(&origin)
            .map_err(|_| format!("ALLOWED_ORIGIN is not a valid header value: {origin}"))?;

        let timeout_secs: u64 = match var("TELEGRAM_TIMEOUT_SECS") {
            Some(s) => s
                .parse()
                .map_err(|_| format!("TELEGRAM_TIMEOUT_SECS is not a number: {s}"))?,
            None => 10,
        };

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            http_port,
            database_url: var("DATABASE_URL").unwrap_or_else(|| "sqlite:bookings.db".into()),
            allowed_origin,
            telegram: TelegramConfig {
                bot_token: var("TELEGRAM_BOT_TOKEN"),
                chat_id: var("TELEGRAM_CHAT_ID"),
                api_base: var("TELEGRAM_API_BASE")
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.into()),
                timeout: Duration::from_secs(timeout_secs),
            },
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
        })
    }
}
