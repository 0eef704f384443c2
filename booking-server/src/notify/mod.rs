//! Booking notifications via the Telegram Bot API (no SDK dependency)
//!
//! Delivery is best-effort and at-most-once: a single `sendMessage` call,
//! no retry. The result is reported as a [`DispatchOutcome`] which callers
//! log; it never reaches the HTTP client that made the booking.

use std::fmt;

use serde::Serialize;
use shared::NewBooking;
use thiserror::Error;

use crate::config::TelegramConfig;

/// Result of one notification attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The API accepted the message
    Delivered,
    /// Token or chat id not configured; nothing was sent
    Skipped,
    /// The call was made and failed
    Failed(String),
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Skipped => "skipped",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(reason) => write!(f, "failed: {reason}"),
            other => f.write_str(other.as_str()),
        }
    }
}

#[derive(Debug, Error)]
enum SendError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API responded {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl From<reqwest::Error> for SendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SendError::Timeout
        } else {
            // Without the URL: it embeds the bot token
            SendError::Transport(e.without_url())
        }
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Telegram notifier, cheap to clone
#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    config: TelegramConfig,
}

impl Notifier {
    /// Build a notifier with its own HTTP client
    pub fn new(config: TelegramConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Whether credentials are configured
    pub fn is_enabled(&self) -> bool {
        self.config.credentials().is_some()
    }

    /// Send the booking to the configured chat.
    ///
    /// Never returns an error: every failure is folded into the outcome.
    pub async fn notify_booking(&self, booking: &NewBooking) -> DispatchOutcome {
        let Some((token, chat_id)) = self.config.credentials() else {
            return DispatchOutcome::Skipped;
        };

        let text = format_message(booking);
        match self.send_message(token, chat_id, &text).await {
            Ok(()) => DispatchOutcome::Delivered,
            Err(e) => DispatchOutcome::Failed(e.to_string()),
        }
    }

    async fn send_message(&self, token: &str, chat_id: &str, text: &str) -> Result<(), SendError> {
        let url = format!("{}/bot{}/sendMessage", self.config.api_base, token);
        let resp = self
            .client
            .post(url)
            .json(&SendMessage { chat_id, text })
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(SendError::Rejected { status, body })
    }
}

/// Human-readable notification text, one field per line
pub fn format_message(booking: &NewBooking) -> String {
    format!(
        "New reservation request!\n\
         Date: {}\n\
         Time: {}\n\
         Guests: {}\n\
         Occasion: {}\n\
         Phone: {}\n\
         Email: {}",
        booking.date, booking.time, booking.guests, booking.occasion, booking.phone, booking.email
    )
}
