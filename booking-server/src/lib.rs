//! booking-server: reservation intake service
//!
//! - Accepts reservation requests on `POST /api/reserve`
//! - Stores each booking as one row in SQLite
//! - Sends a best-effort Telegram notification per stored booking

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod notify;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::AppState;
