//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and `tower_http`.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber.
///
/// With a `log_dir` that exists, output goes to a daily rolling file; keep
/// the returned guard alive until shutdown so buffered lines are flushed.
pub fn init_logger(log_level: &str, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "booking_server={log_level},shared={log_level},tower_http={log_level}"
        ))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && Path::new(dir).is_dir()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "booking-server");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        subscriber.with_ansi(false).with_writer(writer).init();
        return Some(guard);
    }

    subscriber.init();
    None
}
