use booking_server::{Config, Server, logger};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    let _log_guard = logger::init_logger(&config.log_level, config.log_dir.as_deref());

    tracing::info!("Starting booking-server (env: {})", config.environment);

    if let Err(e) = Server::new(config).run().await {
        tracing::error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}
