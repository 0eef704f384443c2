//! Server Implementation
//!
//! HTTP server startup and shutdown

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::api;
use crate::config::Config;
use crate::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP Server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Open the store, serve until Ctrl-C / SIGTERM, then close the store
    pub async fn run(&self) -> Result<(), BoxError> {
        let state = AppState::new(&self.config).await?;

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(
            allowed_origin = ?self.config.allowed_origin,
            "Booking server listening on {addr}"
        );

        let result = serve(listener, state.clone(), shutdown_signal()).await;
        state.db.close().await;
        result
    }
}

/// Serve the application on an already-bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), BoxError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = api::create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutting down...");
}
