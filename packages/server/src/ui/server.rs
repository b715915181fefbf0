//! Server execution logic.

use std::{future::Future, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::{
    handler::{debug_culture_state, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Relay server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app_state);
/// server.run("0.0.0.0".to_string(), 3000).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(app_state: AppState) -> Self {
        Self {
            state: Arc::new(app_state),
        }
    }

    /// Build the router
    ///
    /// - `GET /`: WebSocket relay endpoint
    /// - `GET /api/health`: health check
    /// - `GET /debug/culture`: current culture snapshot
    pub fn router(&self) -> Router {
        Router::new()
            // WebSocket エンドポイント
            .route("/", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/debug/culture", get(debug_culture_state))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the relay server until Ctrl+C / SIGTERM
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 3000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Petri relay listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }
}
