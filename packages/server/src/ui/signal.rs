//! Graceful shutdown signal handling.

use std::future::Future;

/// Resolves on Ctrl+C, or on SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = wait_for_signal(tokio::signal::ctrl_c(), "Ctrl+C");

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received, closing connections");
}

/// Wait for `signal`. A handler that failed to install never resolves.
async fn wait_for_signal<F>(signal: F, name: &str)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!("Failed to install {} handler: {}", name, e);
        std::future::pending::<()>().await;
    }
}
