//! Client execution logic with reconnection support.

use std::time::Duration;

use super::{domain::should_attempt_reconnect, session::run_client_session, ui::spawn_input_reader};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 5;

/// Run the terminal client, reconnecting when the connection is lost
pub async fn run_client(url: String) -> Result<(), Box<dyn std::error::Error>> {
    let mut input_rx = spawn_input_reader();
    let mut reconnect_count = 0;

    loop {
        tracing::info!("Attempting to connect to {}", url);

        match run_client_session(&url, &mut input_rx).await {
            Ok(()) => {
                tracing::info!("Client session ended normally");
                break;
            }
            Err(e) => {
                tracing::warn!("{}", e);

                if !should_attempt_reconnect(&e, reconnect_count, MAX_RECONNECT_ATTEMPTS) {
                    tracing::error!(
                        "Failed to reconnect after {} attempts. Exiting.",
                        reconnect_count
                    );
                    return Err(Box::new(e));
                }
                reconnect_count += 1;

                tracing::info!(
                    "Reconnecting in {} seconds... (attempt {}/{})",
                    RECONNECT_INTERVAL_SECS,
                    reconnect_count,
                    MAX_RECONNECT_ATTEMPTS
                );

                tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
            }
        }
    }

    Ok(())
}
