//! WebSocket client session management.

use std::sync::Arc;

use futures_util::{Sink, SinkExt, StreamExt};
use petri_server::infrastructure::dto::websocket::ServerEvent;
use tokio::sync::{Mutex, mpsc};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use super::{
    domain::{Command, CultureView, parse_command},
    error::ClientError,
    formatter::EventFormatter,
    ui::redisplay_prompt,
};

/// Run one WebSocket session until the connection drops or input ends.
///
/// Returns `Ok(())` when the user closes input, and
/// [`ClientError::ConnectionError`] when the connection fails or is lost.
pub async fn run_client_session(
    url: &str,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to {}", url);
    println!("\nConnected to the dish. Type /help for commands. Press Ctrl+D to exit.\n");

    let (mut write, mut read) = ws_stream.split();

    // Rebuilt from the welcome snapshot on every connection
    let view = Arc::new(Mutex::new(CultureView::new()));
    let view_for_read = view.clone();

    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let formatted = match serde_json::from_str::<ServerEvent>(text.as_str()) {
                        Ok(event) => {
                            let mut view = view_for_read.lock().await;
                            view.apply(&event);
                            EventFormatter::format_event(&event, &view)
                        }
                        Err(e) => {
                            tracing::debug!("Unrecognized frame: {}", e);
                            EventFormatter::format_raw_message(text.as_str())
                        }
                    };
                    print!("{}", formatted);
                    redisplay_prompt();
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut read_task => {
            Err(ClientError::ConnectionError("Connection lost".to_string()))
        }
        result = forward_input(&mut write, input_rx, view) => {
            read_task.abort();
            result
        }
    }
}

/// Turn input lines into events and send them until input closes
async fn forward_input<S>(
    write: &mut S,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
    view: Arc<Mutex<CultureView>>,
) -> Result<(), ClientError>
where
    S: Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    while let Some(line) = input_rx.recv().await {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                redisplay_prompt();
                continue;
            }
        };

        match command {
            Command::Status => {
                print!("{}", EventFormatter::format_status(&*view.lock().await));
                redisplay_prompt();
            }
            Command::Help => {
                print!("{}", EventFormatter::format_help());
                redisplay_prompt();
            }
            command => {
                let Some(event) = view.lock().await.event_for(command) else {
                    continue;
                };
                let json = match serde_json::to_string(&event) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!("Failed to serialize {}: {}", event.event_type(), e);
                        continue;
                    }
                };
                write
                    .send(Message::Text(json.into()))
                    .await
                    .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
            }
        }
    }

    write.close().await.ok();
    Ok(())
}
