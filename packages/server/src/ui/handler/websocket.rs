//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, Mold, PusherChannel},
    infrastructure::dto::websocket::{ClientEvent, EventDecodeError, ServerEvent},
    ui::state::AppState,
    usecase::{BroadcastError, WelcomeSnapshot},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Serialize an outbound event, logging and skipping it on failure.
fn encode(event: &ServerEvent) -> Option<String> {
    match event.encode() {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!("Failed to serialize {:?}: {}", event, e);
            None
        }
    }
}

fn log_broadcast(event_type: &str, result: Result<Vec<ConnectionId>, BroadcastError>) {
    match result {
        Ok(targets) => {
            tracing::debug!("Broadcasted {} to {} client(s)", event_type, targets.len())
        }
        Err(e) => tracing::warn!("Failed to broadcast {}: {}", event_type, e),
    }
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

/// The three frames a new connection receives before anything else.
fn welcome_frames(welcome: &WelcomeSnapshot) -> Vec<String> {
    let culture = &welcome.culture;
    [
        ServerEvent::welcome(welcome.id, &welcome.connected, &culture.messages),
        ServerEvent::environment_update(culture.environment),
        ServerEvent::mold_placed(&culture.molds),
    ]
    .iter()
    .filter_map(encode)
    .collect()
}

/// Announce a new connection, then register it with its snapshot queued.
///
/// Runs under the relay lock: the existing clients hear `connected` before
/// the newcomer is a broadcast target, and no event is applied between the
/// snapshot and the registration.
async fn join(state: &AppState, sender: PusherChannel) -> ConnectionId {
    let _relay = state.relay_lock.lock().await;

    let welcome = state.connect_client_usecase.execute().await;
    let client_id = welcome.id;

    if let Some(json) = encode(&ServerEvent::connected(client_id)) {
        log_broadcast(
            "connected",
            state
                .connect_client_usecase
                .broadcast_client_connected(client_id, &json)
                .await,
        );
    }

    let frames = welcome_frames(&welcome);
    match state
        .connect_client_usecase
        .register(client_id, sender, &frames)
        .await
    {
        Ok(()) => tracing::debug!(
            "Queued welcome for client {} ({} other client(s), {} mold(s), {} message(s))",
            client_id,
            welcome.connected.len(),
            welcome.culture.molds.len(),
            welcome.culture.messages.len()
        ),
        Err(e) => tracing::error!("Failed to queue welcome for client {}: {}", client_id, e),
    }

    client_id
}

/// Unregister a connection and tell the remaining clients, under the relay lock.
async fn leave(state: &AppState, client_id: ConnectionId) {
    let _relay = state.relay_lock.lock().await;

    match state.disconnect_client_usecase.execute(client_id).await {
        Ok(notify_targets) => {
            tracing::info!("Client {} disconnected", client_id);

            if let Some(json) = encode(&ServerEvent::disconnected(client_id)) {
                match state
                    .disconnect_client_usecase
                    .broadcast_client_disconnected(notify_targets, &json)
                    .await
                {
                    Ok(()) => tracing::debug!("Broadcasted disconnected for client {}", client_id),
                    Err(e) => tracing::warn!("Failed to broadcast disconnected: {}", e),
                }
            }
        }
        Err(e) => {
            tracing::warn!("Failed to disconnect client {}: {}", client_id, e);
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    let (tx, rx) = mpsc::unbounded_channel();
    let client_id = join(&state, tx).await;
    tracing::info!("Client {} connected", client_id);

    let state_clone = state.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error from client {}: {}", client_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => match ClientEvent::decode(text.as_str()) {
                    Ok(event) => handle_client_event(&state_clone, client_id, event).await,
                    Err(EventDecodeError::Malformed(reason)) => {
                        tracing::warn!(
                            "Dropping malformed event from client {}: {}",
                            client_id,
                            reason
                        );
                    }
                    Err(EventDecodeError::UnknownEventType(event_type)) => {
                        tracing::warn!(
                            "Dropping event of unknown type '{}' from client {}",
                            event_type,
                            client_id
                        );
                    }
                },
                Message::Binary(data) => {
                    tracing::debug!(
                        "Ignoring {} bytes of binary data from client {}",
                        data.len(),
                        client_id
                    );
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Client {} requested close", client_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // The welcome frames are already queued, so they go out first
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    leave(&state, client_id).await;
}

/// Apply one decoded event and fan the canonical result out to everyone,
/// sender included.
///
/// The relay lock is held across both steps, so clients see events in the
/// order they were applied.
async fn handle_client_event(state: &AppState, client_id: ConnectionId, event: ClientEvent) {
    let _relay = state.relay_lock.lock().await;
    tracing::debug!("Received {} from client {}", event.event_type(), client_id);

    match event {
        ClientEvent::ClientMessage { content } => {
            let message = state.send_message_usecase.execute(client_id, content).await;
            tracing::info!("Message from client {}: {}", client_id, message.content);

            if let Some(json) = encode(&ServerEvent::server_message(message)) {
                log_broadcast(
                    "server_message",
                    state.send_message_usecase.broadcast_message(&json).await,
                );
            }
        }
        ClientEvent::EnvironmentUpdate(values) => {
            let environment = state
                .update_environment_usecase
                .execute(values.into())
                .await;
            tracing::info!(
                "Environment updated by client {}: environment={} time={} temperature={}",
                client_id,
                environment.environment,
                environment.time,
                environment.temperature
            );

            if let Some(json) = encode(&ServerEvent::environment_update(environment)) {
                log_broadcast(
                    "environment_update",
                    state
                        .update_environment_usecase
                        .broadcast_environment(&json)
                        .await,
                );
            }
        }
        ClientEvent::MoldPlaced { molds } => {
            let molds = state
                .place_molds_usecase
                .execute(molds.into_iter().map(Mold::from).collect())
                .await;
            tracing::info!(
                "Mold placed by client {}. Total molds: {}",
                client_id,
                molds.len()
            );

            if let Some(json) = encode(&ServerEvent::mold_placed(&molds)) {
                log_broadcast(
                    "mold_placed",
                    state.place_molds_usecase.broadcast_molds(&json).await,
                );
            }
        }
        ClientEvent::ClearDish {} => {
            state.clear_dish_usecase.execute().await;
            tracing::info!("Dish cleared by client {}", client_id);

            if let Some(json) = encode(&ServerEvent::clear_dish()) {
                log_broadcast(
                    "clear_dish",
                    state.clear_dish_usecase.broadcast_cleared(&json).await,
                );
            }
        }
    }
}
