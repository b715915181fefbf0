//! Petri relay server.
//!
//! Holds the shared mold culture in memory and relays every change to all
//! connected clients over WebSocket.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin petri-server
//! cargo run --bin petri-server -- --host 127.0.0.1 --port 8080
//! ```

use std::sync::Arc;

use clap::Parser;
use petri_server::{
    domain::{Culture, Timestamp},
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryCultureRepository,
    },
    ui::{Server, state::AppState},
    usecase::{
        ClearDishUseCase, ConnectClientUseCase, DisconnectClientUseCase, GetCultureStateUseCase,
        PlaceMoldsUseCase, SendMessageUseCase, UpdateEnvironmentUseCase,
    },
};
use petri_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "petri-server")]
#[command(about = "Relay server for the multiplayer mold culture simulator", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. UseCases
    // 4. AppState
    // 5. Server

    // 1. Create Repository (in-memory culture)
    let clock = Arc::new(SystemClock);
    let culture = Arc::new(Mutex::new(Culture::new(Timestamp::new(clock.now_millis()))));
    let repository = Arc::new(InMemoryCultureRepository::new(culture));
    tracing::info!("Fresh petri dish prepared");

    // 2. Create MessagePusher (connection registry)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let disconnect_client_usecase =
        Arc::new(DisconnectClientUseCase::new(message_pusher.clone()));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        clock,
    ));
    let update_environment_usecase = Arc::new(UpdateEnvironmentUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let place_molds_usecase = Arc::new(PlaceMoldsUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let clear_dish_usecase = Arc::new(ClearDishUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let get_culture_state_usecase =
        Arc::new(GetCultureStateUseCase::new(repository, message_pusher));

    // 4. Create AppState
    let app_state = AppState {
        relay_lock: Mutex::new(()),
        connect_client_usecase,
        disconnect_client_usecase,
        send_message_usecase,
        update_environment_usecase,
        place_molds_usecase,
        clear_dish_usecase,
        get_culture_state_usecase,
    };

    // 5. Create and run the server
    let server = Server::new(app_state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
