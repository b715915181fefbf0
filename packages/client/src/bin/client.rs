//! Terminal client for the Petri relay.
//!
//! Connects to a relay, prints every event it receives and turns input lines
//! into events. Plain text is sent as a message; `/help` lists the commands.
//! Automatically reconnects on disconnection (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin petri-client
//! cargo run --bin petri-client -- --url ws://192.168.0.10:3000/
//! ```

use clap::Parser;

use petri_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "petri-client")]
#[command(about = "Terminal client for the Petri mold culture relay", long_about = None)]
struct Args {
    /// WebSocket relay URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:3000/")]
    url: String,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = petri_client::run_client(args.url).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
