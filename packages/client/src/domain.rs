//! Domain logic for client-side operations.
//!
//! Pure functions and the local [`CultureView`]; nothing here touches the
//! network or the terminal.

use std::collections::BTreeSet;

use petri_server::{
    domain::{ConnectionId, EnvironmentState, MOLD_PALETTE, Mold, MoldType},
    infrastructure::dto::websocket::{ClientEvent, MoldDto, ServerEvent},
};

use crate::error::ClientError;

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Say(String),
    Environment(EnvironmentState),
    Place { x: f64, y: f64, mold_type: MoldType },
    Clear,
    Status,
    Help,
}

/// Parse one line of input.
///
/// Lines that do not start with `/` are chat messages.
pub fn parse_command(line: &str) -> Result<Command, ClientError> {
    let line = line.trim();
    if !line.starts_with('/') {
        return Ok(Command::Say(line.to_string()));
    }

    let mut parts = line.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match name {
        "/env" => {
            let [environment, time, temperature] = args.as_slice() else {
                return Err(ClientError::InvalidCommand(
                    "usage: /env <environment> <time> <temperature>".to_string(),
                ));
            };
            Ok(Command::Environment(EnvironmentState::new(
                parse_arg(environment, "environment")?,
                parse_arg(time, "time")?,
                parse_arg(temperature, "temperature")?,
            )))
        }
        "/place" => {
            let (x, y, mold_type) = match args.as_slice() {
                [x, y] => (x, y, 0),
                [x, y, mold_type] => (x, y, parse_arg(mold_type, "type")?),
                _ => {
                    return Err(ClientError::InvalidCommand(
                        "usage: /place <x> <y> [type]".to_string(),
                    ));
                }
            };
            if mold_type >= MOLD_PALETTE.len() {
                return Err(ClientError::InvalidCommand(format!(
                    "type must be between 0 and {}",
                    MOLD_PALETTE.len() - 1
                )));
            }
            Ok(Command::Place {
                x: parse_arg(x, "x")?,
                y: parse_arg(y, "y")?,
                mold_type: MoldType::new(mold_type),
            })
        }
        "/clear" => Ok(Command::Clear),
        "/status" => Ok(Command::Status),
        "/help" => Ok(Command::Help),
        other => Err(ClientError::InvalidCommand(format!(
            "unknown command '{}', try /help",
            other
        ))),
    }
}

fn parse_arg<T: std::str::FromStr>(value: &str, name: &str) -> Result<T, ClientError> {
    value
        .parse()
        .map_err(|_| ClientError::InvalidCommand(format!("{} must be a number, got '{}'", name, value)))
}

/// What this client currently knows about the shared dish.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CultureView {
    pub own_id: Option<ConnectionId>,
    pub connected: BTreeSet<ConnectionId>,
    pub environment: EnvironmentState,
    pub molds: Vec<Mold>,
    pub message_count: usize,
}

impl CultureView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one server event into the view.
    pub fn apply(&mut self, event: &ServerEvent) {
        match event {
            ServerEvent::Welcome {
                id,
                connected,
                messages,
            } => {
                self.own_id = Some(ConnectionId::new(*id));
                self.connected = connected.iter().copied().map(ConnectionId::new).collect();
                self.message_count = messages.len();
            }
            ServerEvent::Connected { id } => {
                self.connected.insert(ConnectionId::new(*id));
            }
            ServerEvent::Disconnected { id } => {
                self.connected.remove(&ConnectionId::new(*id));
            }
            ServerEvent::ServerMessage(_) => self.message_count += 1,
            ServerEvent::EnvironmentUpdate(environment) => self.environment = (*environment).into(),
            ServerEvent::MoldPlaced { molds } => {
                self.molds = molds.iter().copied().map(Mold::from).collect();
            }
            ServerEvent::ClearDish {} => self.molds.clear(),
        }
    }

    /// The event to send for `command`, or `None` for local-only commands.
    ///
    /// Placing a mold updates the local list before the server echoes it back
    /// and sends the whole list, so a concurrent placement elsewhere may be
    /// overwritten.
    pub fn event_for(&mut self, command: Command) -> Option<ClientEvent> {
        match command {
            Command::Say(content) => Some(ClientEvent::ClientMessage { content }),
            Command::Environment(environment) => {
                Some(ClientEvent::EnvironmentUpdate(environment.into()))
            }
            Command::Place { x, y, mold_type } => {
                self.molds
                    .push(Mold::grown_in(x, y, mold_type, &self.environment));
                Some(ClientEvent::MoldPlaced {
                    molds: self.molds.iter().copied().map(MoldDto::from).collect(),
                })
            }
            Command::Clear => Some(ClientEvent::ClearDish {}),
            Command::Status | Command::Help => None,
        }
    }
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that ended the session
/// * `current_attempt` - Reconnection attempts made so far
/// * `max_attempts` - The maximum number of reconnection attempts allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    matches!(error, ClientError::ConnectionError(_)) && current_attempt < max_attempts
}
