//! WebSocket event DTOs.
//!
//! Every frame is a JSON text message `{ "type": <string>, ...fields }`.
//! Inbound frames decode into [`ClientEvent`] once, at the boundary;
//! outbound frames are built from [`ServerEvent`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment sliders as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentDto {
    pub environment: i64,
    pub time: i64,
    pub temperature: i64,
}

/// A mold as it appears on the wire.
///
/// Only these four fields are relayed; anything else a client attaches is
/// dropped. `type` must be a non-negative integer, but is not checked
/// against the palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoldDto {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    #[serde(rename = "type")]
    pub mold_type: usize,
}

/// A logged message as it appears in `welcome.messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub content: String,
    pub time: i64,
    pub sender: u64,
}

/// Events sent by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    ClientMessage { content: String },
    EnvironmentUpdate(EnvironmentDto),
    MoldPlaced { molds: Vec<MoldDto> },
    ClearDish {},
}

/// Events sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    Welcome {
        id: u64,
        connected: Vec<u64>,
        messages: Vec<MessageDto>,
    },
    Connected {
        id: u64,
    },
    Disconnected {
        id: u64,
    },
    ServerMessage(MessageDto),
    EnvironmentUpdate(EnvironmentDto),
    MoldPlaced {
        molds: Vec<MoldDto>,
    },
    ClearDish {},
}

/// Why an inbound frame was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventDecodeError {
    /// Not JSON, not an object, no string `type`, or bad fields for a known type
    #[error("Malformed event: {0}")]
    Malformed(String),

    /// Well-formed envelope whose `type` is not a client event
    #[error("Unknown event type '{0}'")]
    UnknownEventType(String),
}

impl ClientEvent {
    /// `type` tags a client may send.
    pub const TYPES: [&'static str; 4] = [
        "client_message",
        "environment_update",
        "mold_placed",
        "clear_dish",
    ];

    /// Decode one inbound text frame.
    pub fn decode(text: &str) -> Result<Self, EventDecodeError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| EventDecodeError::Malformed(e.to_string()))?;

        let event_type = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| EventDecodeError::Malformed("missing `type` field".to_string()))?;
        if !Self::TYPES.contains(&event_type) {
            return Err(EventDecodeError::UnknownEventType(event_type.to_string()));
        }

        serde_json::from_value(value).map_err(|e| EventDecodeError::Malformed(e.to_string()))
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ClientMessage { .. } => "client_message",
            Self::EnvironmentUpdate(_) => "environment_update",
            Self::MoldPlaced { .. } => "mold_placed",
            Self::ClearDish {} => "clear_dish",
        }
    }
}

impl ServerEvent {
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
