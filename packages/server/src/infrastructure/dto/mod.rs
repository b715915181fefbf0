//! Data Transfer Objects (DTOs) for the relay.
//!
//! DTOs are organized by protocol:
//! - `websocket`: inbound and outbound WebSocket events
//! - `http`: HTTP API response DTOs

pub mod conversion;
pub mod http;
pub mod websocket;
