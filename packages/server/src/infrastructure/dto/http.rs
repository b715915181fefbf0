//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::{EnvironmentDto, MessageDto, MoldDto};

/// Full culture state for the debug endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CultureStateDto {
    /// When the dish was created (RFC 3339)
    pub created_at: String,
    /// Currently connected ids, ascending
    pub connected: Vec<u64>,
    pub environment: EnvironmentDto,
    pub molds: Vec<MoldDto>,
    pub messages: Vec<MessageDto>,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}
