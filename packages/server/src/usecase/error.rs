//! UseCase errors.

use thiserror::Error;

use crate::domain::ConnectionId;

/// Disconnect failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisconnectError {
    #[error("Client {0} is not connected")]
    NotConnected(ConnectionId),
}

/// Broadcast failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BroadcastError {
    #[error("Broadcast failed: {0}")]
    PushFailed(String),
}
