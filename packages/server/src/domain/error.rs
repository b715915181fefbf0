//! Domain errors.

use thiserror::Error;

use super::ConnectionId;

/// Errors raised while pushing frames to connected clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// No connection is registered under this id
    #[error("Client {0} is not connected")]
    ClientNotFound(ConnectionId),

    /// The connection's outbound channel is closed
    #[error("Failed to push message: {0}")]
    PushFailed(String),
}
