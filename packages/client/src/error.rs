//! Error types for the terminal client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Connecting failed or the connection was lost
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A line of input could not be turned into a command
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
