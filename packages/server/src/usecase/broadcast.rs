//! Fan-out shared by the use cases.

use crate::domain::{ConnectionId, MessagePusher};

use super::error::BroadcastError;

/// Send `content` to every connected client except `exclude`.
///
/// The recipient list is snapshotted before sending, so a client that
/// disconnects mid-broadcast is skipped rather than invalidating the loop.
/// Returns the recipients.
pub(crate) async fn broadcast_to_all(
    message_pusher: &dyn MessagePusher,
    content: &str,
    exclude: Option<ConnectionId>,
) -> Result<Vec<ConnectionId>, BroadcastError> {
    let targets: Vec<ConnectionId> = message_pusher
        .connected_client_ids()
        .await
        .into_iter()
        .filter(|id| Some(*id) != exclude)
        .collect();

    message_pusher
        .broadcast(targets.clone(), content)
        .await
        .map_err(|e| BroadcastError::PushFailed(e.to_string()))?;

    Ok(targets)
}
