//! UseCase: カルチャー状態の取得（デバッグ用）

use std::sync::Arc;

use crate::domain::{ConnectionId, Culture, CultureRepository, MessagePusher};

/// Culture snapshot together with the registry's current members.
#[derive(Debug, Clone, PartialEq)]
pub struct CultureState {
    pub culture: Culture,
    pub connected: Vec<ConnectionId>,
}

/// カルチャー状態取得のユースケース
pub struct GetCultureStateUseCase {
    repository: Arc<dyn CultureRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl GetCultureStateUseCase {
    pub fn new(
        repository: Arc<dyn CultureRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    pub async fn execute(&self) -> CultureState {
        CultureState {
            culture: self.repository.get_snapshot().await,
            connected: self.message_pusher.connected_client_ids().await,
        }
    }
}
