//! UseCase: シャーレのクリア処理

use std::sync::Arc;

use crate::domain::{ConnectionId, CultureRepository, MessagePusher, Mold};

use super::{broadcast::broadcast_to_all, error::BroadcastError};

/// シャーレクリアのユースケース
pub struct ClearDishUseCase {
    repository: Arc<dyn CultureRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ClearDishUseCase {
    pub fn new(
        repository: Arc<dyn CultureRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// モールドを全て取り除き、空のリストを返す
    pub async fn execute(&self) -> Vec<Mold> {
        self.repository.clear_dish().await
    }

    /// clear_dish を送信者を含む全クライアントにブロードキャスト
    pub async fn broadcast_cleared(
        &self,
        message: &str,
    ) -> Result<Vec<ConnectionId>, BroadcastError> {
        broadcast_to_all(self.message_pusher.as_ref(), message, None).await
    }
}
