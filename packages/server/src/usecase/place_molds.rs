//! UseCase: モールド配置処理
//!
//! Clients send their whole optimistic mold list, not a single mold. The
//! list replaces the server's list outright, so two clients placing at the
//! same time race and the later event wins.

use std::sync::Arc;

use crate::domain::{ConnectionId, CultureRepository, MessagePusher, Mold};

use super::{broadcast::broadcast_to_all, error::BroadcastError};

/// モールド配置のユースケース
pub struct PlaceMoldsUseCase {
    repository: Arc<dyn CultureRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl PlaceMoldsUseCase {
    pub fn new(
        repository: Arc<dyn CultureRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// モールドリスト全体を置き換え、新しいリストを返す
    pub async fn execute(&self, molds: Vec<Mold>) -> Vec<Mold> {
        self.repository.apply_mold_placement(molds).await
    }

    /// 新しいモールドリストを送信者を含む全クライアントにブロードキャスト
    pub async fn broadcast_molds(
        &self,
        message: &str,
    ) -> Result<Vec<ConnectionId>, BroadcastError> {
        broadcast_to_all(self.message_pusher.as_ref(), message, None).await
    }
}
