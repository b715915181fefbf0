//! UseCase: クライアント切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute() メソッド
//! - レジストリからの削除と disconnected の通知対象
//!
//! ### どのような状況を想定しているか
//! - 正常系：3人中1人の切断で残り2人が通知対象になる
//! - エッジケース：最後のクライアントの切断（通知対象なし）
//! - 異常系：未登録 ID の切断試行

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher};

use super::error::{BroadcastError, DisconnectError};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    /// MessagePusher（接続レジストリの抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// クライアント切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ConnectionId>)` - 通知対象（残りの全クライアント）
    /// * `Err(DisconnectError)` - クライアントが登録されていない
    pub async fn execute(
        &self,
        client_id: ConnectionId,
    ) -> Result<Vec<ConnectionId>, DisconnectError> {
        self.message_pusher
            .unregister_client(client_id)
            .await
            .map_err(|_| DisconnectError::NotConnected(client_id))?;

        Ok(self.message_pusher.connected_client_ids().await)
    }

    /// クライアントが切断したことを残りのクライアントにブロードキャスト
    pub async fn broadcast_client_disconnected(
        &self,
        target_ids: Vec<ConnectionId>,
        message: &str,
    ) -> Result<(), BroadcastError> {
        self.message_pusher
            .broadcast(target_ids, message)
            .await
            .map_err(|e| BroadcastError::PushFailed(e.to_string()))
    }
}
