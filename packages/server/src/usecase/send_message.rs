//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() と broadcast_message()
//! - メッセージログへの追記、送信者を含む全員へのブロードキャスト
//!
//! ### どのような状況を想定しているか
//! - 正常系：送信者 ID と時刻が付与され、ログに追記される
//! - エッジケース：時計が巻き戻っても時刻は減少しない
//! - エッジケース：送信者のみが接続している場合も送信者自身には届く

use std::sync::Arc;

use petri_shared::time::Clock;

use crate::domain::{ChatMessage, ConnectionId, CultureRepository, MessagePusher, Timestamp};

use super::{broadcast::broadcast_to_all, error::BroadcastError};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（共有状態ストアの抽象化）
    repository: Arc<dyn CultureRepository>,
    /// MessagePusher（接続レジストリの抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 時刻の取得元
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(
        repository: Arc<dyn CultureRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// メッセージをログに追記
    ///
    /// # Arguments
    ///
    /// * `sender` - 送信者の接続 ID
    /// * `content` - メッセージ内容（検証しない）
    ///
    /// # Returns
    ///
    /// ログに記録されたメッセージ（時刻付き）
    pub async fn execute(&self, sender: ConnectionId, content: String) -> ChatMessage {
        let now = Timestamp::new(self.clock.now_millis());
        self.repository.append_message(sender, content, now).await
    }

    /// メッセージを送信者を含む全クライアントにブロードキャスト
    pub async fn broadcast_message(
        &self,
        message: &str,
    ) -> Result<Vec<ConnectionId>, BroadcastError> {
        broadcast_to_all(self.message_pusher.as_ref(), message, None).await
    }
}
