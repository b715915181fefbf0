//! UseCase: クライアント接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectClientUseCase::execute() / register() メソッド
//! - ID の採番、welcome スナップショットの構築、レジストリへの登録
//! - welcome フレームが後続のブロードキャストより先に届くこと
//! - connected イベントのブロードキャスト対象（新規クライアント以外）
//!
//! ### どのような状況を想定しているか
//! - 正常系：最初の接続、複数の接続
//! - エッジケース：切断済みのクライアントは welcome の接続一覧に含まれない
//! - 異常系：受信側が閉じたチャンネルへの welcome 送信

use std::sync::Arc;

use crate::domain::{
    ConnectionId, ConnectionIdFactory, Culture, CultureRepository, MessagePushError,
    MessagePusher, PusherChannel,
};

use super::{broadcast::broadcast_to_all, error::BroadcastError};

/// What a newly registered connection is told first.
#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeSnapshot {
    /// The id assigned to the new connection
    pub id: ConnectionId,
    /// Every other registered id, ascending
    pub connected: Vec<ConnectionId>,
    /// The culture as of registration
    pub culture: Culture,
}

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// Repository（共有状態ストアの抽象化）
    repository: Arc<dyn CultureRepository>,
    /// MessagePusher（接続レジストリの抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 接続 ID の採番
    id_factory: ConnectionIdFactory,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(
        repository: Arc<dyn CultureRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            id_factory: ConnectionIdFactory::new(),
        }
    }

    /// クライアント接続を実行
    ///
    /// Allocates the id and snapshots what the new connection must be told.
    /// Nothing is registered yet, so `connected` is every currently
    /// registered id. The caller broadcasts `connected`, then calls
    /// [`Self::register`], without applying any event in between.
    pub async fn execute(&self) -> WelcomeSnapshot {
        let id = self.id_factory.generate();

        let culture = self.repository.get_snapshot().await;
        let connected = self.message_pusher.connected_client_ids().await;

        WelcomeSnapshot {
            id,
            connected,
            culture,
        }
    }

    /// Register the connection with `frames` queued as its first frames.
    ///
    /// # Arguments
    ///
    /// * `sender` - クライアントへのメッセージ送信用チャンネル
    /// * `frames` - serialized welcome snapshot, in delivery order
    pub async fn register(
        &self,
        client_id: ConnectionId,
        sender: PusherChannel,
        frames: &[String],
    ) -> Result<(), MessagePushError> {
        self.message_pusher.register_client(client_id, sender).await;

        for frame in frames {
            self.message_pusher.push_to(client_id, frame).await?;
        }

        Ok(())
    }

    /// クライアントが接続したことを他の全クライアントにブロードキャスト
    ///
    /// # Returns
    ///
    /// 通知したクライアント ID のリスト
    pub async fn broadcast_client_connected(
        &self,
        new_client_id: ConnectionId,
        message: &str,
    ) -> Result<Vec<ConnectionId>, BroadcastError> {
        broadcast_to_all(self.message_pusher.as_ref(), message, Some(new_client_id)).await
    }
}
