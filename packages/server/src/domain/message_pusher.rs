//! MessagePusher trait 定義
//!
//! 接続レジストリとブロードキャストの抽象化。
//! 接続中のクライアントをその ID と送信チャンネルで管理し、
//! 1対1 送信とファンアウト送信を提供します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError};

/// Outbound channel of one connection. Each item is one serialized text frame.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Connection registry and broadcaster.
///
/// Delivery is best-effort: a failed send to one client never prevents
/// delivery to the others, and nothing is retried or queued for clients
/// that are gone.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントを登録
    async fn register_client(&self, client_id: ConnectionId, sender: PusherChannel);

    /// クライアントの登録を解除
    async fn unregister_client(&self, client_id: ConnectionId) -> Result<(), MessagePushError>;

    /// 接続中のクライアント ID を昇順で取得
    async fn connected_client_ids(&self) -> Vec<ConnectionId>;

    /// 特定のクライアントに送信
    async fn push_to(&self, client_id: ConnectionId, content: &str) -> Result<(), MessagePushError>;

    /// 複数のクライアントに送信（一部の送信失敗は許容）
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
