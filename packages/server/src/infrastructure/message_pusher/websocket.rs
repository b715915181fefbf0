//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続 ID と `UnboundedSender` の対応（接続レジストリ）を管理
//! - クライアントへのメッセージ送信（push_to, broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket 自体は UI 層（`ui/handler/websocket.rs`）が所有し、
//! 送信チャンネルの受信側を書き込みタスクで WebSocket へ流します。
//! ここでの送信はチャンネルへの push のみなのでブロックしません。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel};

/// WebSocket を使った MessagePusher 実装
#[derive(Default)]
pub struct WebSocketMessagePusher {
    /// 接続中のクライアントの送信チャンネル（ID の昇順）
    clients: Mutex<BTreeMap<ConnectionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, client_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(client_id, sender);
        tracing::debug!("Client {} registered to MessagePusher", client_id);
    }

    async fn unregister_client(&self, client_id: ConnectionId) -> Result<(), MessagePushError> {
        let mut clients = self.clients.lock().await;
        match clients.remove(&client_id) {
            Some(_) => {
                tracing::debug!("Client {} unregistered from MessagePusher", client_id);
                Ok(())
            }
            None => Err(MessagePushError::ClientNotFound(client_id)),
        }
    }

    async fn connected_client_ids(&self) -> Vec<ConnectionId> {
        let clients = self.clients.lock().await;
        clients.keys().copied().collect()
    }

    async fn push_to(&self, client_id: ConnectionId, content: &str) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        let sender = clients
            .get(&client_id)
            .ok_or(MessagePushError::ClientNotFound(client_id))?;
        sender
            .send(content.to_string())
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed message to client {}", client_id);
        Ok(())
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        for target in targets {
            match clients.get(&target) {
                // ブロードキャストでは一部の送信失敗を許容
                Some(sender) => {
                    if let Err(e) = sender.send(content.to_string()) {
                        tracing::warn!("Failed to push message to client {}: {}", target, e);
                    }
                }
                None => {
                    tracing::warn!("Client {} not found during broadcast, skipping", target);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - 接続レジストリとしての登録・登録解除・ID 一覧
    // - push_to: 特定のクライアントへの送信
    // - broadcast: 複数クライアントへの送信と部分失敗の隔離
    //
    // 【どのようなシナリオをテストするか】
    // 1. push_to の成功 / 存在しないクライアント
    // 2. broadcast の成功（全員に同一ペイロード）
    // 3. broadcast 中に受信側が閉じていても他のクライアントには届く
    // 4. 登録解除の成功 / 未登録 ID
    // ========================================

    #[tokio::test]
    async fn test_connected_client_ids_are_sorted() {
        // テスト項目: 接続中の ID は登録順に関係なく昇順で返される
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        for id in [2, 0, 1] {
            let (tx, _rx) = mpsc::unbounded_channel();
            pusher.register_client(ConnectionId::new(id), tx).await;
        }

        // when (操作):
        let ids = pusher.connected_client_ids().await;

        // then (期待する結果):
        assert_eq!(
            ids,
            vec![ConnectionId::new(0), ConnectionId::new(1), ConnectionId::new(2)]
        );
    }

    #[tokio::test]
    async fn test_push_to_success() {
        // テスト項目: 特定のクライアントにメッセージを送信できる
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        pusher.register_client(ConnectionId::new(0), tx).await;

        // when (操作):
        let result = pusher.push_to(ConnectionId::new(0), "Hello").await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(rx.recv().await, Some("Hello".to_string()));
    }

    #[tokio::test]
    async fn test_push_to_client_not_found() {
        // テスト項目: 存在しないクライアントへの送信はエラーを返す
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();

        // when (操作):
        let result = pusher.push_to(ConnectionId::new(9), "Hello").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(MessagePushError::ClientNotFound(ConnectionId::new(9)))
        );
    }

    #[tokio::test]
    async fn test_push_to_closed_channel() {
        // テスト項目: 受信側が閉じたチャンネルへの送信は PushFailed を返す
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx, rx) = mpsc::unbounded_channel();
        pusher.register_client(ConnectionId::new(0), tx).await;
        drop(rx);

        // when (操作):
        let result = pusher.push_to(ConnectionId::new(0), "Hello").await;

        // then (期待する結果):
        assert!(matches!(result, Err(MessagePushError::PushFailed(_))));
    }

    #[tokio::test]
    async fn test_broadcast_success() {
        // テスト項目: 複数のクライアントに同一メッセージをブロードキャストできる
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        pusher.register_client(ConnectionId::new(0), tx1).await;
        pusher.register_client(ConnectionId::new(1), tx2).await;

        // when (操作):
        let targets = pusher.connected_client_ids().await;
        let result = pusher.broadcast(targets, "Broadcast message").await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(rx1.recv().await, Some("Broadcast message".to_string()));
        assert_eq!(rx2.recv().await, Some("Broadcast message".to_string()));
    }

    #[tokio::test]
    async fn test_broadcast_isolates_closed_recipient() {
        // テスト項目: 途中のクライアントが切断済みでも他のクライアントには届く
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx0, mut rx0) = mpsc::unbounded_channel();
        let (tx1, rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        pusher.register_client(ConnectionId::new(0), tx0).await;
        pusher.register_client(ConnectionId::new(1), tx1).await;
        pusher.register_client(ConnectionId::new(2), tx2).await;
        drop(rx1);

        // when (操作): 既に登録解除された ID もターゲットに含める
        let targets = vec![
            ConnectionId::new(0),
            ConnectionId::new(1),
            ConnectionId::new(2),
            ConnectionId::new(3),
        ];
        let result = pusher.broadcast(targets, "payload").await;

        // then (期待する結果): ブロードキャストは部分失敗を許容
        assert!(result.is_ok());
        assert_eq!(rx0.recv().await, Some("payload".to_string()));
        assert_eq!(rx2.recv().await, Some("payload".to_string()));
    }

    #[tokio::test]
    async fn test_broadcast_empty_targets() {
        // テスト項目: 空のターゲットリストでもエラーにならない
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();

        // when (操作):
        let result = pusher.broadcast(vec![], "Message").await;

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unregister_client() {
        // テスト項目: 登録解除後は ID 一覧から消え、未登録 ID の解除はエラー
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        pusher.register_client(ConnectionId::new(0), tx).await;

        // when (操作):
        let first = pusher.unregister_client(ConnectionId::new(0)).await;
        let second = pusher.unregister_client(ConnectionId::new(0)).await;

        // then (期待する結果):
        assert!(first.is_ok());
        assert_eq!(
            second,
            Err(MessagePushError::ClientNotFound(ConnectionId::new(0)))
        );
        assert!(pusher.connected_client_ids().await.is_empty());
    }
}
