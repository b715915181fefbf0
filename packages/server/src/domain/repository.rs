//! Repository trait 定義
//!
//! ドメイン層が必要とする共有状態ストアのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ChatMessage, ConnectionId, Culture, EnvironmentState, Mold, Timestamp};

/// Culture Repository trait
///
/// Every mutation unconditionally replaces its slice and returns the new
/// canonical value, ready to be broadcast.
#[async_trait]
pub trait CultureRepository: Send + Sync {
    /// Culture 全体のスナップショットを取得
    async fn get_snapshot(&self) -> Culture;

    /// 環境値を置き換える
    async fn apply_environment_update(&self, environment: EnvironmentState) -> EnvironmentState;

    /// モールドリスト全体を置き換える
    async fn apply_mold_placement(&self, molds: Vec<Mold>) -> Vec<Mold>;

    /// シャーレを空にする
    async fn clear_dish(&self) -> Vec<Mold>;

    /// メッセージログに追記する
    async fn append_message(
        &self,
        sender: ConnectionId,
        content: String,
        now: Timestamp,
    ) -> ChatMessage;
}
