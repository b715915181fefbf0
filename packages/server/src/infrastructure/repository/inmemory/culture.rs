//! InMemory Culture Repository 実装
//!
//! ドメイン層が定義する CultureRepository trait の具体的な実装。
//! `Culture` 集約を Mutex で保護し、プロセスの生存期間だけ保持します。
//! 再起動すると状態は失われます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, ConnectionId, Culture, CultureRepository, EnvironmentState, Mold, Timestamp,
};

/// インメモリ Culture Repository 実装
pub struct InMemoryCultureRepository {
    culture: Arc<Mutex<Culture>>,
}

impl InMemoryCultureRepository {
    /// 新しい InMemoryCultureRepository を作成
    pub fn new(culture: Arc<Mutex<Culture>>) -> Self {
        Self { culture }
    }
}

#[async_trait]
impl CultureRepository for InMemoryCultureRepository {
    async fn get_snapshot(&self) -> Culture {
        self.culture.lock().await.clone()
    }

    async fn apply_environment_update(&self, environment: EnvironmentState) -> EnvironmentState {
        let mut culture = self.culture.lock().await;
        culture.replace_environment(environment)
    }

    async fn apply_mold_placement(&self, molds: Vec<Mold>) -> Vec<Mold> {
        let mut culture = self.culture.lock().await;
        culture.replace_molds(molds)
    }

    async fn clear_dish(&self) -> Vec<Mold> {
        let mut culture = self.culture.lock().await;
        culture.clear_molds()
    }

    async fn append_message(
        &self,
        sender: ConnectionId,
        content: String,
        now: Timestamp,
    ) -> ChatMessage {
        let mut culture = self.culture.lock().await;
        culture.append_message(sender, content, now)
    }
}
