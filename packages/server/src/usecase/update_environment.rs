//! UseCase: 環境値の更新処理

use std::sync::Arc;

use crate::domain::{ConnectionId, CultureRepository, EnvironmentState, MessagePusher};

use super::{broadcast::broadcast_to_all, error::BroadcastError};

/// 環境値更新のユースケース
pub struct UpdateEnvironmentUseCase {
    repository: Arc<dyn CultureRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl UpdateEnvironmentUseCase {
    pub fn new(
        repository: Arc<dyn CultureRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 環境値を置き換え、新しい値を返す（範囲は検証しない）
    pub async fn execute(&self, environment: EnvironmentState) -> EnvironmentState {
        self.repository.apply_environment_update(environment).await
    }

    /// 更新後の環境値を送信者を含む全クライアントにブロードキャスト
    pub async fn broadcast_environment(
        &self,
        message: &str,
    ) -> Result<Vec<ConnectionId>, BroadcastError> {
        broadcast_to_all(self.message_pusher.as_ref(), message, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Culture, MockMessagePusher, Timestamp},
        infrastructure::repository::InMemoryCultureRepository,
    };
    use tokio::sync::Mutex;

    fn create_test_repository() -> Arc<InMemoryCultureRepository> {
        let culture = Arc::new(Mutex::new(Culture::new(Timestamp::new(0))));
        Arc::new(InMemoryCultureRepository::new(culture))
    }

    #[tokio::test]
    async fn test_update_environment_replaces_state() {
        // テスト項目: 環境値 {50,60,70} が正規の状態になる
        // given (前提条件):
        let repository = create_test_repository();
        let usecase =
            UpdateEnvironmentUseCase::new(repository.clone(), Arc::new(MockMessagePusher::new()));

        // when (操作):
        let result = usecase.execute(EnvironmentState::new(50, 60, 70)).await;

        // then (期待する結果):
        assert_eq!(result, EnvironmentState::new(50, 60, 70));
        assert_eq!(
            repository.get_snapshot().await.environment,
            EnvironmentState::new(50, 60, 70)
        );
    }

    #[tokio::test]
    async fn test_broadcast_environment_targets_everyone() {
        // テスト項目: 環境値の更新は送信者を含む全クライアントに送られる
        // given (前提条件):
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_connected_client_ids()
            .returning(|| vec![ConnectionId::new(0), ConnectionId::new(1)]);
        pusher
            .expect_broadcast()
            .withf(|targets, _content| targets.len() == 2)
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = UpdateEnvironmentUseCase::new(create_test_repository(), Arc::new(pusher));

        // when (操作):
        let result = usecase
            .broadcast_environment(
                r#"{"type":"environment_update","environment":50,"time":60,"temperature":70}"#,
            )
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(vec![ConnectionId::new(0), ConnectionId::new(1)]));
    }
}
