//! Factories for domain identifiers.

use std::sync::atomic::{AtomicU64, Ordering};

use super::ConnectionId;

/// Hands out [`ConnectionId`]s in increasing order, starting at 0.
#[derive(Debug, Default)]
pub struct ConnectionIdFactory {
    next: AtomicU64,
}

impl ConnectionIdFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&self) -> ConnectionId {
        ConnectionId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_generate_starts_at_zero_and_increments() {
        // テスト項目: ID は 0 から始まり 1 ずつ増加する
        // given (前提条件):
        let factory = ConnectionIdFactory::new();

        // when (操作):
        let ids: Vec<u64> = (0..4).map(|_| factory.generate().value()).collect();

        // then (期待する結果):
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_generate_is_unique_across_threads() {
        // テスト項目: 複数スレッドから生成しても ID は重複しない
        // given (前提条件):
        let factory = Arc::new(ConnectionIdFactory::new());

        // when (操作):
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let factory = factory.clone();
                std::thread::spawn(move || {
                    (0..100).map(|_| factory.generate()).collect::<Vec<_>>()
                })
            })
            .collect();
        let mut ids: Vec<ConnectionId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        // then (期待する結果):
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 800);
        assert_eq!(factory.generate().value(), 800);
    }
}
