//! Entities and the `Culture` aggregate.
//!
//! The culture is the single piece of shared state: one environment, one
//! list of molds and one ever-growing message log. Every mutation replaces
//! its slice wholesale; there is no merging and no validation, so the last
//! event to arrive wins.

use super::{ConnectionId, MoldType, Timestamp};

/// Environment sliders, nominally each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentState {
    pub environment: i64,
    pub time: i64,
    pub temperature: i64,
}

impl EnvironmentState {
    pub fn new(environment: i64, time: i64, temperature: i64) -> Self {
        Self {
            environment,
            time,
            temperature,
        }
    }

    /// Radius a mold placed under these conditions grows to.
    ///
    /// `environment` sets a 10-40 base, `time` multiplies it by 1x-3x and
    /// `temperature` scales it by 0.5x-1.5x.
    pub fn mold_size(&self) -> f64 {
        let base_size = 10.0 + (self.environment as f64 / 100.0) * 30.0;
        let growth_factor = 1.0 + (self.time as f64 / 100.0) * 2.0;
        let temperature_effect = 0.5 + self.temperature as f64 / 100.0;
        base_size * growth_factor * temperature_effect
    }
}

impl Default for EnvironmentState {
    fn default() -> Self {
        Self::new(50, 50, 50)
    }
}

/// A mold in the dish. Molds have no identity of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mold {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub mold_type: MoldType,
}

impl Mold {
    pub fn new(x: f64, y: f64, size: f64, mold_type: MoldType) -> Self {
        Self {
            x,
            y,
            size,
            mold_type,
        }
    }

    /// Place a mold whose size is derived from `environment`.
    pub fn grown_in(x: f64, y: f64, mold_type: MoldType, environment: &EnvironmentState) -> Self {
        Self::new(x, y, environment.mold_size(), mold_type)
    }
}

/// A line in the message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub content: String,
    pub time: Timestamp,
    pub sender: ConnectionId,
}

/// The shared culture snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Culture {
    pub created_at: Timestamp,
    pub environment: EnvironmentState,
    pub molds: Vec<Mold>,
    pub messages: Vec<ChatMessage>,
}

impl Culture {
    /// An empty dish under the default environment.
    pub fn new(created_at: Timestamp) -> Self {
        Self {
            created_at,
            environment: EnvironmentState::default(),
            molds: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn replace_environment(&mut self, environment: EnvironmentState) -> EnvironmentState {
        self.environment = environment;
        self.environment
    }

    pub fn replace_molds(&mut self, molds: Vec<Mold>) -> Vec<Mold> {
        self.molds = molds;
        self.molds.clone()
    }

    pub fn clear_molds(&mut self) -> Vec<Mold> {
        self.molds.clear();
        Vec::new()
    }

    /// Append a message to the log.
    ///
    /// The stored time never precedes the previous message's time, even if
    /// `now` does.
    pub fn append_message(
        &mut self,
        sender: ConnectionId,
        content: String,
        now: Timestamp,
    ) -> ChatMessage {
        let time = match self.messages.last() {
            Some(last) if last.time > now => last.time,
            _ => now,
        };
        let message = ChatMessage {
            content,
            time,
            sender,
        };
        self.messages.push(message.clone());
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mold_at(x: f64, y: f64) -> Mold {
        Mold::new(x, y, 20.0, MoldType::new(0))
    }

    #[test]
    fn test_new_culture_has_default_environment_and_empty_dish() {
        // テスト項目: 新しいカルチャーは既定の環境値と空のシャーレを持つ
        // given (前提条件):
        let created_at = Timestamp::new(1000);

        // when (操作):
        let culture = Culture::new(created_at);

        // then (期待する結果):
        assert_eq!(culture.environment, EnvironmentState::new(50, 50, 50));
        assert!(culture.molds.is_empty());
        assert!(culture.messages.is_empty());
        assert_eq!(culture.created_at, created_at);
    }

    #[test]
    fn test_replace_environment_is_last_write_wins() {
        // テスト項目: 環境値は検証されず最後の更新で上書きされる
        // given (前提条件):
        let mut culture = Culture::new(Timestamp::new(0));
        culture.replace_environment(EnvironmentState::new(10, 20, 30));

        // when (操作): 範囲外の値でも受け入れる
        let result = culture.replace_environment(EnvironmentState::new(50, 60, 170));

        // then (期待する結果):
        assert_eq!(result, EnvironmentState::new(50, 60, 170));
        assert_eq!(culture.environment, result);
    }

    #[test]
    fn test_replace_molds_is_idempotent() {
        // テスト項目: 同じモールドリストを2回適用しても結果は1回と同じ（置換であり追加ではない）
        // given (前提条件):
        let mut culture = Culture::new(Timestamp::new(0));
        let molds = vec![mold_at(1.0, 2.0), mold_at(3.0, 4.0)];

        // when (操作):
        let once = culture.replace_molds(molds.clone());
        let twice = culture.replace_molds(molds.clone());

        // then (期待する結果):
        assert_eq!(once, twice);
        assert_eq!(culture.molds, molds);
    }

    #[test]
    fn test_clear_molds_empties_the_dish() {
        // テスト項目: clear_molds はモールド数に関係なくシャーレを空にする
        // given (前提条件):
        let mut culture = Culture::new(Timestamp::new(0));
        culture.replace_molds((0..25).map(|i| mold_at(i as f64, 0.0)).collect());

        // when (操作):
        let result = culture.clear_molds();

        // then (期待する結果):
        assert!(result.is_empty());
        assert!(culture.molds.is_empty());
    }

    #[test]
    fn test_append_message_keeps_time_non_decreasing() {
        // テスト項目: 時計が巻き戻ってもメッセージ時刻は減少しない
        // given (前提条件):
        let mut culture = Culture::new(Timestamp::new(0));
        let first = culture.append_message(ConnectionId::new(1), "a".to_string(), Timestamp::new(5000));

        // when (操作):
        let second =
            culture.append_message(ConnectionId::new(2), "b".to_string(), Timestamp::new(4000));
        let third =
            culture.append_message(ConnectionId::new(1), "c".to_string(), Timestamp::new(6000));

        // then (期待する結果):
        assert_eq!(first.time, Timestamp::new(5000));
        assert_eq!(second.time, Timestamp::new(5000));
        assert_eq!(third.time, Timestamp::new(6000));
        assert_eq!(culture.messages.len(), 3);
        assert_eq!(culture.messages[1].sender, ConnectionId::new(2));
    }

    #[test]
    fn test_mold_size_at_bounds() {
        // テスト項目: モールドサイズが環境値から導出される
        // given (前提条件):
        let smallest = EnvironmentState::new(0, 0, 0);
        let default = EnvironmentState::default();
        let largest = EnvironmentState::new(100, 100, 100);

        // when (操作) / then (期待する結果):
        assert!((smallest.mold_size() - 5.0).abs() < 1e-9);
        assert!((default.mold_size() - 50.0).abs() < 1e-9);
        assert!((largest.mold_size() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_mold_grown_in_uses_environment_size() {
        // テスト項目: grown_in で作ったモールドのサイズは環境から導出される
        // given (前提条件):
        let environment = EnvironmentState::new(100, 0, 50);

        // when (操作):
        let mold = Mold::grown_in(12.0, 34.0, MoldType::new(5), &environment);

        // then (期待する結果):
        assert_eq!(mold.x, 12.0);
        assert_eq!(mold.y, 34.0);
        assert!((mold.size - 40.0).abs() < 1e-9);
        assert_eq!(mold.mold_type.name(), Some("yellow mold"));
    }
}
