//! Domain layer: culture entities, value objects and the traits the
//! infrastructure layer implements.

pub mod entity;
pub mod error;
pub mod factory;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use entity::{ChatMessage, Culture, EnvironmentState, Mold};
pub use error::MessagePushError;
pub use factory::ConnectionIdFactory;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::CultureRepository;
pub use value_object::{ConnectionId, MOLD_PALETTE, MoldType, Timestamp};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
