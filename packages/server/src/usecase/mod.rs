//! UseCase layer: one use case per relay operation.
//!
//! Each state-changing use case has an `execute` step that applies the
//! change and returns the canonical value, and a broadcast step that fans
//! the serialized event out. Serialization stays in the UI layer.

mod broadcast;
mod clear_dish;
mod connect_client;
mod disconnect_client;
mod error;
mod get_culture_state;
mod place_molds;
mod send_message;
mod update_environment;

pub use clear_dish::ClearDishUseCase;
pub use connect_client::{ConnectClientUseCase, WelcomeSnapshot};
pub use disconnect_client::DisconnectClientUseCase;
pub use error::{BroadcastError, DisconnectError};
pub use get_culture_state::{CultureState, GetCultureStateUseCase};
pub use place_molds::PlaceMoldsUseCase;
pub use send_message::SendMessageUseCase;
pub use update_environment::UpdateEnvironmentUseCase;
