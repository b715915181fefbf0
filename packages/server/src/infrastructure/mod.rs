//! Infrastructure layer: concrete repository and pusher implementations and
//! the wire DTOs.

pub mod dto;
pub mod message_pusher;
pub mod repository;
