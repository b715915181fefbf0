//! Conversion logic between DTOs and domain entities.

use crate::domain::{ChatMessage, ConnectionId, EnvironmentState, Mold, MoldType};
use crate::infrastructure::dto::websocket::{EnvironmentDto, MessageDto, MoldDto, ServerEvent};

// ========================================
// DTO → Domain Entity
// ========================================

impl From<EnvironmentDto> for EnvironmentState {
    fn from(dto: EnvironmentDto) -> Self {
        Self::new(dto.environment, dto.time, dto.temperature)
    }
}

impl From<MoldDto> for Mold {
    fn from(dto: MoldDto) -> Self {
        Self::new(dto.x, dto.y, dto.size, MoldType::new(dto.mold_type))
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<EnvironmentState> for EnvironmentDto {
    fn from(model: EnvironmentState) -> Self {
        Self {
            environment: model.environment,
            time: model.time,
            temperature: model.temperature,
        }
    }
}

impl From<Mold> for MoldDto {
    fn from(model: Mold) -> Self {
        Self {
            x: model.x,
            y: model.y,
            size: model.size,
            mold_type: model.mold_type.index(),
        }
    }
}

impl From<ChatMessage> for MessageDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            content: model.content,
            time: model.time.value(),
            sender: model.sender.value(),
        }
    }
}

// ========================================
// Outbound events
// ========================================

impl ServerEvent {
    pub fn welcome(id: ConnectionId, connected: &[ConnectionId], messages: &[ChatMessage]) -> Self {
        Self::Welcome {
            id: id.value(),
            connected: connected.iter().map(ConnectionId::value).collect(),
            messages: messages.iter().cloned().map(MessageDto::from).collect(),
        }
    }

    pub fn connected(id: ConnectionId) -> Self {
        Self::Connected { id: id.value() }
    }

    pub fn disconnected(id: ConnectionId) -> Self {
        Self::Disconnected { id: id.value() }
    }

    pub fn server_message(message: ChatMessage) -> Self {
        Self::ServerMessage(message.into())
    }

    pub fn environment_update(environment: EnvironmentState) -> Self {
        Self::EnvironmentUpdate(environment.into())
    }

    pub fn mold_placed(molds: &[Mold]) -> Self {
        Self::MoldPlaced {
            molds: molds.iter().copied().map(MoldDto::from).collect(),
        }
    }

    pub fn clear_dish() -> Self {
        Self::ClearDish {}
    }
}
