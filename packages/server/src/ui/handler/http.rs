//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    domain::ConnectionId,
    infrastructure::dto::{
        http::{CultureStateDto, HealthDto},
        websocket::{MessageDto, MoldDto},
    },
    ui::state::AppState,
};
use petri_shared::time::timestamp_to_rfc3339;

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Debug endpoint to get the current culture (for testing purposes)
pub async fn debug_culture_state(State(state): State<Arc<AppState>>) -> Json<CultureStateDto> {
    let culture_state = {
        let _relay = state.relay_lock.lock().await;
        state.get_culture_state_usecase.execute().await
    };
    let culture = culture_state.culture;

    // Domain Model から DTO への変換
    Json(CultureStateDto {
        created_at: timestamp_to_rfc3339(culture.created_at.value()),
        connected: culture_state
            .connected
            .iter()
            .map(ConnectionId::value)
            .collect(),
        environment: culture.environment.into(),
        molds: culture.molds.into_iter().map(MoldDto::from).collect(),
        messages: culture.messages.into_iter().map(MessageDto::from).collect(),
    })
}
