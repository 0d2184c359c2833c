//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    domain::RoomId,
    infrastructure::dto::http::{HealthDto, RoomSummaryDto},
    ui::state::AppState,
    usecase::CreateRoomUseCase,
};

/// Create a room and answer with its id as plain text
pub async fn create_room(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let usecase = CreateRoomUseCase::new(state.repository.clone(), state.config.room_capacity);

    match usecase.execute().await {
        Ok(room_id) => {
            tracing::info!("Room '{}' created", room_id);
            state.metrics.room_created();
            state.schedule_room_expiry(room_id.clone());
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "text/plain")],
                room_id.to_string(),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create room: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Check whether a room exists
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> StatusCode {
    let Ok(room_id) = RoomId::try_from(room) else {
        return StatusCode::NOT_FOUND;
    };

    match state.repository.get_room(&room_id).await {
        Ok(_) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::NOT_FOUND,
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Get list of rooms
pub async fn list_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.repository.list_rooms().await;
    Json(rooms.iter().map(RoomSummaryDto::from).collect())
}

/// Prometheus text exposition of the server counters
pub async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
