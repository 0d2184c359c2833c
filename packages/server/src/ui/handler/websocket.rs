//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    config::ServerConfig,
    domain::{ClientId, RoomId},
    ui::state::AppState,
    usecase::{
        ConnectError, ConnectParticipantUseCase, DisconnectParticipantUseCase, SendMessageError,
        SendMessageUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StatusCode> {
    if !origin_allowed(&state.config, &headers) {
        tracing::warn!("Rejecting WebSocket upgrade from a foreign origin");
        return Err(StatusCode::FORBIDDEN);
    }

    // Convert String -> RoomId (Domain Model)
    let room_id = match RoomId::try_from(room.clone()) {
        Ok(id) => id,
        Err(_) => {
            tracing::warn!("Invalid room id: '{}'", room);
            return Err(StatusCode::NOT_FOUND);
        }
    };

    let connect_usecase = ConnectParticipantUseCase::new(state.repository.clone());
    match connect_usecase.check_room(&room_id).await {
        Ok(()) => Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, room_id))),
        Err(ConnectError::RoomNotFound(_)) => {
            tracing::warn!("Room '{}' not found", room_id);
            Err(StatusCode::NOT_FOUND)
        }
        Err(ConnectError::RoomCapacityExceeded) => {
            tracing::warn!("Room '{}' is full. Rejecting connection.", room_id);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Browsers always send `Origin`; other clients may omit it and are let through.
fn origin_allowed(config: &ServerConfig, headers: &HeaderMap) -> bool {
    if config.allows_any_origin() {
        return true;
    }
    match headers.get(header::ORIGIN) {
        Some(origin) => origin.as_bytes() == config.cors_origin.as_bytes(),
        None => true,
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, room_id: RoomId) {
    // Create a channel for this client to receive messages
    let (tx, mut rx) = mpsc::unbounded_channel();

    let connect_usecase = ConnectParticipantUseCase::new(state.repository.clone());
    let client_id = match connect_usecase.execute(&room_id, tx).await {
        Ok(id) => id,
        Err(e) => {
            // the room vanished or filled up since the upgrade was accepted
            tracing::warn!("Closing connection to room '{}': {}", room_id, e);
            return;
        }
    };
    state.metrics.client_connected();
    tracing::info!("Client '{}' joined room '{}'", client_id, room_id);

    let (mut sender, mut receiver) = socket.split();

    let recv_state = state.clone();
    let recv_room_id = room_id.clone();
    let recv_client_id = client_id.clone();

    // Spawn a task to receive envelopes from this client
    let mut recv_task = tokio::spawn(async move {
        let send_usecase = SendMessageUseCase::new(recv_state.repository.clone());
        let wire_format = recv_state.config.wire_format;

        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!("WebSocket error from '{}': {}", recv_client_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let envelope = match wire_format.decode_request(text.as_str()) {
                        Ok(envelope) => envelope,
                        Err(e) => {
                            tracing::warn!(
                                "Invalid message from '{}': {}. Disconnecting client.",
                                recv_client_id,
                                e
                            );
                            break;
                        }
                    };

                    match send_usecase
                        .execute(&recv_room_id, &recv_client_id, envelope)
                        .await
                    {
                        Ok(Some(relay)) => recv_state.deliver(&relay).await,
                        Ok(None) => {}
                        Err(SendMessageError::InvalidName(e)) => {
                            tracing::warn!("Ignoring name from '{}': {}", recv_client_id, e);
                        }
                        Err(e) => {
                            tracing::warn!(
                                "{}. Disconnecting client '{}'.",
                                e,
                                recv_client_id
                            );
                            break;
                        }
                    }
                }
                Message::Binary(_) => {
                    tracing::debug!("Ignoring binary frame from '{}'", recv_client_id);
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", recv_client_id);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // Spawn a task to forward relayed envelopes to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    disconnect(&state, &room_id, &client_id).await;
}

async fn disconnect(state: &Arc<AppState>, room_id: &RoomId, client_id: &ClientId) {
    let disconnect_usecase = DisconnectParticipantUseCase::new(state.repository.clone());

    match disconnect_usecase.execute(room_id, client_id).await {
        Ok(outcome) => {
            state.metrics.client_disconnected();
            tracing::info!("Client '{}' left room '{}'", client_id, room_id);

            // Broadcast LEAVE to the remaining participants
            if let Some(relay) = outcome.leave {
                state.deliver(&relay).await;
            }
            if outcome.room_empty {
                state.schedule_room_expiry(room_id.clone());
            }
        }
        Err(e) => {
            tracing::warn!("Failed to disconnect participant: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn config_with_origin(origin: &str) -> ServerConfig {
        ServerConfig {
            cors_origin: origin.to_string(),
            ..ServerConfig::default()
        }
    }

    #[test]
    fn test_origin_allowed_with_wildcard() {
        // テスト項目: "*" の場合は全てのオリジンを許可する
        let config = config_with_origin("*");
        let mut headers = HeaderMap::new();
        headers.insert(header::ORIGIN, HeaderValue::from_static("https://evil.example"));

        assert!(origin_allowed(&config, &headers));
    }

    #[test]
    fn test_origin_allowed_exact_match_only() {
        // テスト項目: オリジン指定時は一致するオリジンのみ許可する
        let config = config_with_origin("https://chat.example");
        let mut allowed = HeaderMap::new();
        allowed.insert(header::ORIGIN, HeaderValue::from_static("https://chat.example"));
        let mut denied = HeaderMap::new();
        denied.insert(header::ORIGIN, HeaderValue::from_static("https://evil.example"));

        assert!(origin_allowed(&config, &allowed));
        assert!(!origin_allowed(&config, &denied));
    }

    #[test]
    fn test_origin_missing_is_allowed() {
        // テスト項目: Origin ヘッダのないクライアント（CLI など）は許可する
        let config = config_with_origin("https://chat.example");

        assert!(origin_allowed(&config, &HeaderMap::new()));
    }
}
