//! Test fixtures: an in-process server and WebSocket helpers.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use roomchat_server::{
    ServerConfig, build_router, infrastructure::repository::InMemoryRoomRepository,
    ui::state::AppState,
};
use tokio::{net::TcpListener, task::JoinHandle};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, tungstenite::Message};

pub type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

/// Server bound to an ephemeral local port, stopped on drop.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(ServerConfig::default()).await
    }

    pub async fn start_with(config: ServerConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let state = Arc::new(AppState::new(
            Arc::new(InMemoryRoomRepository::new()),
            config,
        ));
        let app = build_router(state);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });
        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self, room_id: &str) -> String {
        format!("ws://{}/ws/{}", self.addr, room_id)
    }

    /// Create a room through the HTTP API and return its id
    pub async fn create_room(&self) -> String {
        let response = reqwest::Client::new()
            .post(format!("{}/room", self.base_url()))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 201);
        response.text().await.expect("Failed to read body")
    }

    /// Wait until the room reports `count` participants
    pub async fn wait_for_participants(&self, room_id: &str, count: usize) {
        let client = reqwest::Client::new();
        for _ in 0..100 {
            let rooms: serde_json::Value = client
                .get(format!("{}/api/rooms", self.base_url()))
                .send()
                .await
                .expect("Failed to send request")
                .json()
                .await
                .expect("Failed to parse JSON");
            let current = rooms
                .as_array()
                .and_then(|rooms| rooms.iter().find(|room| room["id"] == room_id))
                .and_then(|room| room["participant_count"].as_u64());
            if current == Some(count as u64) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("room {room_id} never reached {count} participants");
    }

    /// Connect to a room and wait until the server has registered the client
    pub async fn join(&self, room_id: &str, expected_participants: usize) -> WsStream {
        let (ws, _) = tokio_tungstenite::connect_async(self.ws_url(room_id))
            .await
            .expect("Failed to connect");
        self.wait_for_participants(room_id, expected_participants)
            .await;
        ws
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn send_text(ws: &mut WsStream, text: &str) {
    ws.send(Message::text(text))
        .await
        .expect("Failed to send message");
}

/// Next text frame, failing the test after a timeout
pub async fn recv_text(ws: &mut WsStream) -> String {
    loop {
        let next = tokio::time::timeout(RECV_TIMEOUT, ws.next())
            .await
            .expect("Timed out waiting for a message");
        match next {
            Some(Ok(Message::Text(text))) => return text.as_str().to_string(),
            Some(Ok(Message::Ping(_) | Message::Pong(_))) => continue,
            other => panic!("expected a text message, got {other:?}"),
        }
    }
}

/// Next text frame decoded as JSON
pub async fn recv_json(ws: &mut WsStream) -> serde_json::Value {
    let text = recv_text(ws).await;
    serde_json::from_str(&text).expect("Received frame is not JSON")
}

/// Assert that no text frame arrives within a short window
pub async fn assert_silent(ws: &mut WsStream) {
    let next = tokio::time::timeout(Duration::from_millis(200), ws.next()).await;
    if let Ok(Some(Ok(Message::Text(text)))) = next {
        panic!("expected no message, got {text}");
    }
}

/// Assert that the server closes the connection
pub async fn assert_closed(ws: &mut WsStream) {
    loop {
        let next = tokio::time::timeout(RECV_TIMEOUT, ws.next())
            .await
            .expect("Timed out waiting for the connection to close");
        match next {
            None | Some(Err(_)) | Some(Ok(Message::Close(_))) => return,
            Some(Ok(Message::Ping(_) | Message::Pong(_))) => continue,
            Some(Ok(other)) => panic!("expected the connection to close, got {other:?}"),
        }
    }
}
