//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{create_room, get_room, health_check, list_rooms, metrics};

// Re-export WebSocket handlers
pub use websocket::websocket_handler;
