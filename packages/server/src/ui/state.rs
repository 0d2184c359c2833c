//! Server state shared by every handler.

use std::sync::Arc;

use crate::{
    config::ServerConfig,
    domain::{RoomId, RoomRepository},
    metrics::Metrics,
    usecase::{ExpireRoomUseCase, Relay},
};

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn RoomRepository>,
    pub metrics: Arc<Metrics>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(repository: Arc<dyn RoomRepository>, config: ServerConfig) -> Self {
        Self {
            repository,
            metrics: Arc::new(Metrics::new()),
            config,
        }
    }

    /// Encode a relay once and hand it to every target's writer task.
    ///
    /// A target that is gone is skipped; the others still receive it.
    pub async fn deliver(&self, relay: &Relay) {
        let payload = self.config.wire_format.encode_relay(&relay.envelope);
        self.metrics.message_received();

        for target in &relay.targets {
            match self.repository.get_client_sender(target).await {
                Some(sender) if sender.send(payload.clone()).is_ok() => {
                    self.metrics.message_broadcasted();
                }
                _ => {
                    tracing::warn!(
                        "Failed to send {} to client '{}'",
                        relay.envelope.kind(),
                        target
                    );
                }
            }
        }
        tracing::debug!(
            "Relayed {} from {:?} to {} client(s)",
            relay.envelope.kind(),
            relay.envelope.author(),
            relay.targets.len()
        );
    }

    /// Remove the room once it has stayed empty for the configured timeout.
    ///
    /// Call whenever a room becomes empty. A timer that fires after someone
    /// joined and left again leaves the room to the later timer.
    pub fn schedule_room_expiry(self: &Arc<Self>, room_id: RoomId) {
        let state = Arc::clone(self);
        let timeout = self.config.empty_room_timeout;
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            let usecase = ExpireRoomUseCase::new(state.repository.clone(), timeout);
            if usecase.execute(&room_id).await {
                state.metrics.room_removed();
                tracing::info!("Room '{}' removed after staying empty", room_id);
            }
        });
    }
}
