//! Server entry point.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{
    config::ServerConfig, error::ServerError, infrastructure::repository::InMemoryRoomRepository,
};

use super::{router::build_router, signal::shutdown_signal, state::AppState};

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

    tracing::info!(
        "Listening on {} (wire format: {}, CORS origin: {})",
        address,
        config.wire_format,
        config.cors_origin
    );

    let state = Arc::new(AppState::new(
        Arc::new(InMemoryRoomRepository::new()),
        config,
    ));
    let app = build_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
