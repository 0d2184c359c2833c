//! Room chat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomchat-server -- --port 8080
//! ```

use clap::Parser;
use roomchat_server::{ServerArgs, ServerConfig};
use roomchat_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = ServerArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the server
    if let Err(e) = roomchat_server::run(ServerConfig::from(&args)).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
