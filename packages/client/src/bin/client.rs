//! Room chat CLI client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomchat-client -- --name alice
//! cargo run --bin roomchat-client -- --name bob --room <ROOM_ID>
//! ```

use clap::Parser;
use roomchat_client::ClientArgs;
use roomchat_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = ClientArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    if let Err(e) = roomchat_client::run(args).await {
        tracing::error!("Client error: {}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
