//! Logger setup shared by the binaries.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when it is set. Otherwise `default_level` is applied to the
/// given binary and the roomchat crates, and everything else stays at `warn`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let crate_name = bin_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,{crate_name}={default_level},roomchat_server={default_level},roomchat_client={default_level},roomchat_shared={default_level},tower_http={default_level}"
        ))
    });

    // try_init so that tests which install a subscriber twice do not panic
    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
    {
        tracing::debug!("Global subscriber already installed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logger_twice_does_not_panic() {
        // テスト項目: 2 回目の初期化は失敗を記録するだけで処理を続ける
        setup_logger("roomchat-shared", "debug");
        setup_logger("roomchat-shared", "info");

        tracing::info!("still logging after the second setup");
    }
}
