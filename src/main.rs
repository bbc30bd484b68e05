//! emote-relay entry point.
//!
//! Starts the WebSocket listener and the operator console.

use tracing_subscriber::EnvFilter;

use emote_relay::config::RelayConfig;
use emote_relay::console::{ConsoleReply, spawn_console};
use emote_relay::relay;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RelayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting emote-relay");

    let handle = relay::start(&config).await?;
    println!("{}", ConsoleReply::Banner(handle.local_addr()));
    println!("{}", ConsoleReply::Help);

    if config.console_enabled {
        let _console = spawn_console(handle.events())?;
    }

    tokio::select! {
        res = handle.wait() => res?,
        _ = tokio::signal::ctrl_c() => {
            println!();
            tracing::info!("interrupt received");
            println!("{}", ConsoleReply::ShuttingDown);
        }
    }

    Ok(())
}
