//! Demo line-oriented chat client.
//!
//! Run with: cargo run -p chat-cli -- --host 127.0.0.1 --port 3000
//!
//! Type a line to send it; inbound messages print as they arrive. Type
//! `exit` (or close stdin) to end the session.

use anyhow::Context as _;
use chatlink_core::Endpoint;
use chatlink_session::{ConsoleSink, SessionCoordinator, StdinLines};
use chatlink_transport::WsTransport;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Connect to a chat endpoint and pump messages both ways.
#[derive(Parser)]
struct Args {
    /// Remote host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Remote port.
    #[arg(long, default_value_t = 3000)]
    port: u16,
    /// Channel path on the remote host.
    #[arg(long, default_value = "/chat")]
    path: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let endpoint = Endpoint::new(args.host, args.port, args.path);

    tracing::info!("Connecting to {endpoint}");
    let coordinator = SessionCoordinator::new(WsTransport, StdinLines::new(), ConsoleSink::new());
    coordinator
        .run(&endpoint)
        .await
        .context("chat session failed")?;

    println!("Connection closed.");
    Ok(())
}
