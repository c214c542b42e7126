//! Sketch-to-NFT studio (v1)
//!
//! Serves the drawing studio API and keeps one wallet session per process.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌───────────────────────────────────────────────┐
//!                     │                    STUDIO                     │
//!   pointer / color   │  ┌─────────┐    ┌─────────┐    ┌───────────┐  │
//!   ──────────────────┼─▶│  http   │───▶│  canvas │───▶│  surface  │  │
//!                     │  │ handlers│    │   pen   │    │  (RGBA)   │  │
//!                     │  └────┬────┘    └─────────┘    └─────┬─────┘  │
//!   mint / reconnect  │       │                              │ PNG    │
//!   ──────────────────┼───────┤                              ▼        │
//!                     │       │         ┌─────────┐    ┌───────────┐  │
//!                     │       └────────▶│ session │───▶│   mint    │──┼──▶ safeMint
//!                     │                 │  state  │    │ pipeline  │  │    (RPC)
//!                     │                 └─────────┘    └───────────┘  │
//!                     └───────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use sketch_mint::config::load_or_default;
use sketch_mint::lifecycle::{startup::bootstrap, Shutdown};
use sketch_mint::observability::{logging, metrics};
use sketch_mint::StudioServer;

#[derive(Parser)]
#[command(name = "sketch-mint")]
#[command(about = "Drawing studio that mints sketches as NFTs", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    logging::init_tracing(&config.observability);
    tracing::info!("sketch-mint v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        canvas_width = config.canvas.width,
        canvas_height = config.canvas.height,
        contract = %config.contract.address,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let studio = bootstrap(&config).await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    shutdown.listen_for_signals();

    let server = StudioServer::new(&config, studio);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
