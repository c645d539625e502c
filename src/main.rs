//! Chain gateway binary.
//!
//! Starts the traced gateway: loads configuration, initializes telemetry
//! (stdout + OTLP span export), binds the listener, and serves the single
//! chain endpoint until a shutdown signal arrives. The telemetry guard is
//! dropped last so buffered spans are flushed to the collector on exit.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use chain_gateway::config::{self, GatewayConfig};
use chain_gateway::lifecycle::{signals, Shutdown};
use chain_gateway::telemetry;
use chain_gateway::HttpServer;

#[derive(Parser, Debug)]
#[command(name = "chain-gateway", version, about = "Traced chain gateway")]
struct Cli {
    /// Path to a TOML config file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => GatewayConfig::default(),
    };

    // Telemetry first: startup itself should be logged and traced. The
    // guard flushes the batch exporter when main returns.
    let _telemetry = telemetry::init_telemetry(&config.telemetry)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        downstream = %config.downstream.url(),
        otlp_endpoint = %config.telemetry.otlp_endpoint,
        "chain-gateway starting"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::listen_for_signals(shutdown));

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
