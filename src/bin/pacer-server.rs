// ABOUTME: Pacer server binary - HTTP API for cadence calculation and playlist building
// ABOUTME: Loads environment configuration, initializes logging, and runs the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! # Pacer Server Binary
//!
//! Starts the Pacer HTTP API: run-stats calculation, tempo-matched track
//! search, and playlist creation against the Spotify Web API.

use anyhow::Result;
use clap::Parser;
use pacer::config::environment::ServerConfig;
use pacer::logging;
use pacer::server::{PacerServer, ServerResources};
use pacer_providers::initialize_shared_client;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pacer-server")]
#[command(about = "Pacer - running cadence to tempo-matched Spotify playlists")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Pacer API");
    info!("{}", config.summary());

    // Configure the shared outbound HTTP client before any provider call
    initialize_shared_client(
        config.http_client.timeout_secs,
        config.http_client.connect_timeout_secs,
    );

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(config));
    let server = PacerServer::new(resources);

    info!("Server starting on port {port}");

    if let Err(e) = server.run(port).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}
