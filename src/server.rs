// ABOUTME: Server assembly and lifecycle for the Pacer HTTP service
// ABOUTME: Builds the axum router from domain route modules and runs it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! Server assembly and lifecycle
//!
//! `ServerResources` holds the shared per-process state handed to route
//! modules; `PacerServer` assembles the router and serves it.

use crate::config::environment::ServerConfig;
use crate::routes::{GenresRoutes, PlaylistRoutes, RunStatsRoutes, TrackRoutes};
use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Inbound request timeout in seconds
///
/// A catalog-bound request performs up to a handful of sequential upstream
/// calls, each bounded by the outbound client timeout; this caps the total.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Shared per-process state handed to route modules
pub struct ServerResources {
    /// Server configuration loaded at startup
    pub config: ServerConfig,
}

impl ServerResources {
    /// Create server resources from configuration
    #[must_use]
    pub const fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

/// The Pacer HTTP server
pub struct PacerServer {
    resources: Arc<ServerResources>,
}

impl PacerServer {
    /// Create a new server from shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Assemble the full application router
    ///
    /// The browser frontend calls this API from another origin, so CORS is
    /// permissive; there is no cookie-based state to protect. Liveness and
    /// readiness probes are identical for this stateless service, so both
    /// live here rather than in a route module of their own.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .merge(RunStatsRoutes::routes())
            .merge(GenresRoutes::routes())
            .merge(TrackRoutes::routes(self.resources.clone()))
            .merge(PlaylistRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
    }

    /// Liveness probe
    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Readiness probe
    ///
    /// No database and no warm-up phase: the process is ready as soon as it
    /// answers.
    async fn handle_ready() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Run the server until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error when the listener cannot bind or the server loop
    /// fails.
    pub async fn run(&self, port: u16) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!("Pacer server listening on {addr}");

        axum::serve(listener, self.router())
            .await
            .context("server loop failed")?;

        Ok(())
    }
}
