// ABOUTME: Run statistics route handlers for cadence and duration calculation
// ABOUTME: Pure calculation endpoint; no authentication and no external calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! Run statistics routes
//!
//! Computes stride length, cadence (the target music tempo), and total run
//! duration from a submitted run profile. The profile is an immutable
//! snapshot of the user's selections; stats are recomputed on every call and
//! never cached.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use pacer_core::errors::AppError;
use pacer_core::models::RunProfile;
use pacer_intelligence::compute_run_stats;

/// Run statistics routes
pub struct RunStatsRoutes;

impl RunStatsRoutes {
    /// Create all run statistics routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new().route("/api/run-stats", post(Self::handle_compute))
    }

    /// Handle run stats calculation
    async fn handle_compute(Json(profile): Json<RunProfile>) -> Result<Response, AppError> {
        let stats = compute_run_stats(&profile)?;
        Ok((StatusCode::OK, Json(stats)).into_response())
    }
}
