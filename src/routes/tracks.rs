// ABOUTME: Track search route handlers for tempo-matched catalog queries
// ABOUTME: Thin proxy over the Spotify provider's select-by-tempo operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! Tempo-matched track search routes
//!
//! Accepts a genre, a target tempo, and the caller's refresh token; returns
//! tracks ranked by tempo closeness. Zero matches yields an empty `data`
//! array with status 200 so the frontend can distinguish "no match" from a
//! failed request.

use crate::routes::catalog_provider;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use pacer_core::errors::AppError;
use pacer_core::models::{Track, TrackQuery};
use pacer_providers::core::MusicProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request body for a tempo-matched track search
#[derive(Debug, Deserialize)]
pub struct TrackSearchRequest {
    /// Genre search term (opaque string)
    pub genre: String,
    /// Target tempo in beats per minute
    pub target_tempo: f64,
    /// Tolerance window; server default applies when omitted
    #[serde(default)]
    pub tolerance_bpm: Option<f64>,
    /// Result limit; server default applies when omitted
    #[serde(default)]
    pub limit: Option<usize>,
    /// The caller's Spotify refresh token from the identity provider session
    pub refresh_token: String,
}

/// Response body for a tempo-matched track search
#[derive(Debug, Serialize)]
pub struct TrackSearchResponse {
    /// Matching tracks, ranked by tempo closeness
    pub data: Vec<Track>,
}

/// Track search routes
pub struct TrackRoutes;

impl TrackRoutes {
    /// Create all track search routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/tracks/search", post(Self::handle_search))
            .with_state(resources)
    }

    /// Handle tempo-matched track search
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<TrackSearchRequest>,
    ) -> Result<Response, AppError> {
        let query = TrackQuery {
            genre: request.genre,
            target_tempo: request.target_tempo,
            tolerance_bpm: request
                .tolerance_bpm
                .unwrap_or(resources.config.search.default_tolerance_bpm),
            limit: request.limit.unwrap_or(resources.config.search.default_limit),
        };

        let provider = catalog_provider(&resources, request.refresh_token).await?;
        let data = provider.select_tracks_by_tempo(&query).await?;

        Ok((StatusCode::OK, Json(TrackSearchResponse { data })).into_response())
    }
}
