// ABOUTME: Playlist creation route handlers
// ABOUTME: Thin proxy over the Spotify provider's playlist creation operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! Playlist creation routes
//!
//! Creates a playlist under the caller's catalog account and fills it with
//! the given track URIs in order. Creation is never deduplicated: repeating
//! a request produces a second, distinct playlist.

use crate::routes::catalog_provider;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use pacer_core::constants::catalog::playlist_name;
use pacer_core::errors::AppError;
use pacer_providers::core::MusicProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request body for playlist creation
#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    /// Explicit playlist name; derived from genre and tempo when omitted
    #[serde(default)]
    pub name: Option<String>,
    /// Track URIs in the order they should appear
    pub tracks: Vec<String>,
    /// Genre used for the derived name
    #[serde(default)]
    pub genre: Option<String>,
    /// Target tempo used for the derived name
    #[serde(default)]
    pub target_bpm: Option<u32>,
    /// The caller's Spotify refresh token from the identity provider session
    pub refresh_token: String,
}

/// Response body for playlist creation
#[derive(Debug, Serialize)]
pub struct CreatePlaylistResponse {
    /// Public web URL of the created playlist
    pub playlist_url: String,
}

/// Playlist routes
pub struct PlaylistRoutes;

impl PlaylistRoutes {
    /// Create all playlist routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/playlists", post(Self::handle_create))
            .with_state(resources)
    }

    /// Handle playlist creation
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreatePlaylistRequest>,
    ) -> Result<Response, AppError> {
        let name = Self::resolve_name(&request)?;

        let provider = catalog_provider(&resources, request.refresh_token).await?;
        let playlist = provider.create_playlist(&name, &request.tracks).await?;

        Ok((
            StatusCode::OK,
            Json(CreatePlaylistResponse {
                playlist_url: playlist.external_url,
            }),
        )
            .into_response())
    }

    /// Resolve the playlist name from the request
    ///
    /// An explicit name wins; otherwise the name is derived from the genre
    /// and target tempo.
    fn resolve_name(request: &CreatePlaylistRequest) -> Result<String, AppError> {
        if let Some(name) = &request.name {
            if !name.trim().is_empty() {
                return Ok(name.clone());
            }
        }

        match request.target_bpm {
            Some(bpm) => Ok(playlist_name(request.genre.as_deref().unwrap_or(""), bpm)),
            None => Err(AppError::invalid_input(
                "Either name or target_bpm is required",
            )),
        }
    }
}
