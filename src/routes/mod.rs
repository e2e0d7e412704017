// ABOUTME: Route module organization for Pacer HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! Route module for the Pacer server
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains only route definitions and thin handler functions that delegate
//! to the workspace crates. Handlers return `Result<Response, AppError>`;
//! the error type renders the JSON error body and status itself.

use crate::server::ServerResources;
use pacer_core::errors::AppResult;
use pacer_providers::core::{MusicProvider, OAuth2Credentials};
use pacer_providers::spotify_provider::SpotifyProvider;

/// Genre taxonomy routes
pub mod genres;
/// Playlist creation routes
pub mod playlists;
/// Run statistics calculation routes
pub mod run_stats;
/// Tempo-matched track search routes
pub mod tracks;

pub use genres::GenresRoutes;
pub use playlists::PlaylistRoutes;
pub use run_stats::RunStatsRoutes;
pub use tracks::TrackRoutes;

/// Build a catalog provider for one request
///
/// Combines the server's application credentials with the caller's refresh
/// token and performs the prerequisite token refresh. Tokens live only for
/// the duration of the request; nothing is persisted.
pub(crate) async fn catalog_provider(
    resources: &ServerResources,
    refresh_token: String,
) -> AppResult<SpotifyProvider> {
    let mut provider = SpotifyProvider::new();

    provider
        .set_credentials(OAuth2Credentials {
            client_id: resources.config.spotify.client_id.clone(),
            client_secret: resources.config.spotify.client_secret.clone(),
            access_token: None,
            refresh_token: Some(refresh_token),
            expires_at: None,
        })
        .await?;

    provider.refresh_token_if_needed().await?;

    Ok(provider)
}
