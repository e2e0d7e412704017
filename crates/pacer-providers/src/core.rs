// ABOUTME: Core provider traits and interfaces for unified music catalog access
// ABOUTME: Defines the foundational abstractions for catalog providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! # Provider Abstraction
//!
//! The `MusicProvider` trait is the unified interface for tempo-matched
//! track selection and playlist creation against an external music catalog.
//!
//! Providers receive credentials via `set_credentials()` and use them
//! internally for API authentication. Token refresh is the provider's
//! responsibility (`refresh_token_if_needed()`), invoked as a prerequisite
//! before catalog operations; the credential itself is injected per request
//! by the caller and never persisted here.
//!
//! Internally providers use custom response DTOs and map them to the shared
//! domain models (`Track`, `Listener`, `Playlist`), so the rest of the
//! application never sees a provider-specific wire format.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pacer_core::errors::AppResult;
use pacer_core::models::{AudioFeatures, Listener, Playlist, Track, TrackQuery};
use serde::{Deserialize, Serialize};

/// Authentication credentials for `OAuth2` catalog providers
///
/// The identity provider hands the application a refresh token at login;
/// the access token and its expiry are filled in (and renewed) by
/// `refresh_token_if_needed()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Credentials {
    /// OAuth client ID registered with the catalog
    pub client_id: String,
    /// OAuth client secret registered with the catalog
    pub client_secret: String,
    /// Current access token
    pub access_token: Option<String>,
    /// Refresh token for obtaining new access tokens
    pub refresh_token: Option<String>,
    /// When the access token expires
    pub expires_at: Option<DateTime<Utc>>,
}

/// Static configuration for a catalog provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider identifier ("spotify")
    pub name: String,
    /// Token refresh endpoint
    pub token_url: String,
    /// Base URL for catalog API calls
    pub api_base_url: String,
    /// OAuth scopes the identity provider requests at login
    pub default_scopes: Vec<String>,
}

/// Unified interface for music catalog providers
#[async_trait]
pub trait MusicProvider: Send + Sync {
    /// Provider identifier
    fn name(&self) -> &'static str;

    /// Static provider configuration
    fn config(&self) -> &ProviderConfig;

    /// Inject credentials for subsequent catalog calls
    async fn set_credentials(&mut self, credentials: OAuth2Credentials) -> AppResult<()>;

    /// Whether an unexpired access token is available
    async fn is_authenticated(&self) -> bool;

    /// Refresh the access token when it is missing or about to expire
    ///
    /// # Errors
    ///
    /// Returns an auth-coded error when no refresh token is available or the
    /// token endpoint rejects the request; catalog errors never come from
    /// this method.
    async fn refresh_token_if_needed(&mut self) -> AppResult<()>;

    /// Resolve the authenticated catalog account
    async fn get_listener(&self) -> AppResult<Listener>;

    /// Search the catalog for tracks matching a genre
    ///
    /// Returns at most `limit` candidates in catalog ranking order, capped
    /// at the service's single-page maximum. Tempo metadata is not included;
    /// fetch it separately with `get_audio_features`.
    async fn search_tracks(&self, genre: &str, limit: usize) -> AppResult<Vec<Track>>;

    /// Fetch tempo metadata for the given track ids
    ///
    /// Issues as many batched calls as the catalog's per-call id cap
    /// requires. Ids the catalog has no analysis for are absent from the
    /// result.
    async fn get_audio_features(&self, ids: &[String]) -> AppResult<Vec<AudioFeatures>>;

    /// Select tracks whose tempo falls within the query's tolerance window,
    /// ranked by closeness to the target tempo
    ///
    /// Composes `search_tracks` and `get_audio_features`, then filters and
    /// ranks. Zero matches is a valid outcome and returns an empty vector.
    async fn select_tracks_by_tempo(&self, query: &TrackQuery) -> AppResult<Vec<Track>>;

    /// Create a playlist with the given name and tracks, in input order
    async fn create_playlist(&self, name: &str, track_uris: &[String]) -> AppResult<Playlist>;
}
