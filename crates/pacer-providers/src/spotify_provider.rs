// ABOUTME: Spotify Web API provider implementation using the unified provider architecture
// ABOUTME: Handles OAuth2 token refresh, search, tempo metadata, and playlist creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

use crate::core::{MusicProvider, OAuth2Credentials, ProviderConfig};
use crate::http_client::shared_client;
use crate::selection::{filter_and_rank, validate_query};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine};
use chrono::Utc;
use pacer_core::constants::catalog::{
    AUDIO_FEATURES_BATCH_LIMIT, PLAYLIST_ADD_BATCH_LIMIT, PLAYLIST_DESCRIPTION, SEARCH_PAGE_LIMIT,
};
use pacer_core::errors::{AppError, AppResult, ErrorCode};
use pacer_core::models::{AudioFeatures, Listener, Playlist, Track, TrackQuery};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Provider identifier
const PROVIDER_NAME: &str = "spotify";

/// Refresh the access token this close to its expiry
const TOKEN_REFRESH_WINDOW_MINUTES: i64 = 5;

/// Track URIs must carry this prefix to be insertable into a playlist
const TRACK_URI_PREFIX: &str = "spotify:track:";

/// Spotify API response for the authenticated user
#[derive(Debug, Deserialize)]
struct SpotifyUserResponse {
    id: String,
    display_name: Option<String>,
}

/// Spotify API response for a track search
#[derive(Debug, Deserialize)]
struct SpotifySearchResponse {
    tracks: SpotifyTrackPage,
}

#[derive(Debug, Deserialize)]
struct SpotifyTrackPage {
    items: Vec<SpotifyTrackResponse>,
}

/// Spotify API representation of a track
#[derive(Debug, Deserialize)]
struct SpotifyTrackResponse {
    id: String,
    name: String,
    artists: Vec<SpotifyArtistResponse>,
    uri: String,
    external_urls: SpotifyExternalUrls,
}

#[derive(Debug, Deserialize)]
struct SpotifyArtistResponse {
    name: String,
}

#[derive(Debug, Deserialize, Default)]
struct SpotifyExternalUrls {
    #[serde(default)]
    spotify: Option<String>,
}

/// Spotify API response for an audio-features batch lookup
///
/// Entries are null for ids the catalog has no analysis for, so each slot
/// is optional.
#[derive(Debug, Deserialize)]
struct SpotifyAudioFeaturesResponse {
    audio_features: Vec<Option<SpotifyAudioFeature>>,
}

#[derive(Debug, Deserialize)]
struct SpotifyAudioFeature {
    id: String,
    tempo: f64,
}

/// Spotify API response for playlist creation
#[derive(Debug, Deserialize)]
struct SpotifyPlaylistResponse {
    id: String,
    external_urls: SpotifyExternalUrls,
}

/// Error body shape returned by the catalog on non-2xx responses
#[derive(Debug, Deserialize)]
struct SpotifyErrorResponse {
    error: SpotifyErrorDetails,
}

#[derive(Debug, Deserialize)]
struct SpotifyErrorDetails {
    message: String,
}

/// Spotify Web API provider
pub struct SpotifyProvider {
    config: ProviderConfig,
    credentials: Option<OAuth2Credentials>,
}

impl SpotifyProvider {
    /// Create a new Spotify provider with default configuration
    #[must_use]
    pub fn new() -> Self {
        let config = ProviderConfig {
            name: PROVIDER_NAME.to_owned(),
            token_url: "https://accounts.spotify.com/api/token".to_owned(),
            api_base_url: "https://api.spotify.com/v1".to_owned(),
            default_scopes: vec![
                "playlist-modify-public".to_owned(),
                "user-read-private".to_owned(),
                "user-read-email".to_owned(),
            ],
        };

        Self {
            config,
            credentials: None,
        }
    }

    /// Create provider with custom configuration
    #[must_use]
    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            config,
            credentials: None,
        }
    }

    /// Current access token, or an auth error when none is available
    fn access_token(&self) -> AppResult<&str> {
        let credentials = self.credentials.as_ref().ok_or_else(AppError::auth_required)?;

        credentials
            .access_token
            .as_deref()
            .ok_or_else(AppError::auth_required)
    }

    /// Translate a non-2xx catalog response into an `AppError`
    ///
    /// 401/403 become auth failures so the caller can prompt
    /// re-authentication; everything else keeps the upstream status.
    async fn catalog_error(response: reqwest::Response) -> AppError {
        let status = response.status().as_u16();
        let raw_body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<SpotifyErrorResponse>(&raw_body)
            .map_or(raw_body, |parsed| parsed.error.message);

        if status == 401 || status == 403 {
            AppError::external_auth_failed(format!(
                "catalog rejected credentials (status {status}): {message}"
            ))
        } else {
            AppError::external_service(status, message)
        }
    }

    /// Wrap a transport-level failure (no HTTP status was received)
    fn transport_error(context: &str, source: reqwest::Error) -> AppError {
        AppError::new(ErrorCode::ExternalServiceError, format!("{context}: {source}"))
            .with_source(source)
    }

    /// Make an authenticated GET request against the catalog API
    async fn api_request<T>(&self, endpoint: &str, query: &[(&str, String)]) -> AppResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let access_token = self.access_token()?;
        let url = format!(
            "{}/{}",
            self.config.api_base_url,
            endpoint.trim_start_matches('/')
        );

        let response = shared_client()
            .get(&url)
            .query(query)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| Self::transport_error("catalog request failed", e))?;

        if !response.status().is_success() {
            return Err(Self::catalog_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| Self::transport_error("failed to parse catalog response", e))
    }

    /// Make an authenticated POST request and parse the JSON response
    async fn api_post<T>(&self, endpoint: &str, body: &serde_json::Value) -> AppResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self.api_post_raw(endpoint, body).await?;

        response
            .json()
            .await
            .map_err(|e| Self::transport_error("failed to parse catalog response", e))
    }

    /// Make an authenticated POST request, ignoring the response body
    ///
    /// Used for calls whose success case is 201/204 with no useful payload.
    async fn api_post_no_content(&self, endpoint: &str, body: &serde_json::Value) -> AppResult<()> {
        self.api_post_raw(endpoint, body).await.map(|_| ())
    }

    async fn api_post_raw(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> AppResult<reqwest::Response> {
        let access_token = self.access_token()?;
        let url = format!(
            "{}/{}",
            self.config.api_base_url,
            endpoint.trim_start_matches('/')
        );

        let response = shared_client()
            .post(&url)
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await
            .map_err(|e| Self::transport_error("catalog request failed", e))?;

        if !response.status().is_success() {
            return Err(Self::catalog_error(response).await);
        }

        Ok(response)
    }

    /// Map a catalog track DTO to the shared domain model
    fn parse_track(track: SpotifyTrackResponse, tempo_bpm: Option<f64>) -> Track {
        Track {
            id: track.id,
            name: track.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
            tempo_bpm,
            uri: track.uri,
            external_url: track.external_urls.spotify.unwrap_or_default(),
        }
    }
}

impl Default for SpotifyProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MusicProvider for SpotifyProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn set_credentials(&mut self, credentials: OAuth2Credentials) -> AppResult<()> {
        debug!("Setting Spotify credentials");
        self.credentials = Some(credentials);
        Ok(())
    }

    async fn is_authenticated(&self) -> bool {
        if let Some(creds) = &self.credentials {
            if creds.access_token.is_some() {
                if let Some(expires_at) = creds.expires_at {
                    return Utc::now() < expires_at;
                }
                return true;
            }
        }
        false
    }

    async fn refresh_token_if_needed(&mut self) -> AppResult<()> {
        let needs_refresh = match &self.credentials {
            Some(creds) => {
                creds.access_token.is_none()
                    || creds.expires_at.is_some_and(|expires_at| {
                        Utc::now() + chrono::Duration::minutes(TOKEN_REFRESH_WINDOW_MINUTES)
                            > expires_at
                    })
            }
            None => return Err(AppError::auth_required()),
        };

        if !needs_refresh {
            return Ok(());
        }

        // Work on a copy; a failed refresh must not disturb the stored state
        let credentials = self
            .credentials
            .clone()
            .ok_or_else(AppError::auth_required)?;

        let Some(refresh_token) = credentials.refresh_token.clone() else {
            return Err(AppError::auth_invalid("No refresh token available"));
        };

        info!("Refreshing Spotify access token");

        // Spotify requires client credentials as HTTP Basic auth
        let basic = general_purpose::STANDARD.encode(format!(
            "{}:{}",
            credentials.client_id, credentials.client_secret
        ));

        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token.as_str()),
        ];

        let response = shared_client()
            .post(&self.config.token_url)
            .header("Authorization", format!("Basic {basic}"))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::external_auth_failed(format!("token refresh request failed: {e}"))
                    .with_source(e)
            })?;

        if !response.status().is_success() {
            return Err(AppError::external_auth_failed(format!(
                "token refresh failed with status {}",
                response.status()
            )));
        }

        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
            expires_in: i64,
            refresh_token: Option<String>,
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            AppError::external_auth_failed(format!("failed to parse token refresh response: {e}"))
                .with_source(e)
        })?;

        self.credentials = Some(OAuth2Credentials {
            client_id: credentials.client_id,
            client_secret: credentials.client_secret,
            access_token: Some(token_response.access_token),
            // The token endpoint may rotate the refresh token; keep the old
            // one when it does not
            refresh_token: token_response.refresh_token.or(Some(refresh_token)),
            expires_at: Some(Utc::now() + chrono::Duration::seconds(token_response.expires_in)),
        });

        Ok(())
    }

    async fn get_listener(&self) -> AppResult<Listener> {
        let user: SpotifyUserResponse = self.api_request("me", &[]).await?;

        Ok(Listener {
            id: user.id,
            display_name: user.display_name,
        })
    }

    async fn search_tracks(&self, genre: &str, limit: usize) -> AppResult<Vec<Track>> {
        let page_limit = SEARCH_PAGE_LIMIT.min(limit);
        let search_query = format!("genre:\"{genre}\"");

        let search: SpotifySearchResponse = self
            .api_request(
                "search",
                &[
                    ("q", search_query),
                    ("type", "track".to_owned()),
                    ("limit", page_limit.to_string()),
                ],
            )
            .await?;

        Ok(search
            .tracks
            .items
            .into_iter()
            .map(|item| Self::parse_track(item, None))
            .collect())
    }

    async fn get_audio_features(&self, ids: &[String]) -> AppResult<Vec<AudioFeatures>> {
        let mut features = Vec::with_capacity(ids.len());

        for batch in ids.chunks(AUDIO_FEATURES_BATCH_LIMIT) {
            let joined = batch.join(",");
            let page: SpotifyAudioFeaturesResponse = self
                .api_request("audio-features", &[("ids", joined)])
                .await?;

            // Null slots mark ids the catalog has no analysis for
            features.extend(page.audio_features.into_iter().flatten().map(|f| {
                AudioFeatures {
                    id: f.id,
                    tempo_bpm: f.tempo,
                }
            }));
        }

        Ok(features)
    }

    async fn select_tracks_by_tempo(&self, query: &TrackQuery) -> AppResult<Vec<Track>> {
        validate_query(query)?;

        // Over-fetch so the tempo filter has candidates to discard
        let candidates = self
            .search_tracks(&query.genre, query.limit.saturating_mul(2))
            .await?;

        if candidates.is_empty() {
            info!("Catalog search returned no candidates for genre {}", query.genre);
            return Ok(Vec::new());
        }

        let ids: Vec<String> = candidates.iter().map(|t| t.id.clone()).collect();
        let tempos: HashMap<String, f64> = self
            .get_audio_features(&ids)
            .await?
            .into_iter()
            .map(|f| (f.id, f.tempo_bpm))
            .collect();

        let candidates: Vec<Track> = candidates
            .into_iter()
            .map(|mut track| {
                track.tempo_bpm = tempos.get(&track.id).copied();
                track
            })
            .collect();

        let selected = filter_and_rank(
            candidates,
            query.target_tempo,
            query.tolerance_bpm,
            query.limit,
        );

        info!(
            "Selected {} of {} candidates within ±{} BPM of {}",
            selected.len(),
            ids.len(),
            query.tolerance_bpm,
            query.target_tempo
        );

        Ok(selected)
    }

    async fn create_playlist(&self, name: &str, track_uris: &[String]) -> AppResult<Playlist> {
        if name.trim().is_empty() {
            return Err(AppError::invalid_input("Playlist name must not be empty"));
        }

        if track_uris.is_empty() {
            return Err(AppError::invalid_input(
                "Playlist must contain at least one track",
            ));
        }

        if let Some(bad) = track_uris.iter().find(|uri| !uri.starts_with(TRACK_URI_PREFIX)) {
            return Err(AppError::invalid_input(format!(
                "Not a track URI: {bad}"
            )));
        }

        let listener = self.get_listener().await?;

        let created: SpotifyPlaylistResponse = self
            .api_post(
                &format!("users/{}/playlists", listener.id),
                &serde_json::json!({
                    "name": name,
                    "description": PLAYLIST_DESCRIPTION,
                    "public": true,
                }),
            )
            .await?;

        let external_url = created.external_urls.spotify.unwrap_or_default();

        // Sequential batches against the same playlist preserve input order
        for batch in track_uris.chunks(PLAYLIST_ADD_BATCH_LIMIT) {
            self.api_post_no_content(
                &format!("playlists/{}/tracks", created.id),
                &serde_json::json!({ "uris": batch }),
            )
            .await?;
        }

        info!(
            "Created playlist '{}' with {} tracks",
            name,
            track_uris.len()
        );

        Ok(Playlist {
            name: name.to_owned(),
            track_uris: track_uris.to_vec(),
            external_url,
        })
    }
}
