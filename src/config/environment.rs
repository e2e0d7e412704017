// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! Environment-based configuration management for production deployment

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Default HTTP server port
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default tempo tolerance window (beats per minute)
const DEFAULT_TOLERANCE_BPM: f64 = 5.0;

/// Default number of tracks returned by a search
const DEFAULT_TRACK_LIMIT: usize = 20;

/// Spotify application credentials
///
/// These identify the Pacer application itself; per-user refresh tokens come
/// in with each request from the identity provider's session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyAppConfig {
    /// OAuth client ID registered with Spotify
    pub client_id: String,
    /// OAuth client secret registered with Spotify
    pub client_secret: String,
}

/// Outbound HTTP client timeouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Defaults applied when a track search omits optional parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tolerance window around the target tempo (beats per minute)
    pub default_tolerance_bpm: f64,
    /// Maximum number of tracks returned
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_tolerance_bpm: DEFAULT_TOLERANCE_BPM,
            default_limit: DEFAULT_TRACK_LIMIT,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server port
    pub http_port: u16,
    /// Spotify application credentials
    pub spotify: SpotifyAppConfig,
    /// Outbound HTTP client timeouts
    pub http_client: HttpClientConfig,
    /// Track search defaults
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when the Spotify application credentials are missing;
    /// every other setting falls back to a default.
    pub fn from_env() -> Result<Self> {
        let http_port = parse_or_default("HTTP_PORT", DEFAULT_HTTP_PORT);

        let spotify = SpotifyAppConfig {
            client_id: env::var("SPOTIFY_CLIENT_ID")
                .context("SPOTIFY_CLIENT_ID environment variable is required")?,
            client_secret: env::var("SPOTIFY_CLIENT_SECRET")
                .context("SPOTIFY_CLIENT_SECRET environment variable is required")?,
        };

        let http_client = HttpClientConfig {
            timeout_secs: parse_or_default(
                "HTTP_TIMEOUT_SECS",
                HttpClientConfig::default().timeout_secs,
            ),
            connect_timeout_secs: parse_or_default(
                "HTTP_CONNECT_TIMEOUT_SECS",
                HttpClientConfig::default().connect_timeout_secs,
            ),
        };

        let search = SearchConfig {
            default_tolerance_bpm: parse_or_default("PACER_TOLERANCE_BPM", DEFAULT_TOLERANCE_BPM),
            default_limit: parse_or_default("PACER_TRACK_LIMIT", DEFAULT_TRACK_LIMIT),
        };

        Ok(Self {
            http_port,
            spotify,
            http_client,
            search,
        })
    }

    /// One-line configuration summary for startup logging
    ///
    /// Never includes the client secret.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} spotify_client_id={} timeout={}s/{}s tolerance=±{}bpm limit={}",
            self.http_port,
            self.spotify.client_id,
            self.http_client.timeout_secs,
            self.http_client.connect_timeout_secs,
            self.search.default_tolerance_bpm,
            self.search.default_limit,
        )
    }
}

/// Parse an environment variable, falling back to a default on absence or
/// parse failure (with a warning, so typos do not pass silently)
fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring unparsable {name}={raw}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}
