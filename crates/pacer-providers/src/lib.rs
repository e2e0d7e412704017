// ABOUTME: Music catalog provider implementation for Spotify
// ABOUTME: Core provider trait, shared HTTP client, tempo selection, and playlist creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

#![deny(unsafe_code)]

//! Music catalog provider implementations and core abstractions.
//!
//! This crate provides the unified provider system for integrating with the
//! external music catalog (Spotify Web API): OAuth2 token refresh, track
//! search, tempo metadata lookup, tempo-window selection, and playlist
//! creation.

// Core provider infrastructure
/// Core provider traits and interfaces
pub mod core;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// Pure tempo filtering and ranking
pub mod selection;

// Provider implementations
/// Spotify Web API provider implementation
pub mod spotify_provider;

// Re-export key types for convenience
pub use core::{MusicProvider, OAuth2Credentials, ProviderConfig};
pub use http_client::{initialize_shared_client, shared_client};
pub use selection::{filter_and_rank, validate_query};
pub use spotify_provider::SpotifyProvider;
