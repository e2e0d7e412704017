// ABOUTME: Configuration module for deployment-specific settings
// ABOUTME: Environment-variable driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! Configuration module
//!
//! All runtime configuration comes from environment variables; there is no
//! configuration file. `ServerConfig::from_env()` is the single entry point.

/// Environment-based server configuration
pub mod environment;

pub use environment::{HttpClientConfig, SearchConfig, ServerConfig, SpotifyAppConfig};
