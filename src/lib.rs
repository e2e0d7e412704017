// ABOUTME: Main library entry point for the Pacer platform
// ABOUTME: HTTP surface over the cadence calculation and music catalog crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

#![deny(unsafe_code)]

//! # Pacer
//!
//! Pacer computes a target music tempo from a user's running parameters and
//! builds a matching Spotify playlist. This crate is the HTTP surface: thin
//! axum routes that delegate to the workspace crates.
//!
//! ## Architecture
//!
//! - **pacer-intelligence**: pure run-stats calculation (stride, cadence, duration)
//! - **pacer-providers**: Spotify Web API provider (token refresh, search, playlists)
//! - **pacer-core**: shared models, errors, and constants
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pacer::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("Pacer configured with port: HTTP={}", config.http_port);
//!
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;
/// Logging configuration and structured logging setup
pub mod logging;
/// HTTP route handlers organized by domain
pub mod routes;
/// Server assembly and lifecycle
pub mod server;

// Re-export foundation crates under the service namespace
pub use pacer_core::{constants, errors, models};

pub use server::{PacerServer, ServerResources};
