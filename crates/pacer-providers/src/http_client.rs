// ABOUTME: Process-wide HTTP client for catalog and token-endpoint calls
// ABOUTME: Built once from configured timeouts so every outbound request has a deadline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! Outbound HTTP client.
//!
//! Pacer talks to exactly one external service per process, so a single
//! pooled client is shared by the catalog API and the token endpoint. The
//! client is constructed once with explicit request and connect timeouts;
//! no outbound call can outlive those deadlines. Selection and playlist
//! operations issue several sequential calls, which is why the inbound
//! request timeout in the server layer is a multiple of these values.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Request timeout used when the server never configured the client
const FALLBACK_TIMEOUT_SECS: u64 = 30;

/// Connect timeout used when the server never configured the client
const FALLBACK_CONNECT_TIMEOUT_SECS: u64 = 10;

static CATALOG_CLIENT: OnceLock<Client> = OnceLock::new();

/// Build the shared HTTP client with the given timeouts
///
/// Call once at server startup, before the first provider operation. A
/// second call is a no-op; the first configuration wins. If never called,
/// `shared_client()` falls back to 30s request / 10s connect timeouts.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CATALOG_CLIENT.set(build_client(timeout_secs, connect_timeout_secs));
}

/// The shared HTTP client for catalog and token-endpoint calls
pub fn shared_client() -> &'static Client {
    CATALOG_CLIENT
        .get_or_init(|| build_client(FALLBACK_TIMEOUT_SECS, FALLBACK_CONNECT_TIMEOUT_SECS))
}

fn build_client(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| Client::new())
}
