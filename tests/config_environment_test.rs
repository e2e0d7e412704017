// ABOUTME: Test suite for environment-based server configuration
// ABOUTME: Verifies required variables, defaults, overrides, and the startup summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pacer::config::environment::ServerConfig;
use serial_test::serial;
use std::env;

const MANAGED_VARS: &[&str] = &[
    "HTTP_PORT",
    "SPOTIFY_CLIENT_ID",
    "SPOTIFY_CLIENT_SECRET",
    "HTTP_TIMEOUT_SECS",
    "HTTP_CONNECT_TIMEOUT_SECS",
    "PACER_TOLERANCE_BPM",
    "PACER_TRACK_LIMIT",
];

fn clear_env() {
    for var in MANAGED_VARS {
        env::remove_var(var);
    }
}

fn set_required_credentials() {
    env::set_var("SPOTIFY_CLIENT_ID", "test_client_id");
    env::set_var("SPOTIFY_CLIENT_SECRET", "test_client_secret");
}

#[test]
#[serial]
fn test_missing_spotify_credentials_fail_fast() {
    clear_env();

    let result = ServerConfig::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("SPOTIFY_CLIENT_ID"));
}

#[test]
#[serial]
fn test_defaults_apply_when_only_credentials_are_set() {
    clear_env();
    set_required_credentials();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.http_client.timeout_secs, 30);
    assert_eq!(config.http_client.connect_timeout_secs, 10);
    assert!((config.search.default_tolerance_bpm - 5.0).abs() < f64::EPSILON);
    assert_eq!(config.search.default_limit, 20);
}

#[test]
#[serial]
fn test_overrides_are_honored() {
    clear_env();
    set_required_credentials();
    env::set_var("HTTP_PORT", "9999");
    env::set_var("HTTP_TIMEOUT_SECS", "5");
    env::set_var("PACER_TOLERANCE_BPM", "2.5");
    env::set_var("PACER_TRACK_LIMIT", "10");

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 9999);
    assert_eq!(config.http_client.timeout_secs, 5);
    assert!((config.search.default_tolerance_bpm - 2.5).abs() < f64::EPSILON);
    assert_eq!(config.search.default_limit, 10);

    clear_env();
}

#[test]
#[serial]
fn test_unparsable_values_fall_back_to_defaults() {
    clear_env();
    set_required_credentials();
    env::set_var("HTTP_PORT", "not-a-port");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8080);

    clear_env();
}

#[test]
#[serial]
fn test_summary_never_leaks_the_client_secret() {
    clear_env();
    set_required_credentials();

    let config = ServerConfig::from_env().unwrap();
    let summary = config.summary();

    assert!(summary.contains("test_client_id"));
    assert!(!summary.contains("test_client_secret"));

    clear_env();
}
