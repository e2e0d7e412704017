// ABOUTME: Run-stats calculation engine for the Pacer platform
// ABOUTME: Pure, deterministic stride, cadence, and duration estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

#![deny(unsafe_code)]

//! # Pacer Intelligence
//!
//! Deterministic running calculations: stride length from body height,
//! cadence (steps per minute) from stride and pace, and total run duration.
//! Everything in this crate is pure and synchronous; no I/O, no shared state.

/// Cadence and run-stats estimation
pub mod cadence;

pub use cadence::{compute_run_stats, pace_min_per_km};
