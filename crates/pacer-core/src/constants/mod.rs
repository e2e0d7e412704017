// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Catalog limits, unit conversions, playlist naming, and the genre taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! Constants module
//!
//! This module organizes application constants by domain. Catalog limits are
//! dictated by the external music service's documented per-call caps; unit
//! conversions back the cadence calculator; the genre taxonomy mirrors what
//! the web frontend offers.

/// Music catalog request limits and playlist naming
pub mod catalog;
/// Genre taxonomy served to the frontend
pub mod genres;
/// Unit conversion constants
pub mod units;

pub use catalog::*;
pub use units::*;
