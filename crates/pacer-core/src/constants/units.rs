// ABOUTME: Unit conversion constants for height, distance, and pace calculations
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Centimeters per inch, for imperial height input
pub const CM_PER_INCH: f64 = 2.54;

/// Kilometers-per-mile pace conversion factor (min/mile -> min/km)
pub const MILE_PACE_TO_KM_PACE: f64 = 0.621_371;
