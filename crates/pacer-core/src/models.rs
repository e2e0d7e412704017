// ABOUTME: Core domain models for run profiles, derived run stats, and catalog data
// ABOUTME: RunProfile, RunStats, Track, TrackQuery, and Playlist definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

use serde::{Deserialize, Serialize};

/// Measurement system for body height input
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Height given in centimeters
    Metric,
    /// Height given in inches
    Imperial,
}

/// Gender selection used for the stride-length factor
///
/// Only feeds the stride estimate; `Other` shares the female factor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male stride factor (0.415)
    Male,
    /// Female stride factor (0.413)
    Female,
    /// Unspecified; uses the female stride factor
    Other,
}

/// Unit of the target pace
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaceUnit {
    /// Minutes per kilometer
    #[serde(rename = "min/km")]
    MinPerKm,
    /// Minutes per mile
    #[serde(rename = "min/mile")]
    MinPerMile,
}

/// Immutable snapshot of the user's running parameters
///
/// Created from user selections at the UI boundary and passed into the
/// cadence calculator; never mutated inside the calculation engine.
///
/// # Examples
///
/// ```rust
/// use pacer_core::models::RunProfile;
///
/// let profile = RunProfile::default();
/// assert_eq!(profile.pace_minutes, 5);
/// assert!((profile.distance - 5.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunProfile {
    /// Body height in the unit given by `height_unit`
    pub height: f64,
    /// Measurement system of `height`
    pub height_unit: MeasurementSystem,
    /// Gender selection for the stride factor
    pub gender: Gender,
    /// Whole minutes of the target pace
    pub pace_minutes: u32,
    /// Seconds component of the target pace (0-59)
    pub pace_seconds: u32,
    /// Unit of the target pace
    pub pace_unit: PaceUnit,
    /// Run distance, interpreted in the unit family of `pace_unit`
    pub distance: f64,
}

impl Default for RunProfile {
    fn default() -> Self {
        // Mirrors the initial form state: 170 cm, 5:00 min/km over 5 km
        Self {
            height: 170.0,
            height_unit: MeasurementSystem::Metric,
            gender: Gender::Other,
            pace_minutes: 5,
            pace_seconds: 0,
            pace_unit: PaceUnit::MinPerKm,
            distance: 5.0,
        }
    }
}

/// Derived running statistics
///
/// Recomputed on demand from a [`RunProfile`]; never stored or cached.
/// The cadence doubles as the target music tempo in beats per minute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RunStats {
    /// Estimated distance covered per step (meters)
    pub stride_length_m: f64,
    /// Steps per minute, rounded to the nearest integer
    pub cadence_spm: u32,
    /// Total run duration (minutes)
    pub total_duration_min: f64,
}

/// The authenticated catalog account
///
/// Minimal identity snapshot from the catalog's `/me` endpoint; playlists
/// are created under this account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listener {
    /// Catalog account identifier
    pub id: String,
    /// Public display name, when the account has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// A track from the music catalog
///
/// Read-only within this system; sourced from the external catalog's
/// search results and enriched with tempo metadata when available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Catalog identifier
    pub id: String,
    /// Track title
    pub name: String,
    /// Artist names in catalog order
    pub artists: Vec<String>,
    /// Tempo in beats per minute, when the catalog knows it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo_bpm: Option<f64>,
    /// Catalog URI (`spotify:track:...`), used for playlist insertion
    pub uri: String,
    /// Public web URL for the track
    pub external_url: String,
}

/// Tempo metadata for a single track
///
/// One entry per track the catalog has an audio analysis for; ids without
/// analysis simply produce no entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    /// Catalog identifier of the analyzed track
    pub id: String,
    /// Tempo in beats per minute
    pub tempo_bpm: f64,
}

/// Parameters for a tempo-matched track selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackQuery {
    /// Genre search term; an opaque catalog-provided string, not a closed enum
    pub genre: String,
    /// Target tempo in beats per minute
    pub target_tempo: f64,
    /// Acceptable deviation from the target tempo (beats per minute)
    pub tolerance_bpm: f64,
    /// Maximum number of tracks to return
    pub limit: usize,
}

/// A created playlist
///
/// Transient response value; durability lives entirely in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist display name
    pub name: String,
    /// Track URIs in insertion order
    pub track_uris: Vec<String>,
    /// Public web URL, populated after creation
    pub external_url: String,
}
