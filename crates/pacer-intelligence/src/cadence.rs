// ABOUTME: Cadence and run-stats estimation from body height, pace, and distance
// ABOUTME: Implements the height-based stride model with gender-specific factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

use pacer_core::constants::units::{
    CM_PER_INCH, METERS_PER_KM, MILE_PACE_TO_KM_PACE, SECONDS_PER_MINUTE,
};
use pacer_core::errors::{AppError, AppResult};
use pacer_core::models::{Gender, MeasurementSystem, PaceUnit, RunProfile, RunStats};

/// Stride-length factor for male runners (fraction of height)
const STRIDE_FACTOR_MALE: f64 = 0.415;

/// Stride-length factor for everyone else (fraction of height)
///
/// Height-proportional stride is a walking-gait approximation applied to
/// running; a simplification, not a physiological model.
const STRIDE_FACTOR_DEFAULT: f64 = 0.413;

/// Compute derived run statistics from a run profile
///
/// Deterministic and free of side effects: identical input yields
/// bit-identical output.
///
/// Formulas:
/// - `stride_m = height_cm x stride_factor / 100`
/// - `pace_min_per_km = pace_min x 0.621371` when the pace is min/mile
/// - `total_duration_min = distance x pace_min_per_km`
/// - `cadence_spm = round((1000 / stride_m) / pace_min_per_km)`
///
/// Distance is interpreted in the unit family of the pace, so distance and
/// pace always share the same linear unit before multiplying.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if:
/// - Height or distance is not positive
/// - The combined pace (minutes + seconds) is zero
/// - The seconds component is 60 or more
///
/// # Example
///
/// ```rust
/// use pacer_core::models::RunProfile;
/// use pacer_intelligence::compute_run_stats;
///
/// let stats = compute_run_stats(&RunProfile::default())?;
/// assert_eq!(stats.cadence_spm, 285);
/// # Ok::<(), pacer_core::errors::AppError>(())
/// ```
pub fn compute_run_stats(profile: &RunProfile) -> AppResult<RunStats> {
    validate(profile)?;

    let stride_length_m = stride_length_m(profile);
    let pace = pace_min_per_km(profile);

    let total_duration_min = profile.distance * pace;

    let steps_per_km = METERS_PER_KM / stride_length_m;
    let cadence = (steps_per_km / pace).round();

    Ok(RunStats {
        stride_length_m,
        // Safe: positive stride and pace keep the rounded cadence well within u32
        cadence_spm: cadence as u32,
        total_duration_min,
    })
}

/// Convert the profile's pace to minutes per kilometer
///
/// Exposed separately so the unit conversion can be tested exactly,
/// independent of the integer-second granularity of profile input.
#[must_use]
pub fn pace_min_per_km(profile: &RunProfile) -> f64 {
    let pace_minutes =
        f64::from(profile.pace_minutes) + f64::from(profile.pace_seconds) / SECONDS_PER_MINUTE;
    match profile.pace_unit {
        PaceUnit::MinPerKm => pace_minutes,
        PaceUnit::MinPerMile => pace_minutes * MILE_PACE_TO_KM_PACE,
    }
}

/// Estimated stride length in meters
fn stride_length_m(profile: &RunProfile) -> f64 {
    let height_cm = match profile.height_unit {
        MeasurementSystem::Metric => profile.height,
        MeasurementSystem::Imperial => profile.height * CM_PER_INCH,
    };

    let stride_factor = match profile.gender {
        Gender::Male => STRIDE_FACTOR_MALE,
        Gender::Female | Gender::Other => STRIDE_FACTOR_DEFAULT,
    };

    height_cm * stride_factor / 100.0
}

/// Validate a profile before any calculation
fn validate(profile: &RunProfile) -> AppResult<()> {
    if profile.height <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Height {} must be positive",
            profile.height
        )));
    }

    if profile.distance <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Distance {} must be positive",
            profile.distance
        )));
    }

    if profile.pace_seconds > 59 {
        return Err(AppError::invalid_input(format!(
            "Pace seconds {} must be in 0-59",
            profile.pace_seconds
        )));
    }

    if profile.pace_minutes == 0 && profile.pace_seconds == 0 {
        return Err(AppError::invalid_input("Pace must be positive".to_owned()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacer_core::models::RunProfile;

    #[test]
    fn test_reference_profile() {
        // 170 cm, gender other, 5:00 min/km, 5 km
        let stats = compute_run_stats(&RunProfile::default()).unwrap();

        assert!((stats.stride_length_m - 0.7021).abs() < 1e-4);
        assert!((stats.total_duration_min - 25.0).abs() < f64::EPSILON);
        assert_eq!(stats.cadence_spm, 285);
    }

    #[test]
    fn test_deterministic() {
        let profile = RunProfile {
            height: 182.5,
            gender: Gender::Male,
            pace_minutes: 4,
            pace_seconds: 45,
            distance: 10.0,
            ..RunProfile::default()
        };

        let first = compute_run_stats(&profile).unwrap();
        let second = compute_run_stats(&profile).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mile_pace_conversion_is_exact() {
        let profile = RunProfile {
            pace_minutes: 8,
            pace_seconds: 0,
            pace_unit: PaceUnit::MinPerMile,
            ..RunProfile::default()
        };

        assert!((pace_min_per_km(&profile) - 8.0 * MILE_PACE_TO_KM_PACE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_non_positive_height() {
        let profile = RunProfile {
            height: 0.0,
            ..RunProfile::default()
        };
        assert!(compute_run_stats(&profile).is_err());
    }

    #[test]
    fn test_rejects_zero_pace() {
        let profile = RunProfile {
            pace_minutes: 0,
            pace_seconds: 0,
            ..RunProfile::default()
        };
        assert!(compute_run_stats(&profile).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_seconds() {
        let profile = RunProfile {
            pace_seconds: 60,
            ..RunProfile::default()
        };
        assert!(compute_run_stats(&profile).is_err());
    }
}
