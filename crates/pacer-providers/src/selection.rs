// ABOUTME: Pure tempo-window filtering and ranking over candidate tracks
// ABOUTME: Query validation plus the filter/sort/truncate core of track selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

use pacer_core::errors::{AppError, AppResult};
use pacer_core::models::{Track, TrackQuery};

/// Validate a track query before any catalog I/O
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the genre is empty, the target tempo
/// is not positive, the tolerance is negative, or the limit is zero.
pub fn validate_query(query: &TrackQuery) -> AppResult<()> {
    if query.genre.trim().is_empty() {
        return Err(AppError::invalid_input("Genre must not be empty"));
    }

    if query.target_tempo <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Target tempo {} must be positive",
            query.target_tempo
        )));
    }

    if query.tolerance_bpm < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Tolerance {} must not be negative",
            query.tolerance_bpm
        )));
    }

    if query.limit == 0 {
        return Err(AppError::invalid_input("Result limit must be positive"));
    }

    Ok(())
}

/// Filter candidates to the tolerance window and rank by tempo closeness
///
/// Tracks without tempo metadata are excluded. The sort is stable, so
/// candidates at equal distance from the target keep their search order.
/// The result is truncated to `limit`.
#[must_use]
pub fn filter_and_rank(
    candidates: Vec<Track>,
    target_tempo: f64,
    tolerance_bpm: f64,
    limit: usize,
) -> Vec<Track> {
    let mut matched: Vec<Track> = candidates
        .into_iter()
        .filter(|track| {
            track
                .tempo_bpm
                .is_some_and(|tempo| (tempo - target_tempo).abs() <= tolerance_bpm)
        })
        .collect();

    matched.sort_by(|a, b| {
        let da = tempo_distance(a, target_tempo);
        let db = tempo_distance(b, target_tempo);
        da.total_cmp(&db)
    });

    matched.truncate(limit);
    matched
}

/// Absolute distance of a track's tempo from the target
///
/// Only called on tracks that passed the filter, so the tempo is present.
fn tempo_distance(track: &Track, target_tempo: f64) -> f64 {
    track
        .tempo_bpm
        .map_or(f64::INFINITY, |tempo| (tempo - target_tempo).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, tempo: Option<f64>) -> Track {
        Track {
            id: id.to_owned(),
            name: format!("Track {id}"),
            artists: vec!["Artist".to_owned()],
            tempo_bpm: tempo,
            uri: format!("spotify:track:{id}"),
            external_url: format!("https://open.spotify.com/track/{id}"),
        }
    }

    #[test]
    fn test_every_result_is_within_tolerance() {
        let candidates = vec![
            track("a", Some(150.0)),
            track("b", Some(171.0)),
            track("c", Some(168.0)),
            track("d", Some(190.0)),
        ];

        let selected = filter_and_rank(candidates, 170.0, 5.0, 10);

        assert_eq!(selected.len(), 2);
        for t in &selected {
            assert!((t.tempo_bpm.unwrap() - 170.0).abs() <= 5.0);
        }
    }

    #[test]
    fn test_ranked_by_closeness_to_target() {
        let candidates = vec![
            track("far", Some(174.0)),
            track("near", Some(169.5)),
            track("mid", Some(167.0)),
        ];

        let selected = filter_and_rank(candidates, 170.0, 5.0, 10);

        let ids: Vec<&str> = selected.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid", "far"]);
    }

    #[test]
    fn test_equal_distance_preserves_search_order() {
        let candidates = vec![
            track("first", Some(172.0)),
            track("second", Some(168.0)),
            track("third", Some(172.0)),
        ];

        let selected = filter_and_rank(candidates, 170.0, 5.0, 10);

        let ids: Vec<&str> = selected.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unknown_tempo_is_excluded() {
        let candidates = vec![track("known", Some(170.0)), track("unknown", None)];

        let selected = filter_and_rank(candidates, 170.0, 5.0, 10);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "known");
    }

    #[test]
    fn test_truncates_to_limit() {
        let candidates = (0..20)
            .map(|i| track(&i.to_string(), Some(170.0 + f64::from(i) * 0.1)))
            .collect();

        let selected = filter_and_rank(candidates, 170.0, 5.0, 5);

        assert_eq!(selected.len(), 5);
    }

    #[test]
    fn test_no_match_returns_empty_not_error() {
        let candidates = vec![track("a", Some(120.0)), track("b", None)];

        let selected = filter_and_rank(candidates, 170.0, 5.0, 10);

        assert!(selected.is_empty());
    }

    #[test]
    fn test_validate_query_rejects_bad_values() {
        let good = TrackQuery {
            genre: "House".to_owned(),
            target_tempo: 170.0,
            tolerance_bpm: 5.0,
            limit: 20,
        };
        assert!(validate_query(&good).is_ok());

        let empty_genre = TrackQuery {
            genre: "  ".to_owned(),
            ..good.clone()
        };
        assert!(validate_query(&empty_genre).is_err());

        let zero_tempo = TrackQuery {
            target_tempo: 0.0,
            ..good.clone()
        };
        assert!(validate_query(&zero_tempo).is_err());

        let negative_tolerance = TrackQuery {
            tolerance_bpm: -1.0,
            ..good.clone()
        };
        assert!(validate_query(&negative_tolerance).is_err());

        let zero_limit = TrackQuery { limit: 0, ..good };
        assert!(validate_query(&zero_limit).is_err());
    }
}
