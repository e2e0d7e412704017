// ABOUTME: Test suite for the pure tempo filtering and ranking logic
// ABOUTME: Verifies the tolerance window, ordering, stable ties, and truncation properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pacer_core::models::Track;
use pacer_providers::filter_and_rank;

fn track(id: &str, tempo: Option<f64>) -> Track {
    Track {
        id: id.to_owned(),
        name: format!("Track {id}"),
        artists: vec!["Tester".to_owned()],
        tempo_bpm: tempo,
        uri: format!("spotify:track:{id}"),
        external_url: format!("https://open.spotify.com/track/{id}"),
    }
}

/// A spread of candidates around a 170 BPM target
fn candidate_spread() -> Vec<Track> {
    vec![
        track("a", Some(140.0)),
        track("b", Some(165.0)),
        track("c", Some(170.0)),
        track("d", Some(173.5)),
        track("e", None),
        track("f", Some(176.0)),
        track("g", Some(210.0)),
        track("h", Some(166.5)),
    ]
}

#[test]
fn test_output_is_within_window_and_sorted_by_distance() {
    let selected = filter_and_rank(candidate_spread(), 170.0, 5.0, 50);

    assert!(!selected.is_empty());

    let mut previous_distance = 0.0_f64;
    for t in &selected {
        let distance = (t.tempo_bpm.unwrap() - 170.0).abs();
        assert!(distance <= 5.0, "track {} outside window", t.id);
        assert!(distance >= previous_distance, "ordering violated at {}", t.id);
        previous_distance = distance;
    }
}

#[test]
fn test_exact_window_boundary_is_included() {
    let candidates = vec![track("edge", Some(175.0)), track("outside", Some(175.01))];

    let selected = filter_and_rank(candidates, 170.0, 5.0, 10);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, "edge");
}

#[test]
fn test_ties_keep_search_order() {
    // b and d sit at the same distance on opposite sides of the target
    let candidates = vec![
        track("a", Some(171.0)),
        track("b", Some(168.0)),
        track("c", Some(170.0)),
        track("d", Some(172.0)),
    ];

    let selected = filter_and_rank(candidates, 170.0, 5.0, 10);

    let ids: Vec<&str> = selected.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b", "d"]);
}

#[test]
fn test_truncation_keeps_the_closest_tracks() {
    let selected = filter_and_rank(candidate_spread(), 170.0, 10.0, 2);

    let ids: Vec<&str> = selected.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "d"]);
}

#[test]
fn test_zero_tolerance_keeps_exact_matches_only() {
    let selected = filter_and_rank(candidate_spread(), 170.0, 0.0, 10);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, "c");
}

#[test]
fn test_no_candidates_in_window_is_empty_not_error() {
    let selected = filter_and_rank(candidate_spread(), 95.0, 2.0, 10);
    assert!(selected.is_empty());
}

#[test]
fn test_unknown_tempo_never_matches() {
    let candidates = vec![track("x", None), track("y", None)];
    assert!(filter_and_rank(candidates, 170.0, 1000.0, 10).is_empty());
}
