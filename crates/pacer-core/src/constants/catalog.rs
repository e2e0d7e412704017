// ABOUTME: Music catalog request limits and playlist naming conventions
// ABOUTME: Per-call caps come from the external service's documented contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

/// Maximum number of tracks a single catalog search call may return
pub const SEARCH_PAGE_LIMIT: usize = 50;

/// Maximum number of track ids per audio-features lookup call
pub const AUDIO_FEATURES_BATCH_LIMIT: usize = 100;

/// Maximum number of track URIs per playlist-addition call
pub const PLAYLIST_ADD_BATCH_LIMIT: usize = 100;

/// Description attached to every playlist this service creates
pub const PLAYLIST_DESCRIPTION: &str = "Created by Pacer App";

/// Format the display name for a generated playlist
///
/// An empty genre falls back to `Mix`, matching the frontend's convention.
#[must_use]
pub fn playlist_name(genre: &str, bpm: u32) -> String {
    let genre = if genre.is_empty() { "Mix" } else { genre };
    format!("Pacer Playlist - {genre} @ {bpm} BPM")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_name_formats_genre_and_bpm() {
        assert_eq!(playlist_name("House", 170), "Pacer Playlist - House @ 170 BPM");
    }

    #[test]
    fn test_playlist_name_empty_genre_falls_back_to_mix() {
        assert_eq!(playlist_name("", 150), "Pacer Playlist - Mix @ 150 BPM");
    }
}
