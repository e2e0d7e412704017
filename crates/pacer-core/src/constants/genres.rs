// ABOUTME: Genre taxonomy served to the frontend's genre picker
// ABOUTME: Main genres with subgenres plus the slug normalization used for stored selections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! Genre taxonomy
//!
//! The catalog's genre space is open-ended, so a genre is always an opaque
//! string at the API boundary. This module only carries the curated picker
//! taxonomy shown in the UI and the normalization rule that turns a display
//! name into a stored slug.

/// A main genre with its selectable subgenres
#[derive(Debug, Clone, Copy)]
pub struct GenreFamily {
    /// Display name of the main genre
    pub name: &'static str,
    /// Selectable subgenres within this family
    pub subgenres: &'static [&'static str],
}

/// Curated genre families offered by the frontend picker
pub const GENRE_FAMILIES: &[GenreFamily] = &[
    GenreFamily {
        name: "Pop",
        subgenres: &[
            "All Pop",
            "2020s Pop",
            "2010s Pop",
            "2000s Pop",
            "90s Pop",
            "80s Pop",
            "70s Pop",
            "Dance Pop",
            "Electropop",
            "Pop Rock",
            "K-pop",
            "J-pop",
            "Latin Pop",
            "Euro Pop",
            "Indie Pop",
            "Art Pop",
            "Synth Pop",
            "Chamber Pop",
        ],
    },
    GenreFamily {
        name: "Rock",
        subgenres: &[
            "All Rock",
            "2020s Rock",
            "2010s Rock",
            "2000s Rock",
            "90s Rock",
            "80s Rock",
            "70s Rock",
            "60s Rock",
            "Hard Rock",
            "Metal",
            "Heavy Metal",
            "Progressive Metal",
            "Nu Metal",
            "Grunge",
            "Punk Rock",
            "Post-Rock",
            "Indie Rock",
            "Alternative Rock",
            "Classic Rock",
            "Southern Rock",
        ],
    },
    GenreFamily {
        name: "Hip-Hop",
        subgenres: &[
            "All Hip-Hop",
            "2020s Hip-Hop",
            "2010s Hip-Hop",
            "2000s Hip-Hop",
            "90s Hip-Hop",
            "80s Hip-Hop",
            "Old School",
            "Golden Age",
            "Boom Bap",
            "Trap",
            "Cloud Rap",
            "Drill",
            "East Coast",
            "West Coast",
            "Southern Hip-Hop",
            "UK Hip-Hop",
            "Jazz Rap",
            "Abstract",
            "Conscious",
            "Experimental",
        ],
    },
    GenreFamily {
        name: "Electronic",
        subgenres: &[
            "All Electronic",
            "House",
            "Deep House",
            "Tech House",
            "Progressive House",
            "Electro House",
            "EDM",
            "Trance",
            "Dubstep",
            "Future Bass",
            "Detroit Techno",
            "Minimal",
            "Industrial",
            "Acid",
            "Downtempo",
            "Chillout",
            "Ambient",
            "IDM",
            "Drum & Bass",
            "Breakbeat",
        ],
    },
    GenreFamily {
        name: "R&B",
        subgenres: &[
            "All R&B",
            "2020s R&B",
            "2010s R&B",
            "2000s R&B",
            "90s R&B",
            "80s R&B",
            "70s R&B",
            "60s R&B",
            "Neo Soul",
            "Contemporary R&B",
            "Classic Soul",
            "Modern Soul",
            "Funk",
            "Gospel",
            "Alternative R&B",
            "Future Soul",
            "Trip Hop",
            "PBR&B",
        ],
    },
];

/// Normalize a display genre to its stored slug
///
/// Lowercases and replaces every space and ampersand with a dash, matching
/// the frontend's stored-selection format ("Drum & Bass" -> "drum---bass").
#[must_use]
pub fn genre_slug(display: &str) -> String {
    display
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '&' { '-' } else { c })
        .collect()
}

/// Find the display subgenre matching a stored slug, if it is in the taxonomy
#[must_use]
pub fn find_by_slug(slug: &str) -> Option<&'static str> {
    let normalized = slug.to_lowercase();
    GENRE_FAMILIES
        .iter()
        .flat_map(|family| family.subgenres.iter())
        .find(|subgenre| genre_slug(subgenre) == normalized)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_slug_replaces_spaces_and_ampersands() {
        assert_eq!(genre_slug("Dance Pop"), "dance-pop");
        assert_eq!(genre_slug("Drum & Bass"), "drum---bass");
        assert_eq!(genre_slug("House"), "house");
    }

    #[test]
    fn test_find_by_slug_round_trips_taxonomy_entries() {
        assert_eq!(find_by_slug("deep-house"), Some("Deep House"));
        assert_eq!(find_by_slug(&genre_slug("Drum & Bass")), Some("Drum & Bass"));
        assert_eq!(find_by_slug("polka"), None);
    }
}
