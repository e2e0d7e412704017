// ABOUTME: Genre taxonomy route handlers for the frontend's genre picker
// ABOUTME: Serves the curated genre families with display names and stored slugs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer

//! Genre taxonomy routes
//!
//! The catalog's genre space is open-ended; this endpoint only serves the
//! curated picker taxonomy. Searches accept any genre string regardless of
//! whether it appears here.

use axum::{routing::get, Json, Router};
use pacer_core::constants::genres::{genre_slug, GENRE_FAMILIES};
use serde::Serialize;

/// A selectable subgenre with its stored slug
#[derive(Debug, Serialize)]
struct SubgenreEntry {
    name: &'static str,
    slug: String,
}

/// A main genre family and its subgenres
#[derive(Debug, Serialize)]
struct GenreFamilyEntry {
    name: &'static str,
    subgenres: Vec<SubgenreEntry>,
}

/// Genre taxonomy routes
pub struct GenresRoutes;

impl GenresRoutes {
    /// Create all genre taxonomy routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new().route("/api/genres", get(Self::handle_list))
    }

    /// Handle genre taxonomy listing
    async fn handle_list() -> Json<Vec<GenreFamilyEntry>> {
        let families = GENRE_FAMILIES
            .iter()
            .map(|family| GenreFamilyEntry {
                name: family.name,
                subgenres: family
                    .subgenres
                    .iter()
                    .map(|subgenre| SubgenreEntry {
                        name: subgenre,
                        slug: genre_slug(subgenre),
                    })
                    .collect(),
            })
            .collect();

        Json(families)
    }
}
