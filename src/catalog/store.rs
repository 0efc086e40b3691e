//! The in-memory catalog. It is decoded from JSON once at start-up and is
//! read-only afterwards; a missing genre list or an out-of-range year stops
//! construction instead of surfacing mid-session.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use log::info;

use super::CatalogError;
use crate::models::{Genre, Song};

/// Catalog shipped with the binary. Kept as a data asset so the session logic
/// never hardcodes songs and tests can build their own catalog from JSON.
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Release years a catalog entry may carry.
pub const PLAUSIBLE_YEARS: RangeInclusive<i32> = 1900..=2100;

/// Read-only song lists, one per [`Genre`], in catalog definition order.
#[derive(Debug, Clone)]
pub struct Catalog {
    lists: [Vec<Song>; 6],
}

impl Catalog {
    /// Decode the catalog embedded at compile time.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Decode a JSON object mapping snake_case genre names (`pop`, `hip_hop`,
    /// `featured`, ...) to arrays of songs.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let lists: HashMap<Genre, Vec<Song>> = serde_json::from_str(raw)?;
        Self::from_lists(lists)
    }

    /// Validate and freeze per-genre lists. Every genre must be present (an
    /// empty list is allowed) and every year must be plausible.
    pub fn from_lists(mut lists: HashMap<Genre, Vec<Song>>) -> Result<Self, CatalogError> {
        let mut frozen: [Vec<Song>; 6] = Default::default();

        for genre in Genre::ALL {
            let songs = lists
                .remove(&genre)
                .ok_or(CatalogError::MissingGenre(genre))?;

            if let Some(song) = songs.iter().find(|s| !PLAUSIBLE_YEARS.contains(&s.year)) {
                return Err(CatalogError::ImplausibleYear {
                    genre,
                    title: song.title.clone(),
                    year: song.year,
                });
            }

            frozen[genre.index()] = songs;
        }

        let catalog = Self { lists: frozen };
        info!(
            "catalog loaded: {} songs across {} lists",
            catalog.lists.iter().map(Vec::len).sum::<usize>(),
            catalog.lists.len()
        );
        Ok(catalog)
    }

    /// The ordered list for `genre`.
    pub fn songs(&self, genre: Genre) -> &[Song] {
        &self.lists[genre.index()]
    }

    /// Cross-genre current releases.
    pub fn featured(&self) -> &[Song] {
        self.songs(Genre::Featured)
    }
}
