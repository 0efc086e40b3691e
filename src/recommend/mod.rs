//! The selection pipeline: narrow a genre list by interval, then draw one song.

mod filter;
mod selector;

pub use filter::filter_by_year;
pub use selector::{pick_one, Pool};

use crate::catalog::Catalog;
use crate::models::{Genre, Interval, Song};

/// Songs eligible for a genre and interval. The Featured interval ignores the
/// genre and yields the whole Featured list.
pub fn resolve_pool(catalog: &Catalog, genre: Genre, interval: Interval) -> Vec<Song> {
    match interval {
        Interval::Featured => catalog.featured().to_vec(),
        Interval::Years(range) => filter_by_year(catalog.songs(genre), range.start, range.end),
    }
}
