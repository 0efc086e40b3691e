//! Year-range narrowing of a song list.

use crate::models::{Song, YearRange};

/// Songs released between `start` and `end` inclusive, in input order.
/// `start > end` matches nothing.
pub fn filter_by_year(songs: &[Song], start: i32, end: i32) -> Vec<Song> {
    let range = YearRange::new(start, end);
    songs
        .iter()
        .filter(|song| range.contains(song.year))
        .cloned()
        .collect()
}
