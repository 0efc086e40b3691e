//! Uniform random choice over candidate songs. The random source is always
//! passed in, so callers decide how it is seeded.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::models::Song;

/// Uniformly choose one song. `None` only when `songs` is empty.
pub fn pick_one<'a, R: Rng + ?Sized>(rng: &mut R, songs: &'a [Song]) -> Option<&'a Song> {
    songs.choose(rng)
}

/// A non-empty set of candidate songs. Holding a `Pool` is proof that a draw
/// will succeed, so the session never reaches selection with nothing to pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    songs: Vec<Song>,
}

impl Pool {
    /// `None` for an empty candidate list.
    pub fn new(songs: Vec<Song>) -> Option<Self> {
        if songs.is_empty() {
            None
        } else {
            Some(Self { songs })
        }
    }

    /// Draw one song with probability `1 / len`. Consecutive draws are
    /// independent and may repeat.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Song {
        &self.songs[rng.random_range(0..self.songs.len())]
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Always `false`; an empty pool cannot be built.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
