//! Domain models shared by the catalog, the selection pipeline, and the
//! console front-end. Everything here is a small immutable value type so the
//! other layers can pass them around freely without worrying about identity.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// A single catalog entry. Two songs with identical fields are the same song;
/// the catalog may still list a value twice and nothing deduplicates it.
pub struct Song {
    /// Title shown in quotes when the song is recommended.
    pub title: String,
    /// Performing artist, free-form (features and casts included).
    pub artist: String,
    /// Release year. The catalog loader only accepts 1900 through 2100.
    pub year: i32,
    /// View count as display text. Some entries carry a label such as
    /// "Fresh Release" instead of a number, so this is never parsed.
    pub views: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
        views: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            year,
            views: views.into(),
        }
    }
}

impl fmt::Display for Song {
    /// Render the recommendation line body, e.g.
    /// `"Bohemian Rhapsody" by Queen (1975) - 1.8B views`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" by {} ({}) - {} views",
            self.title, self.artist, self.year, self.views
        )
    }
}

/// The closed set of catalog categories. `Featured` is the cross-genre list of
/// current releases and is also reachable through [`Interval::Featured`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Pop,
    Rock,
    HipHop,
    Jazz,
    Kids,
    Featured,
}

impl Genre {
    /// Menu order. The menu number of a genre is its position plus one.
    pub const ALL: [Genre; 6] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Jazz,
        Genre::Kids,
        Genre::Featured,
    ];

    /// Label printed in the genre menu.
    pub fn label(self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
            Genre::HipHop => "Hip-Hop",
            Genre::Jazz => "Jazz",
            Genre::Kids => "Kids",
            Genre::Featured => "Top 2025 (special)",
        }
    }

    /// Stable slot of the genre inside fixed-size per-genre tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Genre::Pop => 0,
            Genre::Rock => 1,
            Genre::HipHop => 2,
            Genre::Jazz => 3,
            Genre::Kids => 4,
            Genre::Featured => 5,
        }
    }

    /// Map a 1-based menu answer back to a genre.
    pub fn from_menu(choice: u32) -> Option<Self> {
        menu_slot(choice).and_then(|slot| Self::ALL.get(slot).copied())
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive range of release years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// `true` when `start <= year <= end`. An inverted range contains nothing.
    pub fn contains(self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// One answer of the interval menu: a concrete year range, or the Featured
/// sentinel that ignores years and swaps in the Featured list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Years(YearRange),
    Featured,
}

impl Interval {
    /// Menu order. Intervals two and three both include 2011.
    pub const ALL: [Interval; 5] = [
        Interval::Years(YearRange::new(1975, 1999)),
        Interval::Years(YearRange::new(2000, 2011)),
        Interval::Years(YearRange::new(2011, 2020)),
        Interval::Years(YearRange::new(2021, 2025)),
        Interval::Featured,
    ];

    /// Label printed in the interval menu.
    pub fn label(self) -> String {
        match self {
            Interval::Years(range) => range.to_string(),
            Interval::Featured => Genre::Featured.label().to_string(),
        }
    }

    pub fn from_menu(choice: u32) -> Option<Self> {
        menu_slot(choice).and_then(|slot| Self::ALL.get(slot).copied())
    }
}

fn menu_slot(choice: u32) -> Option<usize> {
    usize::try_from(choice).ok()?.checked_sub(1)
}
