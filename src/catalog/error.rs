//! Catalog construction errors.

use thiserror::Error;

use crate::models::Genre;

/// Problems detected while building a [`Catalog`](super::Catalog). All of them
/// surface at start-up; a constructed catalog never fails afterwards.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog data is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no {0} list")]
    MissingGenre(Genre),

    #[error("\"{title}\" in the {genre} list has implausible year {year}")]
    ImplausibleYear {
        genre: Genre,
        title: String,
        year: i32,
    },
}
