//! Static song catalog split across logical submodules.

mod error;
mod store;

pub use error::CatalogError;
pub use store::{Catalog, PLAUSIBLE_YEARS};
