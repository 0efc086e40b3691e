//! Core library surface for the console music recommender.
//!
//! The binary only wires these pieces together; tests drive the same
//! [`Session`] with a scripted console and a seeded random source.
pub mod catalog;
pub mod config;
pub mod models;
pub mod recommend;
pub mod session;
pub mod ui;

/// The static song catalog and its construction errors.
pub use catalog::{Catalog, CatalogError};

pub use config::{AppConfig, DEFAULT_LOG_FILTER};

/// The value types other layers pass around.
pub use models::{Genre, Interval, Song, YearRange};

/// Selection pipeline building blocks.
pub use recommend::{filter_by_year, pick_one, resolve_pool, Pool};

/// The interactive state machine and its driver.
pub use session::{Menu, Session, State};

pub use ui::{Console, Terminal};
