//! Menu-driven recommendation session.

mod controller;
mod state;

pub use controller::Session;
pub use state::{select, Menu, NextChoice, RecoveryChoice, State};
