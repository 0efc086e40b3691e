//! Console front-end: the line-based input reader, the text presenter, and the
//! terminal that ties both to stdin/stdout.

mod input;
mod presenter;
mod terminal;

pub use input::{parse_choice, read_int_in_range, InputError};
pub use presenter::{render_menu, Presenter, FAREWELL};
pub use terminal::Terminal;

use anyhow::Result;

use crate::models::Song;
use crate::session::Menu;

/// Everything the session needs from the outside world.
pub trait Console {
    /// Block until the user enters an integer in `[min, max]`.
    fn read_int_in_range(&mut self, min: u32, max: u32) -> Result<u32, InputError>;

    fn show_menu(&mut self, menu: Menu) -> Result<()>;

    fn show_recommendation(&mut self, song: &Song) -> Result<()>;

    fn show_farewell(&mut self) -> Result<()>;
}
