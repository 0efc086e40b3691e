//! Glue between the [`Console`](super::Console) trait and real streams.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::Result;

use super::input::{read_int_in_range, InputError};
use super::presenter::Presenter;
use super::Console;
use crate::models::Song;
use crate::session::Menu;

/// Line-based console over any reader/writer pair. Production uses stdin and
/// stdout; tests feed a scripted `Cursor` and capture a `Vec<u8>`.
pub struct Terminal<R: BufRead, W: Write> {
    input: R,
    presenter: Presenter<W>,
}

impl Terminal<StdinLock<'static>, Stdout> {
    pub fn stdio(styled: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), styled)
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, styled: bool) -> Self {
        Self {
            input,
            presenter: Presenter::new(output, styled),
        }
    }

    /// Everything written so far.
    pub fn into_output(self) -> W {
        self.presenter.into_inner()
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_int_in_range(&mut self, min: u32, max: u32) -> Result<u32, InputError> {
        read_int_in_range(&mut self.input, self.presenter.writer(), min, max)
    }

    fn show_menu(&mut self, menu: Menu) -> Result<()> {
        self.presenter.menu(menu)
    }

    fn show_recommendation(&mut self, song: &Song) -> Result<()> {
        self.presenter.recommendation(song)
    }

    fn show_farewell(&mut self) -> Result<()> {
        self.presenter.farewell()
    }
}
