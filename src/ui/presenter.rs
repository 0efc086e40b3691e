//! Text for every menu, the recommendation line, and the closing message.

use std::io::Write;

use anyhow::{Context, Result};
use crossterm::queue;
use crossterm::style::{style, Print, PrintStyledContent, Stylize};

use crate::models::Song;
use crate::session::Menu;

/// Closing line printed once the session reaches `Exit`.
pub const FAREWELL: &str = "\nThanks for using the Music Recommender prototype!\n";

/// Full text of a menu: heading, numbered options, and the prompt, with no
/// trailing newline so the answer is typed on the prompt line.
pub fn render_menu(menu: Menu) -> String {
    let (heading, prompt) = match menu {
        Menu::Genre => ("Choose a genre:", "Enter your choice"),
        Menu::Interval => ("\nChoose a year interval:", "Enter your choice"),
        Menu::EmptyRecovery => (
            "\nNo songs found for this selection. Try a different interval or genre.",
            "Enter",
        ),
        Menu::NextAction => ("What would you like to do next?", "Enter your choice"),
    };

    let mut text = format!("{heading}\n");
    for (number, label) in menu.options().iter().enumerate() {
        text.push_str(&format!("{}. {label}\n", number + 1));
    }
    text.push_str(&format!("{prompt} (1-{}): ", menu.max_choice()));
    text
}

/// Writes menus and recommendations. With `styled` set the recommendation is
/// emphasized using terminal escape codes; otherwise only plain text is
/// written.
pub struct Presenter<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    /// Raw writer, used by the input reader for its re-prompt hint.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn menu(&mut self, menu: Menu) -> Result<()> {
        queue!(self.out, Print(render_menu(menu))).context("failed to write menu")?;
        self.flush()
    }

    pub fn recommendation(&mut self, song: &Song) -> Result<()> {
        let line = format!("We recommend: {song}");
        let written = if self.styled {
            queue!(
                self.out,
                Print("\n"),
                PrintStyledContent(style(line).bold()),
                Print("\n\n")
            )
        } else {
            queue!(self.out, Print(format!("\n{line}\n\n")))
        };
        written.context("failed to write recommendation")?;
        self.flush()
    }

    pub fn farewell(&mut self) -> Result<()> {
        queue!(self.out, Print(FAREWELL)).context("failed to write closing message")?;
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().context("failed to flush console output")
    }
}
