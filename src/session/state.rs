//! Explicit menu state machine. Each state knows which menu it asks, and
//! [`State::advance`] maps a validated answer to the next state without doing
//! any I/O, so every branch can be exercised directly.

use log::debug;

use crate::catalog::Catalog;
use crate::models::{Genre, Interval};
use crate::recommend::{resolve_pool, Pool};

/// What to do after a selection came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryChoice {
    /// Pick another interval, keeping the genre.
    Retry,
    NewGenre,
    Exit,
}

impl RecoveryChoice {
    pub const ALL: [RecoveryChoice; 3] = [
        RecoveryChoice::Retry,
        RecoveryChoice::NewGenre,
        RecoveryChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RecoveryChoice::Retry => "Try another interval (same genre)",
            RecoveryChoice::NewGenre => "Choose new genre",
            RecoveryChoice::Exit => "Exit",
        }
    }

    pub fn from_menu(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(RecoveryChoice::Retry),
            2 => Some(RecoveryChoice::NewGenre),
            3 => Some(RecoveryChoice::Exit),
            _ => None,
        }
    }
}

/// What to do after a recommendation was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextChoice {
    /// Ask for an interval again, keeping the genre.
    Repeat,
    NewGenre,
    Exit,
}

impl NextChoice {
    pub const ALL: [NextChoice; 3] = [NextChoice::Repeat, NextChoice::NewGenre, NextChoice::Exit];

    pub fn label(self) -> &'static str {
        match self {
            NextChoice::Repeat => "Another recommendation (same genre & interval)",
            NextChoice::NewGenre => "Choose a new genre",
            NextChoice::Exit => "Exit",
        }
    }

    pub fn from_menu(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(NextChoice::Repeat),
            2 => Some(NextChoice::NewGenre),
            3 => Some(NextChoice::Exit),
            _ => None,
        }
    }
}

/// Menus the session can put in front of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Genre,
    Interval,
    EmptyRecovery,
    NextAction,
}

impl Menu {
    /// Largest valid answer; every menu starts at 1.
    pub fn max_choice(self) -> u32 {
        match self {
            Menu::Genre => Genre::ALL.len() as u32,
            Menu::Interval => Interval::ALL.len() as u32,
            Menu::EmptyRecovery => RecoveryChoice::ALL.len() as u32,
            Menu::NextAction => NextChoice::ALL.len() as u32,
        }
    }

    /// Option labels in menu order.
    pub fn options(self) -> Vec<String> {
        match self {
            Menu::Genre => Genre::ALL.iter().map(|g| g.label().to_string()).collect(),
            Menu::Interval => Interval::ALL.iter().map(|i| i.label()).collect(),
            Menu::EmptyRecovery => RecoveryChoice::ALL
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
            Menu::NextAction => NextChoice::ALL
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    ChooseGenre,
    ChooseInterval {
        genre: Genre,
    },
    EmptyRecovery {
        genre: Genre,
    },
    ShowRecommendation {
        genre: Genre,
        interval: Interval,
        pool: Pool,
    },
    NextAction {
        genre: Genre,
        interval: Interval,
    },
    Exit,
}

impl State {
    /// The menu this state asks, or `None` for states that need no answer.
    pub fn menu(&self) -> Option<Menu> {
        match self {
            State::ChooseGenre => Some(Menu::Genre),
            State::ChooseInterval { .. } => Some(Menu::Interval),
            State::EmptyRecovery { .. } => Some(Menu::EmptyRecovery),
            State::NextAction { .. } => Some(Menu::NextAction),
            State::ShowRecommendation { .. } | State::Exit => None,
        }
    }

    /// Apply the user's answer to the current menu. An answer the menu does not
    /// define leaves the state unchanged so the question is asked again.
    pub fn advance(self, catalog: &Catalog, answer: u32) -> State {
        let next = match self {
            State::ChooseGenre => match Genre::from_menu(answer) {
                Some(genre) => State::ChooseInterval { genre },
                None => State::ChooseGenre,
            },
            State::ChooseInterval { genre } => match Interval::from_menu(answer) {
                Some(interval) => select(catalog, genre, interval),
                None => State::ChooseInterval { genre },
            },
            State::EmptyRecovery { genre } => match RecoveryChoice::from_menu(answer) {
                Some(RecoveryChoice::Retry) => State::ChooseInterval { genre },
                Some(RecoveryChoice::NewGenre) => State::ChooseGenre,
                Some(RecoveryChoice::Exit) => State::Exit,
                None => State::EmptyRecovery { genre },
            },
            State::NextAction { genre, interval } => match NextChoice::from_menu(answer) {
                Some(NextChoice::Repeat) => State::ChooseInterval { genre },
                Some(NextChoice::NewGenre) => State::ChooseGenre,
                Some(NextChoice::Exit) => State::Exit,
                None => State::NextAction { genre, interval },
            },
            state @ (State::ShowRecommendation { .. } | State::Exit) => state,
        };
        debug!("answer {answer} -> {}", next.name());
        next
    }

    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            State::ChooseGenre => "ChooseGenre",
            State::ChooseInterval { .. } => "ChooseInterval",
            State::EmptyRecovery { .. } => "EmptyRecovery",
            State::ShowRecommendation { .. } => "ShowRecommendation",
            State::NextAction { .. } => "NextAction",
            State::Exit => "Exit",
        }
    }
}

/// Resolve the pool for a genre and interval and branch on whether anything
/// is left to recommend.
pub fn select(catalog: &Catalog, genre: Genre, interval: Interval) -> State {
    match Pool::new(resolve_pool(catalog, genre, interval)) {
        Some(pool) => State::ShowRecommendation {
            genre,
            interval,
            pool,
        },
        None => State::EmptyRecovery { genre },
    }
}
