//! The loop that walks the state machine to `Exit`.

use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use super::state::State;
use crate::catalog::Catalog;
use crate::ui::{Console, InputError};

/// Drives the state machine against a [`Console`]. The session owns its random
/// source so a seeded generator makes a whole run reproducible.
pub struct Session<'a, G = StdRng> {
    catalog: &'a Catalog,
    rng: G,
}

impl<'a, G: Rng> Session<'a, G> {
    pub fn new(catalog: &'a Catalog, rng: G) -> Self {
        Self { catalog, rng }
    }

    /// Run from `ChooseGenre` until the user exits, then say goodbye.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<()> {
        let mut state = State::ChooseGenre;
        while state != State::Exit {
            state = self.step(state, console)?;
        }
        console.show_farewell()
    }

    /// Execute one state: present a recommendation, or show the state's menu
    /// and apply the answer.
    pub fn step<C: Console>(&mut self, state: State, console: &mut C) -> Result<State> {
        match state {
            State::ShowRecommendation {
                genre,
                interval,
                pool,
            } => {
                let song = pool.pick(&mut self.rng);
                debug!("picked {song} from {} candidates", pool.len());
                console.show_recommendation(song)?;
                Ok(State::NextAction { genre, interval })
            }
            other => self.ask(other, console),
        }
    }

    /// Closed input is treated as a request to exit.
    fn ask<C: Console>(&self, state: State, console: &mut C) -> Result<State> {
        let Some(menu) = state.menu() else {
            return Ok(state);
        };

        console.show_menu(menu)?;
        match console.read_int_in_range(1, menu.max_choice()) {
            Ok(answer) => Ok(state.advance(self.catalog, answer)),
            Err(InputError::Closed) => {
                info!("input closed during {}; exiting", state.name());
                Ok(State::Exit)
            }
            Err(err) => Err(err.into()),
        }
    }
}
