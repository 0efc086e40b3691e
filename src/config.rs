//! Runtime settings resolved once at start-up.

use std::io::{self, IsTerminal};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// `env_logger` filter used when `RUST_LOG` is unset. Kept at `warn` so
/// diagnostics stay out of the interactive menus.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Emphasize recommendations with terminal styling.
    pub styled: bool,
}

impl AppConfig {
    /// Styled only when stdout is an interactive terminal.
    pub fn detect() -> Self {
        Self {
            styled: io::stdout().is_terminal(),
        }
    }

    /// The random source for one session, seeded from OS entropy. Called once
    /// per process; tests hand a seeded `StdRng` to `Session::new` instead.
    pub fn rng(&self) -> StdRng {
        StdRng::from_os_rng()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_plain() {
        assert!(!AppConfig::default().styled);
    }
}
