//! Binary entry point: load the compiled-in catalog, seed the random source,
//! and run the menu session on stdin/stdout until the user exits.
use anyhow::Context;
use music_recommender::{AppConfig, Catalog, Session, Terminal, DEFAULT_LOG_FILTER};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let config = AppConfig::detect();
    let catalog = Catalog::builtin().context("failed to load the song catalog")?;

    let mut session = Session::new(&catalog, config.rng());
    let mut terminal = Terminal::stdio(config.styled);
    session.run(&mut terminal)
}
