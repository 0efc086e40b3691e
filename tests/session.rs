use std::io::Cursor;

use music_recommender::ui::{render_menu, FAREWELL};
use music_recommender::{Catalog, Genre, Menu, Session, Song, Terminal};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SYNTHETIC: &str = r#"{
    "pop": [],
    "rock": [],
    "hip_hop": [],
    "jazz": [{"title": "So What", "artist": "Miles Davis", "year": 1959, "views": "200M"}],
    "kids": [{"title": "Baby Shark Dance", "artist": "Pinkfong", "year": 2016, "views": "13B"}],
    "featured": [{"title": "New Horizons", "artist": "Future Artist", "year": 2025, "views": "Fresh Release"}]
}"#;

fn transcript(catalog: &Catalog, script: &str, seed: u64) -> String {
    let mut terminal = Terminal::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), false);
    let mut session = Session::new(catalog, StdRng::seed_from_u64(seed));
    session.run(&mut terminal).unwrap();
    String::from_utf8(terminal.into_output()).unwrap()
}

fn recommendations(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("We recommend: "))
        .collect()
}

fn rendered(songs: &[Song]) -> Vec<String> {
    songs.iter().map(Song::to_string).collect()
}

#[test]
fn rock_classics_recommend_from_the_rock_pool() {
    let catalog = Catalog::builtin().unwrap();
    let pool = rendered(&catalog.songs(Genre::Rock)[..4]);

    for seed in 0..16 {
        let output = transcript(&catalog, "2\n1\n3\n", seed);
        let picks = recommendations(&output);
        assert_eq!(picks.len(), 1);
        assert!(pool.iter().any(|line| line == picks[0]), "{}", picks[0]);
    }
}

#[test]
fn rock_classics_can_recommend_queen() {
    let catalog = Catalog::builtin().unwrap();
    let script = format!("2\n1\n{}3\n", "1\n1\n".repeat(60));
    let output = transcript(&catalog, &script, 5);

    let picks = recommendations(&output);
    assert_eq!(picks.len(), 61);
    assert!(picks.contains(&"\"Bohemian Rhapsody\" by Queen (1975) - 1.8B views"));
    assert!(picks.contains(&"\"Hotel California\" by Eagles (1977) - 800M views"));
}

#[test]
fn recent_jazz_full_transcript() {
    let catalog = Catalog::builtin().unwrap();
    let output = transcript(&catalog, "4\n4\n3\n", 1);

    let expected = [
        render_menu(Menu::Genre),
        render_menu(Menu::Interval),
        "\nWe recommend: \"Top 2025 Jazz Piece\" by Artist TBD (2025) - Fresh Release views\n\n"
            .to_string(),
        render_menu(Menu::NextAction),
        FAREWELL.to_string(),
    ]
    .concat();
    assert_eq!(output, expected);
}

#[test]
fn featured_interval_overrides_pop() {
    let catalog = Catalog::builtin().unwrap();
    let featured = rendered(catalog.featured());
    let pop = rendered(catalog.songs(Genre::Pop));

    let script = format!("1\n5\n{}3\n", "1\n5\n".repeat(30));
    let output = transcript(&catalog, &script, 9);

    for pick in recommendations(&output) {
        assert!(featured.iter().any(|line| line == pick), "{pick}");
        assert!(!pop.iter().any(|line| line == pick), "{pick}");
    }
}

#[test]
fn empty_selection_offers_recovery_then_retry() {
    let catalog = Catalog::from_json(SYNTHETIC).unwrap();
    // Kids, 1975-1999 (empty), retry, 2011-2020, exit.
    let output = transcript(&catalog, "5\n1\n1\n3\n3\n", 0);

    let expected = [
        render_menu(Menu::Genre),
        render_menu(Menu::Interval),
        render_menu(Menu::EmptyRecovery),
        render_menu(Menu::Interval),
        "\nWe recommend: \"Baby Shark Dance\" by Pinkfong (2016) - 13B views\n\n".to_string(),
        render_menu(Menu::NextAction),
        FAREWELL.to_string(),
    ]
    .concat();
    assert_eq!(output, expected);
}

#[test]
fn empty_selection_can_switch_genre() {
    let catalog = Catalog::from_json(SYNTHETIC).unwrap();
    // Pop, 2000-2011 (empty), new genre, Jazz, 1975-1999 (empty), exit.
    let output = transcript(&catalog, "1\n2\n2\n4\n1\n3\n", 0);

    assert!(recommendations(&output).is_empty());
    assert_eq!(output.matches("Choose a genre:").count(), 2);
    assert_eq!(output.matches("No songs found for this selection.").count(), 2);
    assert!(output.ends_with(FAREWELL));
}

#[test]
fn featured_interval_is_never_empty_even_for_empty_genres() {
    let catalog = Catalog::from_json(SYNTHETIC).unwrap();
    let output = transcript(&catalog, "2\n5\n3\n", 0);

    assert_eq!(
        recommendations(&output),
        ["\"New Horizons\" by Future Artist (2025) - Fresh Release views"]
    );
}

#[test]
fn new_genre_after_recommendation() {
    let catalog = Catalog::builtin().unwrap();
    // Jazz recent, new genre, Featured genre + Featured interval, exit.
    let output = transcript(&catalog, "4\n4\n2\n6\n5\n3\n", 3);

    let picks = recommendations(&output);
    assert_eq!(picks.len(), 2);
    assert_eq!(
        picks[0],
        "\"Top 2025 Jazz Piece\" by Artist TBD (2025) - Fresh Release views"
    );
    assert!(rendered(catalog.featured()).iter().any(|line| line == picks[1]));
}

#[test]
fn invalid_answers_are_reprompted() {
    let catalog = Catalog::builtin().unwrap();
    let output = transcript(&catalog, "jazz\n0\n4\n6\n4\nexit\n3\n", 0);

    assert_eq!(
        output
            .matches("Invalid input. Please enter a number between 1 and 6:")
            .count(),
        2
    );
    assert_eq!(
        output
            .matches("Invalid input. Please enter a number between 1 and 5:")
            .count(),
        1
    );
    assert_eq!(
        output
            .matches("Invalid input. Please enter a number between 1 and 3:")
            .count(),
        1
    );
    assert_eq!(recommendations(&output).len(), 1);
    assert!(output.ends_with(FAREWELL));
}

#[test]
fn repeat_shows_the_interval_menu_again() {
    let catalog = Catalog::builtin().unwrap();
    // Rock, 1975-1999, repeat, 2011-2020, exit.
    let output = transcript(&catalog, "2\n1\n1\n3\n3\n", 4);

    assert_eq!(output.matches("Choose a year interval:").count(), 2);
    assert_eq!(output.matches("What would you like to do next?").count(), 2);

    let picks = recommendations(&output);
    assert_eq!(picks.len(), 2);
    let recent_rock = rendered(&catalog.songs(Genre::Rock)[6..8]);
    assert!(recent_rock.iter().any(|line| line == picks[1]), "{}", picks[1]);
    assert!(output.ends_with(FAREWELL));
}

#[test]
fn closed_input_still_says_goodbye() {
    let catalog = Catalog::builtin().unwrap();
    let output = transcript(&catalog, "3\n", 0);

    let expected = [
        render_menu(Menu::Genre),
        render_menu(Menu::Interval),
        FAREWELL.to_string(),
    ]
    .concat();
    assert_eq!(output, expected);
}

#[test]
fn same_seed_same_session() {
    let catalog = Catalog::builtin().unwrap();
    let script = format!("3\n3\n{}3\n", "1\n3\n".repeat(10));
    assert_eq!(
        transcript(&catalog, &script, 77),
        transcript(&catalog, &script, 77)
    );
}
