use super::{AppState, View};
use crate::config::Config;
use std::path::Path;
use std::time::{Duration, Instant};

fn app() -> AppState {
    let cfg = Config::load_from(Path::new("no-such-config.toml"));
    let mut app = AppState::new(cfg).unwrap();
    app.set_pane_height(40);
    app
}

#[test]
fn test_first_section_active_by_default() {
    let app = app();
    assert_eq!(app.nav.active_id(), "welcome");
    assert_eq!(app.nav.fragment(), "#welcome");
    assert!(app.view == View::Browse);
}

#[test]
fn test_closing_search_resets_the_query() {
    let mut app = app();

    app.open_search();
    app.push_query('c');
    app.push_query('h');
    assert!(app.view == View::Search);
    assert_eq!(app.query, "ch");

    app.close_search();
    assert!(app.view == View::Browse);
    assert!(app.query.is_empty());
    assert_eq!(app.selected, 0);
}

#[test]
fn test_choosing_a_result_navigates_and_closes() {
    let mut app = app();
    let t0 = Instant::now();

    app.open_search();
    for c in "voice".chars() {
        app.push_query(c);
    }
    let first = app.search_results()[0].id.clone();
    assert_eq!(first, "voice-overview", "label match ranks first");

    app.choose_selected(t0);
    assert_eq!(app.nav.active_id(), "voice-overview");
    assert!(app.view == View::Browse);
    assert!(app.query.is_empty());
    assert!(app.scroll.is_animating(), "jump starts the smooth scroll");
}

#[test]
fn test_selection_moves_within_results_only() {
    let mut app = app();

    app.open_search();
    for c in "voice".chars() {
        app.push_query(c);
    }
    let count = app.search_results().len();
    assert!(count >= 2);

    for _ in 0..20 {
        app.move_selection(true);
    }
    assert_eq!(app.selected, count - 1, "selection clamps at the end");

    app.move_selection(false);
    assert_eq!(app.selected, count - 2);
}

#[test]
fn test_deferred_fragment_fires_on_tick() {
    let mut app = app();
    let t0 = Instant::now();

    app.handle_incoming_fragment("#chat-completions", t0);
    assert_eq!(app.nav.active_id(), "welcome", "not yet due");

    app.tick(t0 + Duration::from_millis(100));
    assert_eq!(app.nav.active_id(), "chat-completions");
    assert!(app.nav.is_suppressed(t0 + Duration::from_millis(600)));
}

#[test]
fn test_tracker_takes_over_after_the_settle_window() {
    let mut app = app();
    let t0 = Instant::now();

    app.navigate("chat-completions", t0);
    assert_eq!(app.nav.active_id(), "chat-completions");

    // Mid-window ticks leave the explicit choice alone.
    app.tick(t0 + Duration::from_millis(500));
    assert_eq!(app.nav.active_id(), "chat-completions");

    // Once the window expires the tracker observes the pane sitting on the
    // operation's anchor and publishes its group overview instead.
    app.tick(t0 + Duration::from_millis(1100));
    assert_eq!(app.nav.active_id(), "chat-overview");
}

#[test]
fn test_section_stepping_walks_menu_entries() {
    let mut app = app();
    let t0 = Instant::now();

    app.next_section(t0);
    assert_eq!(app.nav.active_id(), "authentication");

    app.next_section(t0 + Duration::from_millis(10));
    assert_eq!(app.nav.active_id(), "chat-overview");

    app.prev_section(t0 + Duration::from_millis(20));
    assert_eq!(app.nav.active_id(), "authentication");
}

#[test]
fn test_unknown_fragment_leaves_state_alone() {
    let mut app = app();
    let t0 = Instant::now();

    app.handle_incoming_fragment("#does-not-exist", t0);
    app.tick(t0 + Duration::from_millis(200));

    assert_eq!(app.nav.active_id(), "welcome");
    assert!(!app.scroll.is_animating());
}
