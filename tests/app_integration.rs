//! Integration tests for tab navigation and the search flow

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use farewatch::{Action, App, SearchStep, Tab};
use tempfile::TempDir;

// Helper functions for creating key events
fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
}

fn key_enter() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())
}

fn key_esc() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::empty())
}

fn key_left() -> KeyEvent {
    KeyEvent::new(KeyCode::Left, KeyModifiers::empty())
}

fn key_right() -> KeyEvent {
    KeyEvent::new(KeyCode::Right, KeyModifiers::empty())
}

fn key_ctrl_c() -> KeyEvent {
    KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
}

fn create_test_app() -> (App, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let app = App::new(temp_dir.path());
    (app, temp_dir)
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_key(key_char(c));
    }
}

/// Drive the route builder to a ready JFK → CUN round trip.
fn build_route(app: &mut App) {
    type_str(app, "jfk");
    app.handle_key(key_enter());
    type_str(app, "cun");
    app.handle_key(key_enter());
    type_str(app, "2026-03-10");
    app.handle_key(key_enter());
    type_str(app, "2026-03-17");
    app.handle_key(key_enter());
    assert_eq!(app.search_step, SearchStep::Ready);
}

#[test]
fn test_mount_starts_on_search_tab() {
    let (app, _dir) = create_test_app();
    assert_eq!(app.active_tab, Tab::Search);
}

#[test]
fn test_tab_activation_scenario() {
    // mount → Search active → activate History → activate Alerts
    let (mut app, _dir) = create_test_app();
    assert_eq!(app.active_tab, Tab::Search);

    app.select_tab(Tab::History);
    assert_eq!(app.active_tab, Tab::History);

    app.select_tab(Tab::Alerts);
    assert_eq!(app.active_tab, Tab::Alerts);
}

#[test]
fn test_arrow_keys_reach_every_tab() {
    let (mut app, _dir) = create_test_app();

    // One press of Left or Right reaches either other tab
    app.handle_key(key_left());
    assert_eq!(app.active_tab, Tab::History);
    app.handle_key(key_left());
    assert_eq!(app.active_tab, Tab::Alerts);
    app.handle_key(key_right());
    assert_eq!(app.active_tab, Tab::History);
    app.handle_key(key_right());
    assert_eq!(app.active_tab, Tab::Search);
}

#[test]
fn test_reselecting_active_tab_is_noop() {
    let (mut app, _dir) = create_test_app();
    app.select_tab(Tab::Search);
    assert_eq!(app.active_tab, Tab::Search);
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    let (mut app, _dir) = create_test_app();
    for tab in Tab::ALL {
        app.select_tab(tab);
        assert!(matches!(app.handle_key(key_ctrl_c()), Action::Quit));
    }
}

#[test]
fn test_complete_workflow_build_and_launch() {
    let (mut app, _dir) = create_test_app();
    build_route(&mut app);

    let action = app.handle_key(key_enter());
    match action {
        Action::LaunchSearch { url } => {
            assert!(url.starts_with("https://www.google.com/travel/flights/search?tfs="));
            assert!(url.contains("_______"));
        }
        _ => panic!("expected LaunchSearch"),
    }

    // The launch was recorded
    assert_eq!(app.history.len(), 1);
    assert_eq!(
        app.history[0].route_label,
        "JFK → CUN  2026-03-10 / 2026-03-17"
    );
}

#[test]
fn test_repeated_launch_bumps_history_count() {
    let (mut app, _dir) = create_test_app();
    build_route(&mut app);
    app.handle_key(key_enter());

    // Back at Ready after the (simulated) relaunch, fire again
    assert_eq!(app.search_step, SearchStep::Ready);
    app.handle_key(key_enter());

    assert_eq!(app.history.len(), 1);
    assert_eq!(app.history[0].count, 2);
}

#[test]
fn test_route_survives_tab_switching() {
    let (mut app, _dir) = create_test_app();
    build_route(&mut app);

    app.handle_key(key_right());
    app.handle_key(key_right());
    assert_eq!(app.active_tab, Tab::History);
    app.handle_key(key_right());
    assert_eq!(app.active_tab, Tab::Search);

    assert_eq!(app.search_step, SearchStep::Ready);
    assert_eq!(app.origin_code, "JFK");
}

#[test]
fn test_esc_on_fresh_search_quits() {
    let (mut app, _dir) = create_test_app();
    assert!(matches!(app.handle_key(key_esc()), Action::Quit));
}

#[test]
fn test_history_persists_across_instances() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut app = App::new(temp_dir.path());
        build_route(&mut app);
        app.handle_key(key_enter());
    }

    let app = App::new(temp_dir.path());
    assert_eq!(app.history.len(), 1);
    // The tab selection itself is not persisted
    assert_eq!(app.active_tab, Tab::Search);
}
