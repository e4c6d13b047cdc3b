//! Integration tests for the fare-alert lifecycle: create from a ready
//! search, log fares from the history tab, observe trigger state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use farewatch::{App, SearchStep, Tab};
use tempfile::TempDir;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

fn create_test_app() -> (App, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let app = App::new(temp_dir.path());
    (app, temp_dir)
}

fn build_route(app: &mut App, origin: &str, destination: &str, depart: &str, ret: &str) {
    type_str(app, origin);
    app.handle_key(key(KeyCode::Enter));
    type_str(app, destination);
    app.handle_key(key(KeyCode::Enter));
    type_str(app, depart);
    app.handle_key(key(KeyCode::Enter));
    type_str(app, ret);
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.search_step, SearchStep::Ready);
}

#[test]
fn test_watch_launch_log_trigger_cycle() {
    let (mut app, _dir) = create_test_app();

    // 1. Build the route and watch it at $450
    build_route(&mut app, "jfk", "cun", "2026-03-10", "2026-03-17");
    app.handle_key(key(KeyCode::Char('w')));
    type_str(&mut app, "450");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.alerts.len(), 1);

    // 2. Launch the search so the route lands in history
    app.handle_key(key(KeyCode::Enter));

    // 3. Nothing logged yet: alert armed but silent
    let rows = app.alert_rows();
    assert!(!rows[0].triggered);
    assert_eq!(rows[0].best_price_usd, None);

    // 4. Log a fare above the ceiling from the history tab
    app.select_tab(Tab::History);
    app.handle_key(key(KeyCode::Char(' ')));
    type_str(&mut app, "520");
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter)); // no carrier named
    assert!(!app.alert_rows()[0].triggered);

    // 5. Log a fare under the ceiling: alert fires
    app.handle_key(key(KeyCode::Char(' ')));
    type_str(&mut app, "430");
    app.handle_key(key(KeyCode::Enter));
    type_str(&mut app, "Delta");
    app.handle_key(key(KeyCode::Enter));

    let rows = app.alert_rows();
    assert!(rows[0].triggered);
    assert_eq!(rows[0].best_price_usd, Some(430));
    assert_eq!(app.history[0].airline.as_deref(), Some("Delta"));
}

#[test]
fn test_rewatching_same_route_updates_ceiling() {
    let (mut app, _dir) = create_test_app();

    build_route(&mut app, "jfk", "cun", "2026-03-10", "2026-03-17");
    app.handle_key(key(KeyCode::Char('w')));
    type_str(&mut app, "450");
    app.handle_key(key(KeyCode::Enter));

    app.handle_key(key(KeyCode::Char('w')));
    type_str(&mut app, "300");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.alerts.len(), 1);
    assert_eq!(app.alerts[0].ceiling_usd, 300);
}

#[test]
fn test_alerts_persist_across_instances() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut app = App::new(temp_dir.path());
        build_route(&mut app, "jfk", "cun", "2026-03-10", "2026-03-17");
        app.handle_key(key(KeyCode::Char('w')));
        type_str(&mut app, "450");
        app.handle_key(key(KeyCode::Enter));
    }

    let app = App::new(temp_dir.path());
    assert_eq!(app.alerts.len(), 1);
    assert_eq!(app.alerts[0].ceiling_usd, 450);
    assert!(!app.alerts[0].paused);
}

#[test]
fn test_pause_persists_across_instances() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut app = App::new(temp_dir.path());
        build_route(&mut app, "jfk", "cun", "2026-03-10", "2026-03-17");
        app.handle_key(key(KeyCode::Char('w')));
        type_str(&mut app, "450");
        app.handle_key(key(KeyCode::Enter));

        app.select_tab(Tab::Alerts);
        app.handle_key(key(KeyCode::Char(' ')));
    }

    let app = App::new(temp_dir.path());
    assert!(app.alerts[0].paused);
}

#[test]
fn test_alert_route_round_trips_through_search_tab() {
    let (mut app, _dir) = create_test_app();

    build_route(&mut app, "lax", "nrt", "2026-04-01", "");
    app.handle_key(key(KeyCode::Char('w')));
    type_str(&mut app, "900");
    app.handle_key(key(KeyCode::Enter));

    // Walk the whole route builder back out, then reload it from the alert
    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.search_step, SearchStep::PickOrigin);

    app.select_tab(Tab::Alerts);
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.active_tab, Tab::Search);
    assert_eq!(app.search_step, SearchStep::Ready);
    assert_eq!(app.origin_code, "LAX");
    assert_eq!(app.destination_code, "NRT");
    assert!(app.return_input.is_empty());
}

#[test]
fn test_deleting_alert_leaves_history_intact() {
    let (mut app, _dir) = create_test_app();

    build_route(&mut app, "jfk", "cun", "2026-03-10", "2026-03-17");
    app.handle_key(key(KeyCode::Char('w')));
    type_str(&mut app, "450");
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter)); // launch → history

    app.select_tab(Tab::Alerts);
    app.handle_key(key(KeyCode::Delete));

    assert!(app.alerts.is_empty());
    assert_eq!(app.history.len(), 1);
}
