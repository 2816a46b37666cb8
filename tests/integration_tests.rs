//! End-to-end scenarios through the public API
//!
//! Drives the app with synthetic key events and hand-delivered search
//! replies - no worker thread, no network, no real terminal.

use std::sync::mpsc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use skypick::source::{SearchReply, SearchRequest};
use skypick::{Actor, App, Config};

fn test_app() -> (App, mpsc::Receiver<SearchRequest>, mpsc::Sender<SearchReply>) {
    let config = Config::default();
    let mut app = App::new(&config);
    let (request_tx, request_rx) = mpsc::channel();
    let (reply_tx, reply_rx) = mpsc::channel();
    app.source.set_channels(request_tx, reply_rx);
    (app, request_rx, reply_tx)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

fn deliver_results(app: &mut App, reply_tx: &mpsc::Sender<SearchReply>, handles: &[&str]) {
    reply_tx
        .send(SearchReply::Results {
            actors: handles.iter().map(|h| Actor::new(*h)).collect(),
            request_id: app.source.current_request_id(),
        })
        .unwrap();
    app.poll_source();
}

fn render_to_screen(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn scenario_query_renders_rows_without_highlight() {
    let (mut app, _request_rx, reply_tx) = test_app();

    type_text(&mut app, "alice");
    deliver_results(
        &mut app,
        &reply_tx,
        &["alice.bsky.social", "alice2.bsky.social"],
    );

    assert_eq!(app.typeahead.len(), 2);
    assert_eq!(app.typeahead.highlight(), None);

    let screen = render_to_screen(&mut app);
    assert!(screen.contains("alice.bsky.social"));
    assert!(screen.contains("alice2.bsky.social"));
}

#[test]
fn scenario_two_downs_clamp_to_second_row() {
    let (mut app, _request_rx, reply_tx) = test_app();
    type_text(&mut app, "alice");
    deliver_results(
        &mut app,
        &reply_tx,
        &["alice.bsky.social", "alice2.bsky.social"],
    );

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Down));

    assert_eq!(app.typeahead.highlight(), Some(1));
    assert_eq!(
        app.typeahead.confirmed().unwrap().handle,
        "alice2.bsky.social"
    );
}

#[test]
fn scenario_escape_from_highlighted_collapses_menu() {
    let (mut app, _request_rx, reply_tx) = test_app();
    type_text(&mut app, "alice");
    deliver_results(&mut app, &reply_tx, &["alice.bsky.social"]);
    app.handle_key_event(key(KeyCode::Down));

    app.handle_key_event(key(KeyCode::Esc));

    assert!(app.typeahead.is_empty());
    assert_eq!(app.typeahead.highlight(), None);
    let screen = render_to_screen(&mut app);
    assert!(!screen.contains("alice.bsky.social"));
}

#[test]
fn scenario_empty_query_issues_no_fetch() {
    let (mut app, request_rx, _reply_tx) = test_app();

    type_text(&mut app, "a");
    app.handle_key_event(key(KeyCode::Backspace));

    // Only the non-empty edit fetched
    assert_eq!(request_rx.try_iter().count(), 1);
    assert!(app.typeahead.is_empty());
    assert_eq!(app.typeahead.highlight(), None);
}

#[test]
fn scenario_full_pick_flow() {
    let (mut app, _request_rx, reply_tx) = test_app();

    type_text(&mut app, "ali");
    deliver_results(
        &mut app,
        &reply_tx,
        &["alice.bsky.social", "alina.bsky.social"],
    );

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));

    // Selection wrote the handle into the input and raised one change
    assert_eq!(app.query(), "alice.bsky.social");
    let changes = app.input.drain_changes();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].value, "alice.bsky.social");
    assert!(app.typeahead.is_empty());

    // A second Enter on the collapsed menu accepts the value
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.should_quit());
    assert_eq!(app.picked(), Some("alice.bsky.social"));
}

#[test]
fn scenario_stale_reply_never_wins() {
    let (mut app, _request_rx, reply_tx) = test_app();

    type_text(&mut app, "a"); // request 1
    type_text(&mut app, "l"); // request 2

    // Replies resolve out of order: newest first, stale second
    reply_tx
        .send(SearchReply::Results {
            actors: vec![Actor::new("al.bsky.social")],
            request_id: 2,
        })
        .unwrap();
    reply_tx
        .send(SearchReply::Results {
            actors: vec![Actor::new("a.bsky.social")],
            request_id: 1,
        })
        .unwrap();
    app.poll_source();

    assert_eq!(app.typeahead.len(), 1);
    assert_eq!(app.typeahead.actors()[0].handle, "al.bsky.social");
}

#[test]
fn scenario_fetch_failure_shows_no_suggestions() {
    let (mut app, _request_rx, reply_tx) = test_app();
    type_text(&mut app, "alice");
    deliver_results(&mut app, &reply_tx, &["alice.bsky.social"]);
    assert!(app.typeahead.is_open());

    type_text(&mut app, "x");
    reply_tx
        .send(SearchReply::Error {
            message: "API error (502): upstream".to_string(),
            request_id: app.source.current_request_id(),
        })
        .unwrap();
    app.poll_source();

    assert!(app.typeahead.is_empty());
    let screen = render_to_screen(&mut app);
    assert!(!screen.contains("alice.bsky.social"));
}
