//! Tests for keyboard and focus event handling

use std::sync::mpsc;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::App;
use crate::actor::Actor;
use crate::config::Config;
use crate::source::{SearchReply, SearchRequest};
use crate::typeahead::DismissTimer;

/// App wired to channels whose far ends the test holds - no worker thread,
/// no network
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

#[test]
fn test_each_keystroke_issues_one_request() {
    let (mut app, request_rx, _reply_tx) = test_app();

    type_text(&mut app, "alice");

    let requests: Vec<SearchRequest> = request_rx.try_iter().collect();
    assert_eq!(requests.len(), 5);
    assert_eq!(requests.last().unwrap().query, "alice");
    assert_eq!(requests.last().unwrap().request_id, 5);
}

#[test]
fn test_empty_query_clears_without_fetch() {
    let (mut app, request_rx, reply_tx) = test_app();

    type_text(&mut app, "a");
    deliver_results(&mut app, &reply_tx, &["alice.bsky.social"]);
    assert!(app.typeahead.is_open());

    app.handle_key_event(key(KeyCode::Backspace));

    assert!(!app.typeahead.is_open());
    assert_eq!(app.typeahead.highlight(), None);
    // Only the original keystroke produced a request
    assert_eq!(request_rx.try_iter().count(), 1);
}

#[test]
fn test_results_render_without_highlight() {
    let (mut app, _request_rx, reply_tx) = test_app();

    type_text(&mut app, "alice");
    deliver_results(
        &mut app,
        &reply_tx,
        &["alice.bsky.social", "alice2.bsky.social"],
    );

    assert_eq!(app.typeahead.len(), 2);
    assert_eq!(app.typeahead.highlight(), None);
}

#[test]
fn test_two_downs_land_on_last_real_row() {
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
}

#[test]
fn test_enter_without_highlight_changes_nothing() {
    let (mut app, _request_rx, reply_tx) = test_app();
    type_text(&mut app, "alice");
    deliver_results(&mut app, &reply_tx, &["alice.bsky.social"]);

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.query(), "alice");
    assert!(!app.input.has_pending_changes());
    assert!(app.typeahead.is_open());
    assert!(!app.should_quit());
}

#[test]
fn test_confirm_selects_highlighted_row() {
    let (mut app, _request_rx, reply_tx) = test_app();
    type_text(&mut app, "alice");
    deliver_results(
        &mut app,
        &reply_tx,
        &["alice.bsky.social", "alice2.bsky.social"],
    );

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.query(), "alice2.bsky.social");
    assert!(!app.typeahead.is_open());
    let changes = app.input.drain_changes();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].value, "alice2.bsky.social");
}

#[test]
fn test_home_and_end_navigate_menu_bounds() {
    let (mut app, _request_rx, reply_tx) = test_app();
    type_text(&mut app, "ali");
    deliver_results(
        &mut app,
        &reply_tx,
        &["a.bsky.social", "b.bsky.social", "c.bsky.social"],
    );

    app.handle_key_event(key(KeyCode::End));
    assert_eq!(app.typeahead.highlight(), Some(2));

    app.handle_key_event(key(KeyCode::Home));
    assert_eq!(app.typeahead.highlight(), Some(0));
}

#[test]
fn test_escape_dismisses_open_menu() {
    let (mut app, _request_rx, reply_tx) = test_app();
    type_text(&mut app, "alice");
    deliver_results(&mut app, &reply_tx, &["alice.bsky.social"]);
    app.handle_key_event(key(KeyCode::Down));

    app.handle_key_event(key(KeyCode::Esc));

    assert!(!app.typeahead.is_open());
    assert_eq!(app.typeahead.highlight(), None);
    assert!(!app.should_quit());
}

#[test]
fn test_escape_quits_when_menu_closed() {
    let (mut app, _request_rx, _reply_tx) = test_app();

    app.handle_key_event(key(KeyCode::Esc));

    assert!(app.should_quit());
    assert!(app.picked().is_none());
}

#[test]
fn test_ctrl_c_quits_without_output() {
    let (mut app, _request_rx, _reply_tx) = test_app();
    type_text(&mut app, "alice");

    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit());
    assert!(app.picked().is_none());
}

#[test]
fn test_enter_on_closed_menu_accepts_input() {
    let (mut app, _request_rx, _reply_tx) = test_app();
    type_text(&mut app, "alice.bsky.social");
    // No results delivered - the menu never opened

    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.should_quit());
    assert_eq!(app.picked(), Some("alice.bsky.social"));
}

#[test]
fn test_focus_loss_dismisses_after_grace_window() {
    let (mut app, _request_rx, reply_tx) = test_app();
    app.dismiss_timer = DismissTimer::new(0);
    type_text(&mut app, "alice");
    deliver_results(&mut app, &reply_tx, &["alice.bsky.social"]);

    app.handle_focus_lost();
    app.tick();

    assert!(!app.typeahead.is_open());
}

#[test]
fn test_focus_regained_cancels_dismissal() {
    let (mut app, _request_rx, reply_tx) = test_app();
    app.dismiss_timer = DismissTimer::new(0);
    type_text(&mut app, "alice");
    deliver_results(&mut app, &reply_tx, &["alice.bsky.social"]);

    app.handle_focus_lost();
    app.handle_focus_gained();
    app.tick();

    assert!(app.typeahead.is_open());
}

#[test]
fn test_pending_press_suppresses_focus_loss_dismissal() {
    let (mut app, _request_rx, reply_tx) = test_app();
    app.dismiss_timer = DismissTimer::new(0);
    type_text(&mut app, "alice");
    deliver_results(&mut app, &reply_tx, &["alice.bsky.social"]);

    app.typeahead.press_begin(0);
    app.handle_focus_lost();
    app.tick();

    assert!(app.typeahead.is_open());
}

#[test]
fn test_paste_triggers_search() {
    let (mut app, request_rx, _reply_tx) = test_app();

    app.handle_paste_event("alice".to_string());

    let requests: Vec<SearchRequest> = request_rx.try_iter().collect();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query, "alice");
}

#[test]
fn test_whitespace_only_query_counts_as_empty() {
    let (mut app, request_rx, _reply_tx) = test_app();

    type_text(&mut app, "   ");

    assert_eq!(request_rx.try_iter().count(), 0);
    assert!(!app.typeahead.is_open());
}
