use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;

/// Timeout for event polling - keeps the grace timer and toast expiry ticking
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
                Event::FocusLost => self.handle_focus_lost(),
                Event::FocusGained => self.handle_focus_gained(),
                Event::Paste(text) => self.handle_paste_event(text),
                _ => {}
            }
        }

        self.tick();
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // ESC dismisses the menu, or quits once there's nothing to dismiss
        if key.code == KeyCode::Esc {
            if self.typeahead.is_open() {
                self.typeahead.dismiss();
                self.mark_dirty();
            } else {
                self.should_quit = true;
            }
            return;
        }

        // Menu navigation steals these keys while suggestions are showing
        if self.typeahead.is_open() {
            match key.code {
                KeyCode::Down => {
                    self.typeahead.navigate_down();
                    self.mark_dirty();
                    return;
                }
                KeyCode::Up => {
                    self.typeahead.navigate_up();
                    self.mark_dirty();
                    return;
                }
                KeyCode::Home => {
                    self.typeahead.navigate_to_start();
                    self.mark_dirty();
                    return;
                }
                KeyCode::End => {
                    self.typeahead.navigate_to_end();
                    self.mark_dirty();
                    return;
                }
                KeyCode::Enter => {
                    self.handle_confirm();
                    return;
                }
                _ => {}
            }
        } else if key.code == KeyCode::Enter {
            self.accept_input();
            return;
        }

        // Everything else edits the input
        if self.input.textarea.input(key) {
            self.on_query_changed();
        }
    }

    /// Confirm is a no-op unless a row is actively highlighted
    fn handle_confirm(&mut self) {
        if let Some(row) = self.typeahead.highlight() {
            self.select_row(row);
        }
    }

    /// Handle paste events from bracketed paste mode
    pub fn handle_paste_event(&mut self, text: String) {
        self.input.textarea.insert_str(&text);
        self.on_query_changed();
    }

    /// Terminal focus left the component: arm the dismissal grace window
    pub fn handle_focus_lost(&mut self) {
        self.dismiss_timer.arm();
    }

    pub fn handle_focus_gained(&mut self) {
        self.dismiss_timer.cancel();
    }
}
