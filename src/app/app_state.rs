use crate::config::Config;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::source::SourceState;
use crate::theme::MenuTheme;
use crate::typeahead::{DismissTimer, TypeaheadState};

/// Application state
pub struct App {
    pub input: InputState,
    pub typeahead: TypeaheadState,
    pub source: SourceState,
    pub dismiss_timer: DismissTimer,
    pub notification: NotificationState,
    pub menu_theme: MenuTheme,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    picked: Option<String>,
    dirty: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            typeahead: TypeaheadState::new(),
            source: SourceState::new(config.source.rows()),
            dismiss_timer: DismissTimer::default(),
            notification: NotificationState::new(),
            menu_theme: MenuTheme::from_config(&config.theme),
            layout_regions: LayoutRegions::default(),
            should_quit: false,
            picked: None,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The handle accepted on exit, if any
    pub fn picked(&self) -> Option<&str> {
        self.picked.as_deref()
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Current query text in the bound input
    pub fn query(&self) -> &str {
        self.input.value()
    }

    /// Every input edit funnels here: an empty query clears the menu without
    /// a fetch, anything else issues a bounded search.
    pub fn on_query_changed(&mut self) {
        let query = self.query().trim().to_string();

        if query.is_empty() {
            self.typeahead.clear();
            self.source.cancel_in_flight();
        } else {
            self.source.begin_search(&query);
        }
        self.mark_dirty();
    }

    /// Copy a row's handle into the input, clear the menu, raise the change
    /// notification
    pub fn select_row(&mut self, row: usize) {
        let Some(actor) = self.typeahead.actor(row) else {
            return;
        };
        let handle = actor.handle.clone();

        self.input.apply_selection(&handle);
        self.typeahead.clear();
        self.source.cancel_in_flight();
        self.mark_dirty();
    }

    /// Drain worker replies and surface a disconnect once
    pub fn poll_source(&mut self) {
        if self.source.poll_replies(&mut self.typeahead) {
            self.mark_dirty();
        }
        if self.source.take_disconnected() {
            self.notification
                .show_warning("Search unavailable: worker disconnected");
            self.mark_dirty();
        }
    }

    /// Per-loop housekeeping: grace-delayed dismissal and toast expiry
    pub fn tick(&mut self) {
        if self.dismiss_timer.is_expired() {
            self.dismiss_timer.cancel();
            // A pending press means a click is about to resolve; let it win
            if !self.typeahead.press_pending() && self.typeahead.is_open() {
                self.typeahead.dismiss();
                self.mark_dirty();
            }
        }

        if self.notification.expire() {
            self.mark_dirty();
        }
    }

    /// Accept the current input text as the picked handle and quit
    pub(super) fn accept_input(&mut self) {
        let value = self.query().trim().to_string();
        if !value.is_empty() {
            self.picked = Some(value);
        }
        self.should_quit = true;
    }
}
