use crate::actor::Actor;

/// Selection state for the suggestion menu.
///
/// The list is replaced wholesale on every search reply and never mutated in
/// place. The highlight is `None` (nothing selected) or an index into the
/// current list; replacing the list always resets it. `press` remembers the
/// row under an unresolved pointer press so a focus-loss dismissal doesn't
/// race a click.
#[derive(Debug, Clone, Default)]
pub struct TypeaheadState {
    actors: Vec<Actor>,
    highlight: Option<usize>,
    press: Option<usize>,
}

impl TypeaheadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the suggestion list; the highlight always resets
    pub fn replace_actors(&mut self, actors: Vec<Actor>) {
        self.actors = actors;
        self.highlight = None;
    }

    /// Drop the list and highlight (empty query, Escape, selection, focus loss)
    pub fn clear(&mut self) {
        self.actors.clear();
        self.highlight = None;
    }

    pub fn dismiss(&mut self) {
        self.clear();
    }

    pub fn is_open(&self) -> bool {
        !self.actors.is_empty()
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Move the highlight down one row, clamped to the last real row
    pub fn navigate_down(&mut self) {
        if self.actors.is_empty() {
            return;
        }
        let last = self.actors.len() - 1;
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// Move the highlight up one row, clamped to the first
    pub fn navigate_up(&mut self) {
        if self.actors.is_empty() {
            return;
        }
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(i) => i.saturating_sub(1),
        });
    }

    pub fn navigate_to_start(&mut self) {
        if self.actors.is_empty() {
            return;
        }
        self.highlight = Some(0);
    }

    pub fn navigate_to_end(&mut self) {
        if self.actors.is_empty() {
            return;
        }
        self.highlight = Some(self.actors.len() - 1);
    }

    /// The actor a Confirm event resolves to. `None` unless a row is
    /// actively highlighted - Confirm is a no-op otherwise.
    pub fn confirmed(&self) -> Option<&Actor> {
        self.highlight.and_then(|i| self.actors.get(i))
    }

    pub fn actor(&self, row: usize) -> Option<&Actor> {
        self.actors.get(row)
    }

    /// Record a pointer press on a row; resolved by the matching release
    pub fn press_begin(&mut self, row: usize) {
        self.press = Some(row);
    }

    /// Resolve a pending press, returning the pressed row if it still exists
    pub fn press_resolve(&mut self) -> Option<usize> {
        let row = self.press.take()?;
        if row < self.actors.len() { Some(row) } else { None }
    }

    pub fn press_cancel(&mut self) {
        self.press = None;
    }

    pub fn press_pending(&self) -> bool {
        self.press.is_some()
    }
}

#[cfg(test)]
#[path = "typeahead_state_tests.rs"]
mod typeahead_state_tests;
