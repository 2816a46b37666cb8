use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::theme;

/// Synthetic change notification raised when a selection writes into the
/// bound input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
}

pub struct InputState {
    pub textarea: TextArea<'static>,
    changes: Vec<ChangeEvent>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Handle ")
                .border_style(Style::default().fg(theme::input::BORDER_FOCUSED)),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::input::CURSOR);

        Self {
            textarea,
            changes: Vec::new(),
        }
    }

    /// Current input text
    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the input value with a selected handle and queue the change
    /// notification. Typing never raises one - only selections do.
    pub fn apply_selection(&mut self, handle: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(handle);
        self.changes.push(ChangeEvent {
            value: handle.to_string(),
        });
    }

    /// Hand pending change notifications to the host
    pub fn drain_changes(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.changes)
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
