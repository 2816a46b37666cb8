//! Mouse handling
//!
//! Press on a suggestion row sets the press flag; release on the same row
//! resolves the selection. A press-release pair split across rows selects
//! nothing, and clicks outside the menu dismiss it.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::layout::{Region, region_at};

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_mouse_down(mouse),
            MouseEventKind::Up(MouseButton::Left) => self.handle_mouse_up(mouse),
            _ => {}
        }
    }

    fn handle_mouse_down(&mut self, mouse: MouseEvent) {
        match region_at(&self.layout_regions, mouse.column, mouse.row) {
            Some(Region::Menu) => {
                if let Some(row) = self.menu_row_at(mouse.row) {
                    self.typeahead.press_begin(row);
                }
            }
            Some(Region::InputField) => {}
            None => {
                if self.typeahead.is_open() {
                    self.typeahead.dismiss();
                    self.mark_dirty();
                }
            }
        }
    }

    fn handle_mouse_up(&mut self, mouse: MouseEvent) {
        let Some(pressed_row) = self.typeahead.press_resolve() else {
            return;
        };

        let released_row = match region_at(&self.layout_regions, mouse.column, mouse.row) {
            Some(Region::Menu) => self.menu_row_at(mouse.row),
            _ => None,
        };

        if released_row == Some(pressed_row) {
            self.select_row(pressed_row);
        }
    }

    /// Map a screen row to a menu row index, accounting for the top border
    fn menu_row_at(&self, screen_row: u16) -> Option<usize> {
        let menu = self.layout_regions.menu?;
        let inner_top = menu.y + 1;
        let inner_bottom = menu.y + menu.height.saturating_sub(1);

        if screen_row < inner_top || screen_row >= inner_bottom {
            return None;
        }

        let row = (screen_row - inner_top) as usize;
        (row < self.typeahead.len()).then_some(row)
    }
}
