//! Layout module for tracking UI component regions
//!
//! Tracks where components were rendered last frame so mouse events can be
//! routed by position.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    Menu,
}

/// Screen rects recorded during render, consumed by mouse hit-testing
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub menu: Option<Rect>,
}

/// Which component is at the given screen position.
///
/// The menu is drawn over everything else, so it wins on overlap.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);

    if regions.menu.is_some_and(|r| r.contains(position)) {
        return Some(Region::Menu);
    }
    if regions.input_field.is_some_and(|r| r.contains(position)) {
        return Some(Region::InputField);
    }
    None
}
