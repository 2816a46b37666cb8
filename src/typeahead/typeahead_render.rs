use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::typeahead_state::TypeaheadState;
use crate::theme::MenuTheme;
use crate::widgets::popup;

const MENU_BORDER_HEIGHT: u16 = 2;
const MENU_OFFSET_X: u16 = 1;
const AVATAR_CELL_WIDTH: usize = 2;
const MIN_MENU_WIDTH: u16 = 20;

/// Render the suggestion menu beneath the input.
///
/// One row per actor, in list order, highlighted row marked. Returns the
/// menu's screen rect for mouse hit-testing, or `None` when the list is
/// empty and nothing is drawn.
pub fn render_menu(
    frame: &mut Frame,
    input_area: Rect,
    state: &TypeaheadState,
    theme: &MenuTheme,
) -> Option<Rect> {
    if state.is_empty() {
        return None;
    }

    let menu_area = menu_area(frame.area(), input_area, state, theme);
    if menu_area.height <= MENU_BORDER_HEIGHT || menu_area.width <= 2 {
        return None;
    }

    // Text width inside borders and padding
    let chrome = theme.padding.saturating_mul(2).saturating_add(2);
    let inner_width = menu_area.width.saturating_sub(chrome) as usize;
    let handle_width = inner_width.saturating_sub(AVATAR_CELL_WIDTH);
    let pad = " ".repeat(theme.padding as usize);

    let items: Vec<ListItem> = state
        .actors()
        .iter()
        .enumerate()
        .map(|(i, actor)| {
            let avatar_color = theme.avatar_color(&actor.handle, actor.avatar.is_some());
            let handle = truncate_handle(&actor.handle, handle_width);
            let padding_needed = handle_width.saturating_sub(handle.chars().count());
            let fill = " ".repeat(padding_needed);

            let line = if state.highlight() == Some(i) {
                let active = Style::default()
                    .fg(theme.highlight_fg)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD);
                Line::from(vec![
                    Span::styled(pad.clone(), active),
                    Span::styled("● ", Style::default().fg(avatar_color).bg(theme.highlight_bg)),
                    Span::styled(format!("{}{}", handle, fill), active),
                    Span::styled(pad.clone(), active),
                ])
            } else {
                let normal = Style::default().fg(theme.handle).bg(theme.background);
                Line::from(vec![
                    Span::styled(pad.clone(), normal),
                    Span::styled("● ", Style::default().fg(avatar_color).bg(theme.background)),
                    Span::styled(format!("{}{}", handle, fill), normal),
                    Span::styled(pad.clone(), normal),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, menu_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.background)),
    );

    frame.render_widget(list, menu_area);

    Some(menu_area)
}

fn menu_area(
    frame_area: Rect,
    input_area: Rect,
    state: &TypeaheadState,
    theme: &MenuTheme,
) -> Rect {
    let height = state.len() as u16 + MENU_BORDER_HEIGHT;

    let widest_handle = state
        .actors()
        .iter()
        .map(|a| a.handle.chars().count())
        .max()
        .unwrap_or(0);
    let chrome = theme.padding.saturating_mul(2).saturating_add(2);
    let width = ((widest_handle + AVATAR_CELL_WIDTH).min(u16::MAX as usize) as u16)
        .saturating_add(chrome)
        .max(MIN_MENU_WIDTH)
        .min(input_area.width.saturating_sub(MENU_OFFSET_X));

    popup::popup_below_anchor(input_area, frame_area, width, height, MENU_OFFSET_X)
}

/// Truncate a handle to `max` cells, never wrapping
fn truncate_handle(handle: &str, max: usize) -> String {
    if handle.chars().count() <= max {
        return handle.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out: String = handle.chars().take(max - 1).collect();
    out.push('…');
    out
}
