use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::input::render_input;
use crate::notification::render_notification;
use crate::theme;
use crate::typeahead::render_menu;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let input_area = chunks[0];
        render_input(frame, input_area, &self.input);
        self.layout_regions.input_field = Some(input_area);

        // The menu rect feeds mouse hit-testing; None while collapsed
        self.layout_regions.menu =
            render_menu(frame, input_area, &self.typeahead, &self.menu_theme);

        render_hints(frame, chunks[2]);
        render_notification(frame, &self.notification);
    }
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hint_style = Style::default().fg(theme::input::HINT);
    let hints = Line::from(vec![
        Span::styled(" ↑/↓ navigate", hint_style),
        Span::styled("  Enter select", hint_style),
        Span::styled("  Esc dismiss/quit", hint_style),
    ]);

    frame.render_widget(Paragraph::new(hints), area);
}
