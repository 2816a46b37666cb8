use ratatui::{
    Frame,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::theme::palette;
use crate::widgets::popup;

const MAX_WIDTH: u16 = 60;

pub fn render_notification(frame: &mut Frame, state: &NotificationState) {
    let Some(notification) = state.active() else {
        return;
    };

    let color = notification.notification_type.color();
    let width = (notification.message.chars().count() as u16 + 4).min(MAX_WIDTH);
    let area = popup::top_right_popup(frame.area(), width, 3);

    popup::clear_area(frame, area);

    let paragraph = Paragraph::new(Line::from(notification.message.as_str()))
        .style(Style::default().fg(color).bg(palette::BG_DARK))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(paragraph, area);
}
