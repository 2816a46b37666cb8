use ratatui::{Frame, layout::Rect};

use super::input_state::InputState;

pub fn render_input(frame: &mut Frame, area: Rect, input: &InputState) {
    frame.render_widget(&input.textarea, area);
}
