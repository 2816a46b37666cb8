use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Anchor a popup directly beneath `anchor`, clamped to the frame
pub fn popup_below_anchor(
    anchor: Rect,
    frame_area: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y + anchor.height;
    let available_height = frame_area.height.saturating_sub(popup_y);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(frame_area.width.saturating_sub(popup_x)),
        height: height.min(available_height),
    }
}

/// Anchor a popup in the frame's top-right corner
pub fn top_right_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);

    Rect {
        x: frame_area.width.saturating_sub(popup_width),
        y: frame_area.y,
        width: popup_width,
        height: height.min(frame_area.height),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
