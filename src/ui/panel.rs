//! Panel chrome: backgrounds, borders, title bars

use macroquad::prelude::*;

use super::Rect;

/// Height of a panel title bar
pub const PANEL_TITLE_HEIGHT: f32 = 20.0;

/// Draw a panel background with optional title
pub fn draw_panel(rect: Rect, title: Option<&str>, bg_color: Color) {
    // Background
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg_color);

    // Border
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, Color::from_rgba(80, 80, 80, 255));

    // Title bar if provided
    if let Some(title) = title {
        draw_rectangle(
            rect.x,
            rect.y,
            rect.w,
            PANEL_TITLE_HEIGHT,
            Color::from_rgba(50, 50, 60, 255),
        );
        draw_text(title, rect.x + 5.0, rect.y + 14.0, 16.0, WHITE);
    }
}

/// Get the content area of a panel (after title bar)
pub fn panel_content_rect(rect: Rect, has_title: bool) -> Rect {
    if has_title {
        rect.remaining_after_top(PANEL_TITLE_HEIGHT).pad(2.0)
    } else {
        rect.pad(2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_rect_sits_below_title() {
        let rect = Rect::new(0.0, 0.0, 300.0, 400.0);
        let content = panel_content_rect(rect, true);
        assert!(content.y >= PANEL_TITLE_HEIGHT);
        assert!(content.w < rect.w);
        assert!(content.bottom() <= rect.bottom());
    }

    #[test]
    fn test_content_rect_without_title_only_pads() {
        let rect = Rect::new(10.0, 10.0, 100.0, 100.0);
        let content = panel_content_rect(rect, false);
        assert!((content.x - 12.0).abs() < 0.001);
        assert!((content.y - 12.0).abs() < 0.001);
    }
}
