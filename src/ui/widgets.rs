//! Basic UI widgets

use macroquad::prelude::*;

use super::theme::{
    ACCENT_COLOR, BUTTON_BG, BUTTON_HOVER, FONT_SIZE_CONTENT, FONT_SIZE_HEADER, ROW_HOVER,
    ROW_SELECTED, TEXT_COLOR, TEXT_DIM, TRACK_BG,
};
use super::{Rect, UiContext};

/// What a slider interaction produced this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    Idle,
    /// Knob is being dragged; the value follows the cursor but is display
    /// staging only until release.
    Dragged(f32),
    /// Drag released: commit the value to the model.
    Committed(f32),
}

/// Per-slider drag flag, owned by the caller across frames
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderState {
    active: bool,
}

/// Horizontal value slider: track, fill, handle.
///
/// Dragging reports `Dragged` every frame so the caller can stage the
/// readout; releasing reports `Committed` exactly once. Values snap to
/// `step` when it is positive.
pub fn slider(
    ctx: &mut UiContext,
    track_rect: Rect,
    state: &mut SliderState,
    value: f32,
    min: f32,
    max: f32,
    step: f32,
) -> SliderEvent {
    // Track background
    draw_rectangle(track_rect.x, track_rect.y, track_rect.w, track_rect.h, TRACK_BG);

    // Fill up to the current value
    let fill_ratio = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let fill_width = fill_ratio * track_rect.w;
    draw_rectangle(track_rect.x, track_rect.y, fill_width, track_rect.h, ACCENT_COLOR);

    // Handle
    let handle_x = (track_rect.x + fill_width - 2.0).max(track_rect.x);
    draw_rectangle(handle_x, track_rect.y, 4.0, track_rect.h, WHITE);

    // Interaction: only a press that starts on the track grabs the knob,
    // so camera drags passing over the panel leave it alone.
    let hovered = ctx.mouse.inside(&track_rect);
    if hovered && ctx.mouse.left_pressed && !state.active {
        state.active = true;
    }

    if !state.active {
        return SliderEvent::Idle;
    }

    let rel_x = ((ctx.mouse.x - track_rect.x) / track_rect.w).clamp(0.0, 1.0);
    let mut new_value = min + rel_x * (max - min);
    if step > 0.0 {
        new_value = min + ((new_value - min) / step).round() * step;
    }
    new_value = new_value.clamp(min, max);

    if ctx.mouse.left_down {
        SliderEvent::Dragged(new_value)
    } else {
        state.active = false;
        SliderEvent::Committed(new_value)
    }
}

/// Text button, returns true if clicked
pub fn button(ctx: &mut UiContext, rect: Rect, label: &str) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    let pressed = ctx.mouse.clicking(&rect);
    if hovered {
        ctx.set_hot(id);
    }

    let bg = if pressed {
        Color::from_rgba(60, 60, 70, 255)
    } else if hovered {
        BUTTON_HOVER
    } else {
        BUTTON_BG
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, Color::from_rgba(80, 80, 80, 255));

    let text_dims = measure_text(label, None, FONT_SIZE_HEADER as u16, 1.0);
    draw_text(
        label,
        (rect.center_x() - text_dims.width * 0.5).round(),
        (rect.center_y() + text_dims.height * 0.5).round(),
        FONT_SIZE_HEADER,
        if hovered { WHITE } else { TEXT_COLOR },
    );

    ctx.mouse.clicked(&rect)
}

/// Text button with active state (rounded accent background when active)
pub fn toggle_button(ctx: &mut UiContext, rect: Rect, label: &str, is_active: bool) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    let pressed = ctx.mouse.clicking(&rect);
    if hovered {
        ctx.set_hot(id);
    }

    let corner_radius = 4.0;
    if is_active {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, corner_radius, ACCENT_COLOR);
    } else if pressed {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, corner_radius, Color::from_rgba(60, 60, 70, 255));
    } else if hovered {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, corner_radius, Color::from_rgba(50, 50, 60, 255));
    }

    let text_color = if is_active {
        Color::new(0.05, 0.05, 0.08, 1.0)
    } else if hovered {
        WHITE
    } else {
        TEXT_COLOR
    };
    let text_dims = measure_text(label, None, FONT_SIZE_CONTENT as u16, 1.0);
    draw_text(
        label,
        (rect.center_x() - text_dims.width * 0.5).round(),
        (rect.center_y() + text_dims.height * 0.5).round(),
        FONT_SIZE_CONTENT,
        text_color,
    );

    ctx.mouse.clicked(&rect)
}

/// Section header text, dimmed
pub fn section_label(x: f32, y: f32, text: &str) {
    draw_text(text, x.round(), y.round(), FONT_SIZE_HEADER, TEXT_DIM);
}

/// Selectable list row with a title and a right-aligned detail.
/// Returns true if clicked.
pub fn select_row(
    ctx: &mut UiContext,
    rect: Rect,
    title: &str,
    detail: &str,
    is_selected: bool,
) -> bool {
    let hovered = ctx.mouse.inside(&rect);
    if is_selected {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, ROW_SELECTED);
    } else if hovered {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, ROW_HOVER);
    }

    let text_y = (rect.center_y() + FONT_SIZE_CONTENT * 0.35).round();
    draw_text(title, rect.x + 6.0, text_y, FONT_SIZE_CONTENT, TEXT_COLOR);

    let detail_dims = measure_text(detail, None, FONT_SIZE_CONTENT as u16, 1.0);
    draw_text(
        detail,
        (rect.right() - detail_dims.width - 6.0).round(),
        text_y,
        FONT_SIZE_CONTENT,
        TEXT_DIM,
    );

    ctx.mouse.clicked(&rect)
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    // Main body
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    // Corners (circles)
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}
