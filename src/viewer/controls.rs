//! Control panel and status bar

use macroquad::prelude::*;

use crate::cabinet::MaterialKind;
use crate::settings::SliderRange;
use crate::ui::{
    button, draw_panel, panel_content_rect, section_label, select_row, slider, toggle_button,
    Rect, SliderEvent, SliderState, UiContext, ACCENT_COLOR, FONT_SIZE_CONTENT, FONT_SIZE_HEADER,
    PANEL_BG, TEXT_COLOR, TEXT_DIM,
};

use super::ViewerState;

const ROW_GAP: f32 = 6.0;
const SECTION_GAP: f32 = 14.0;
const TRACK_HEIGHT: f32 = 12.0;
const LABEL_HEIGHT: f32 = 16.0;
const LIST_ROW_HEIGHT: f32 = 20.0;
const BUTTON_HEIGHT: f32 = 22.0;

/// Draw the right-hand control panel and apply whatever the user did.
pub fn draw_controls(ctx: &mut UiContext, rect: Rect, state: &mut ViewerState, now: f64) {
    draw_panel(rect, Some("Cabinet"), PANEL_BG);
    let content = panel_content_rect(rect, true).pad(6.0);
    let x = content.x;
    let w = content.w;
    let mut y = content.y + 4.0;

    // Dimensions: total width commits through the layout engine, depth and
    // height edit the selected module.
    section_label(x, y + 11.0, "Dimensions");
    y += LABEL_HEIGHT;

    let width_range = state.settings.total_width_range;
    let width_text = format!("{:.0} cm", state.total_width);
    let (event, next_y) = labeled_slider(
        ctx,
        x,
        y,
        w,
        &mut state.width_slider,
        "Width",
        &width_text,
        state.total_width,
        width_range,
        1.0,
    );
    match event {
        SliderEvent::Dragged(v) => state.total_width = v,
        SliderEvent::Committed(v) => state.apply_total_width(v, now),
        SliderEvent::Idle => {}
    }
    y = next_y;

    let depth_range = state.settings.depth_range;
    let depth_text = format!("{:.0} cm", state.depth);
    let (event, next_y) = labeled_slider(
        ctx,
        x,
        y,
        w,
        &mut state.depth_slider,
        "Depth",
        &depth_text,
        state.depth,
        depth_range,
        1.0,
    );
    match event {
        SliderEvent::Dragged(v) => state.depth = v,
        SliderEvent::Committed(v) => state.apply_selected_depth(v, now),
        SliderEvent::Idle => {}
    }
    y = next_y;

    let height_range = state.settings.height_range;
    let height_text = format!("{:.0} cm", state.height);
    let (event, next_y) = labeled_slider(
        ctx,
        x,
        y,
        w,
        &mut state.height_slider,
        "Height",
        &height_text,
        state.height,
        height_range,
        1.0,
    );
    match event {
        SliderEvent::Dragged(v) => state.height = v,
        SliderEvent::Committed(v) => state.apply_selected_height(v, now),
        SliderEvent::Idle => {}
    }
    y = next_y;

    // Finish: one selector for the whole run.
    y += SECTION_GAP - ROW_GAP;
    section_label(x, y + 11.0, "Finish");
    y += LABEL_HEIGHT;
    let button_w = (w - 8.0) / 3.0;
    for (i, kind) in MaterialKind::ALL.into_iter().enumerate() {
        let btn = Rect::new(x + i as f32 * (button_w + 4.0), y, button_w, BUTTON_HEIGHT);
        if toggle_button(ctx, btn, kind.label(), state.material == kind) {
            state.apply_material(kind);
        }
    }
    y += BUTTON_HEIGHT + ROW_GAP;

    // Lighting: the intensity preview follows the drag live.
    y += SECTION_GAP - ROW_GAP;
    section_label(x, y + 11.0, "Lighting");
    y += LABEL_HEIGHT;
    let light_range = state.settings.light_range;
    let light_text = format!("{:.2}x", state.light_intensity);
    let (event, next_y) = labeled_slider(
        ctx,
        x,
        y,
        w,
        &mut state.light_slider,
        "Intensity",
        &light_text,
        state.light_intensity,
        light_range,
        0.05,
    );
    match event {
        SliderEvent::Dragged(v) | SliderEvent::Committed(v) => {
            if (v - state.light_intensity).abs() > f32::EPSILON {
                state.apply_light_intensity(v);
            }
        }
        SliderEvent::Idle => {}
    }
    y = next_y;

    let reset = Rect::new(x, y, w, BUTTON_HEIGHT);
    if button(ctx, reset, "Reset Camera") {
        state.camera.reset();
    }
    y += BUTTON_HEIGHT + ROW_GAP;

    // Module list: click a row to retarget the depth/height sliders.
    y += SECTION_GAP - ROW_GAP;
    section_label(x, y + 11.0, &format!("Modules ({})", state.store.len()));
    y += LABEL_HEIGHT;

    let mut clicked = None;
    for (i, module) in state.store.iter().enumerate() {
        let row = Rect::new(x, y, w, LIST_ROW_HEIGHT);
        let detail = format!(
            "{:.0} x {:.0} x {:.0} cm",
            module.width, module.depth, module.height
        );
        if select_row(ctx, row, &format!("Module {}", i + 1), &detail, i == state.selected) {
            clicked = Some(i);
        }
        y += LIST_ROW_HEIGHT;
        if y > content.bottom() - LIST_ROW_HEIGHT {
            break;
        }
    }
    if let Some(i) = clicked {
        state.select_module(i, now);
    }
}

/// Bottom status line: run summary on the left, any transient message on
/// the right.
pub fn draw_status_bar(rect: Rect, state: &ViewerState, now: f64) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::from_rgba(40, 40, 45, 255));

    let status = match state.store.get(state.selected) {
        Ok(module) => format!(
            "Modules: {} | Total: {:.0} cm | Selected: {} ({:.0} x {:.0} x {:.0} cm) | {}",
            state.store.len(),
            state.store.total_width(),
            state.selected + 1,
            module.width,
            module.depth,
            module.height,
            state.material.label(),
        ),
        Err(_) => format!("Modules: {}", state.store.len()),
    };
    draw_text(&status, rect.x + 8.0, rect.y + 15.0, FONT_SIZE_HEADER, WHITE);

    if let Some(message) = state.status(now) {
        let dims = measure_text(message, None, FONT_SIZE_HEADER as u16, 1.0);
        draw_text(
            message,
            (rect.right() - dims.width - 8.0).round(),
            rect.y + 15.0,
            FONT_SIZE_HEADER,
            ACCENT_COLOR,
        );
    }
}

/// Label and value readout above a slider track.
fn labeled_slider(
    ctx: &mut UiContext,
    x: f32,
    y: f32,
    w: f32,
    slider_state: &mut SliderState,
    label: &str,
    value_text: &str,
    value: f32,
    range: SliderRange,
    step: f32,
) -> (SliderEvent, f32) {
    draw_text(label, x.round(), (y + 11.0).round(), FONT_SIZE_HEADER, TEXT_COLOR);
    let dims = measure_text(value_text, None, FONT_SIZE_CONTENT as u16, 1.0);
    draw_text(
        value_text,
        (x + w - dims.width).round(),
        (y + 11.0).round(),
        FONT_SIZE_CONTENT,
        TEXT_DIM,
    );

    let track = Rect::new(x, y + LABEL_HEIGHT, w, TRACK_HEIGHT);
    let event = slider(ctx, track, slider_state, value, range.min, range.max, step);
    (event, y + LABEL_HEIGHT + TRACK_HEIGHT + ROW_GAP)
}
