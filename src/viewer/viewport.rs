//! 3D viewport: renders the cabinet run and owns camera input

use macroquad::prelude::*;

use crate::cabinet::cm_to_units;
use crate::ui::{Rect, UiContext, VIEWPORT_BG};

use super::ViewerState;

/// Draw the 3D view into `rect` and feed mouse input to the orbit camera.
pub fn draw_viewport(ctx: &mut UiContext, rect: Rect, state: &mut ViewerState) {
    // Backdrop behind the scene, drawn with the 2D camera.
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, VIEWPORT_BG);

    handle_camera_input(ctx, rect, state);

    // Restrict the 3D pass to the panel. The GL viewport wants physical
    // pixels with a bottom-left origin.
    let dpi = screen_dpi_scale();
    let viewport = (
        (rect.x * dpi) as i32,
        ((screen_height() - rect.bottom()) * dpi) as i32,
        (rect.w * dpi) as i32,
        (rect.h * dpi) as i32,
    );
    let fovy = state.settings.camera.fov_degrees.to_radians();
    set_camera(&state.camera.camera(fovy, rect.w / rect.h.max(1.0), Some(viewport)));

    draw_mesh(&state.scene.ground);

    // Modules are meshed in local space; place each one by its live
    // position so recentering never touches vertex data.
    for (module, meshes) in state.store.iter().zip(state.scene.module_meshes()) {
        let offset = vec3(cm_to_units(module.position_x), 0.0, 0.0);
        unsafe {
            get_internal_gl()
                .quad_gl
                .push_model_matrix(Mat4::from_translation(offset));
        }
        draw_mesh(&meshes.body);
        draw_mesh(&meshes.door);
        draw_mesh(&meshes.handle);
        unsafe {
            get_internal_gl().quad_gl.pop_model_matrix();
        }
    }

    set_default_camera();
}

/// Left-drag rotates, right-drag pans, wheel zooms. A drag only begins on
/// a press inside the viewport but keeps following the mouse after the
/// cursor leaves the panel.
fn handle_camera_input(ctx: &mut UiContext, rect: Rect, state: &mut ViewerState) {
    let inside = ctx.mouse.inside(&rect);

    if state.viewport_mouse_captured {
        if ctx.mouse.left_down || ctx.mouse.right_down {
            let dx = ctx.mouse.x - state.viewport_last_mouse.0;
            let dy = ctx.mouse.y - state.viewport_last_mouse.1;
            if ctx.mouse.left_down {
                state.camera.rotate(dx, dy);
            } else {
                state.camera.pan(dx, dy);
            }
        } else {
            state.viewport_mouse_captured = false;
        }
    } else if inside && (ctx.mouse.left_pressed || ctx.mouse.right_pressed) {
        state.viewport_mouse_captured = true;
    }
    state.viewport_last_mouse = (ctx.mouse.x, ctx.mouse.y);

    if inside && ctx.mouse.scroll != 0.0 {
        state.camera.zoom(ctx.mouse.scroll);
    }
}
