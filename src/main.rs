//! Interactive 3D cabinet configurator
//!
//! A parametric cabinet run rendered in a live viewport:
//! - Sliders for total width and the selected module's depth/height
//! - Three finishes, applied to the whole run
//! - Wide runs partition automatically into 60 cm modules
//! - Orbit camera with eased motion

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod cabinet;
mod scene;
mod settings;
mod ui;
mod viewer;

use macroquad::prelude::*;

use settings::Settings;
use ui::{MouseState, Rect, UiContext};
use viewer::{draw_controls, draw_status_bar, draw_viewport, ViewerState};

/// Fixed width of the control panel on the right.
const CONTROL_PANEL_WIDTH: f32 = 300.0;
const STATUS_BAR_HEIGHT: f32 = 22.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Cabinet Configurator v{}", VERSION),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        // Logical pixels equal physical pixels, which keeps the GL viewport
        // math for the 3D panel simple.
        high_dpi: false,
        ..Default::default()
    }
}

/// Settings come from assets/settings.ron on native builds; WASM has no
/// filesystem at startup and uses the defaults.
fn load_settings() -> Settings {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Settings::load_or_default("assets/settings.ron")
    }
    #[cfg(target_arch = "wasm32")]
    {
        Settings::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let settings = load_settings();
    let mut state = ViewerState::new(settings);
    let mut ui_ctx = UiContext::new();

    println!("=== Cabinet Configurator v{} ===", VERSION);

    loop {
        let now = get_time();
        ui_ctx.begin_frame(MouseState::poll());

        let screen = Rect::screen(screen_width(), screen_height());
        let status_rect = screen.slice_bottom(STATUS_BAR_HEIGHT);
        let work = screen.remaining_after_bottom(STATUS_BAR_HEIGHT);
        let (viewport_rect, panel_rect) = work.split_h_px(work.w - CONTROL_PANEL_WIDTH);

        clear_background(ui::BG_COLOR);
        draw_viewport(&mut ui_ctx, viewport_rect, &mut state);
        draw_controls(&mut ui_ctx, panel_rect, &mut state, now);
        draw_status_bar(status_rect, &state, now);

        state.update(get_frame_time(), now);

        next_frame().await
    }
}
