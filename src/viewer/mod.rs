//! Viewer state: the link between the UI and the cabinet model
//!
//! Owns the module store, the current selection, the staged slider values,
//! and the scene. UI code calls the methods here; they route changes
//! through the layout engine, feed the resulting events to the scene, and
//! turn errors into status messages instead of letting them escape.

mod camera;
mod controls;
mod viewport;

pub use camera::{OrbitCamera, OrbitPose};
pub use controls::{draw_controls, draw_status_bar};
pub use viewport::draw_viewport;

use macroquad::prelude::vec3;

use crate::cabinet::{
    self, CabinetError, CabinetModule, Dimensions, MaterialKind, ModuleStore,
};
use crate::scene::SceneModel;
use crate::settings::Settings;
use crate::ui::SliderState;

/// How long status messages linger, in seconds.
const STATUS_SECS: f64 = 4.0;

pub struct ViewerState {
    pub store: ModuleStore,
    /// Which module the depth/height sliders edit.
    pub selected: usize,
    pub scene: SceneModel,
    pub camera: OrbitCamera,
    pub settings: Settings,

    /// Slider readouts. They mirror the model except mid-drag, when they
    /// follow the cursor until the drag commits.
    pub total_width: f32,
    pub depth: f32,
    pub height: f32,
    pub material: MaterialKind,
    pub light_intensity: f32,

    pub width_slider: SliderState,
    pub depth_slider: SliderState,
    pub height_slider: SliderState,
    pub light_slider: SliderState,

    /// Camera drag bookkeeping for the viewport.
    pub viewport_mouse_captured: bool,
    pub viewport_last_mouse: (f32, f32),

    /// Transient status line: message and expiry timestamp.
    pub status_message: Option<(String, f64)>,
}

impl ViewerState {
    pub fn new(settings: Settings) -> Self {
        let mut store = ModuleStore::new(CabinetModule::with_dimensions(
            Dimensions::DEFAULT,
            MaterialKind::default(),
        ));
        // Run the initial module through the same layout pass as any edit
        // so it starts centered.
        if let Err(e) = cabinet::apply_total_width(&mut store, Dimensions::DEFAULT.width, 0) {
            eprintln!("Initial layout failed: {}", e);
        }

        // Keep the starting light level inside the slider's range so the
        // control is never pegged out of reach.
        let light_intensity = settings.light_range.clamp(settings.light_intensity);
        let scene = SceneModel::new(&store, light_intensity);
        let camera = OrbitCamera::new(OrbitPose {
            target: vec3(0.0, 0.0, 0.0),
            azimuth: settings.camera.azimuth,
            elevation: settings.camera.elevation,
            distance: settings.camera.distance,
        });

        let mut state = Self {
            total_width: 0.0,
            depth: 0.0,
            height: 0.0,
            material: MaterialKind::default(),
            light_intensity,
            store,
            selected: 0,
            scene,
            camera,
            settings,
            width_slider: SliderState::default(),
            depth_slider: SliderState::default(),
            height_slider: SliderState::default(),
            light_slider: SliderState::default(),
            viewport_mouse_captured: false,
            viewport_last_mouse: (0.0, 0.0),
            status_message: None,
        };
        state.sync_from_store();
        state
    }

    /// Commit a new total run width (width slider released).
    pub fn apply_total_width(&mut self, total_width: f32, now: f64) {
        match cabinet::apply_total_width(&mut self.store, total_width, self.selected) {
            Ok(events) => {
                self.scene.apply_events(&self.store, &events);
                self.clamp_selection();
                self.sync_from_store();
            }
            Err(e) => self.report(e, now),
        }
    }

    /// Commit a new depth for the selected module.
    pub fn apply_selected_depth(&mut self, depth: f32, now: f64) {
        let height = match self.store.get(self.selected) {
            Ok(module) => module.height,
            Err(e) => return self.report(e, now),
        };
        self.apply_selected_size(depth, height, now);
    }

    /// Commit a new height for the selected module.
    pub fn apply_selected_height(&mut self, height: f32, now: f64) {
        let depth = match self.store.get(self.selected) {
            Ok(module) => module.depth,
            Err(e) => return self.report(e, now),
        };
        self.apply_selected_size(depth, height, now);
    }

    fn apply_selected_size(&mut self, depth: f32, height: f32, now: f64) {
        match cabinet::update_module_depth_height(&mut self.store, self.selected, depth, height) {
            Ok(event) => {
                self.scene.apply_events(&self.store, &[event]);
                self.sync_from_store();
            }
            Err(e) => self.report(e, now),
        }
    }

    /// Swap the finish on the whole run.
    pub fn apply_material(&mut self, material: MaterialKind) {
        cabinet::set_material(&mut self.store, material);
        self.material = material;
        self.scene.rebuild_all(&self.store);
    }

    /// Change the master light level and rebake the scene.
    pub fn apply_light_intensity(&mut self, intensity: f32) {
        self.light_intensity = intensity;
        self.scene.set_light_intensity(&self.store, intensity);
    }

    /// Point the depth/height sliders at another module. An out-of-range
    /// index is reported and otherwise ignored.
    pub fn select_module(&mut self, index: usize, now: f64) {
        if index < self.store.len() {
            self.selected = index;
            self.sync_from_store();
        } else {
            self.report(
                CabinetError::IndexOutOfRange {
                    index,
                    len: self.store.len(),
                },
                now,
            );
        }
    }

    /// Keep the selection on a live module after the run shrinks.
    fn clamp_selection(&mut self) {
        if self.selected >= self.store.len() {
            self.selected = self.store.len() - 1;
        }
    }

    /// Refresh the slider readouts from the model.
    pub fn sync_from_store(&mut self) {
        self.total_width = self.store.total_width();
        if let Ok(module) = self.store.get(self.selected) {
            self.depth = module.depth;
            self.height = module.height;
            self.material = module.material;
        }
    }

    fn report(&mut self, error: CabinetError, now: f64) {
        eprintln!("Rejected: {}", error);
        self.status_message = Some((error.to_string(), now + STATUS_SECS));
    }

    /// Status text, if one is showing.
    pub fn status(&self, now: f64) -> Option<&str> {
        match &self.status_message {
            Some((text, expiry)) if now < *expiry => Some(text),
            _ => None,
        }
    }

    /// Per-frame upkeep: camera easing and message expiry.
    pub fn update(&mut self, dt: f32, now: f64) {
        self.camera.update(dt);
        let expired = self
            .status_message
            .as_ref()
            .is_some_and(|(_, expiry)| now >= *expiry);
        if expired {
            self.status_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> ViewerState {
        ViewerState::new(Settings::default())
    }

    #[test]
    fn test_starts_with_one_centered_module() {
        let state = fresh();
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.scene.module_meshes().len(), 1);
        assert!((state.total_width - 60.0).abs() < 0.001);
        assert!((state.store.get(0).unwrap().position_x + 30.0).abs() < 0.001);
    }

    #[test]
    fn test_width_commit_updates_store_scene_and_readout() {
        let mut state = fresh();
        state.apply_total_width(150.0, 0.0);
        assert_eq!(state.store.len(), 3);
        assert_eq!(state.scene.module_meshes().len(), 3);
        assert!((state.total_width - 150.0).abs() < 0.001);
        assert!(state.status(0.0).is_none());
    }

    #[test]
    fn test_invalid_width_reports_and_keeps_model() {
        let mut state = fresh();
        state.apply_total_width(150.0, 0.0);
        state.apply_total_width(-5.0, 1.0);
        assert_eq!(state.store.len(), 3);
        assert!(state.status(1.0).is_some());
    }

    #[test]
    fn test_status_message_expires() {
        let mut state = fresh();
        state.apply_total_width(0.0, 10.0);
        assert!(state.status(10.0).is_some());
        assert!(state.status(10.0 + STATUS_SECS + 0.1).is_none());
        state.update(0.016, 10.0 + STATUS_SECS + 0.1);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_shrink_clamps_selection() {
        let mut state = fresh();
        state.apply_total_width(180.0, 0.0);
        state.select_module(2, 0.0);
        state.apply_total_width(60.0, 1.0);
        assert_eq!(state.selected, 0);
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn test_select_out_of_range_is_swallowed() {
        let mut state = fresh();
        state.apply_total_width(120.0, 0.0);
        state.select_module(1, 0.0);
        state.select_module(9, 1.0);
        assert_eq!(state.selected, 1);
        assert!(state.status(1.0).is_some());
    }

    #[test]
    fn test_selection_drives_depth_height_edits() {
        let mut state = fresh();
        state.apply_total_width(120.0, 0.0);
        state.select_module(1, 0.0);
        state.apply_selected_depth(40.0, 0.0);
        state.apply_selected_height(90.0, 0.0);
        assert!((state.store.get(1).unwrap().depth - 40.0).abs() < 0.001);
        assert!((state.store.get(1).unwrap().height - 90.0).abs() < 0.001);
        assert!((state.store.get(0).unwrap().depth - 60.0).abs() < 0.001);
        assert!((state.depth - 40.0).abs() < 0.001);
        assert!((state.height - 90.0).abs() < 0.001);
    }

    #[test]
    fn test_selecting_a_module_refreshes_readouts() {
        let mut state = fresh();
        state.apply_total_width(120.0, 0.0);
        state.apply_selected_depth(35.0, 0.0);
        state.select_module(1, 0.0);
        assert!((state.depth - 60.0).abs() < 0.001);
        state.select_module(0, 0.0);
        assert!((state.depth - 35.0).abs() < 0.001);
    }

    #[test]
    fn test_material_applies_to_every_module() {
        let mut state = fresh();
        state.apply_total_width(180.0, 0.0);
        state.apply_material(MaterialKind::Black);
        assert!(state.store.iter().all(|m| m.material == MaterialKind::Black));
        assert_eq!(state.material, MaterialKind::Black);
    }

    #[test]
    fn test_light_commit_rebakes_scene() {
        let mut state = fresh();
        state.apply_total_width(120.0, 0.0);
        state.apply_light_intensity(0.4);
        assert!((state.light_intensity - 0.4).abs() < 0.001);
        assert_eq!(state.scene.module_meshes().len(), 2);
    }

    #[test]
    fn test_invalid_depth_keeps_readout_on_model() {
        let mut state = fresh();
        state.apply_selected_depth(0.0, 0.0);
        assert!((state.store.get(0).unwrap().depth - 60.0).abs() < 0.001);
        assert!((state.depth - 60.0).abs() < 0.001);
        assert!(state.status(0.0).is_some());
    }
}
