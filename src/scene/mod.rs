//! Scene model: renderable meshes derived from the cabinet run
//!
//! Owns one mesh set per module plus the ground plane, and applies layout
//! events so only affected modules get remeshed. Positions are not baked
//! in; the viewport translates each module by its live `position_x` when
//! drawing.

mod geometry;
mod lighting;
mod materials;

pub use geometry::ModuleMeshes;

use lighting::LightRig;
use macroquad::models::Mesh;

use crate::cabinet::{LayoutEvent, ModuleStore};

pub struct SceneModel {
    pub ground: Mesh,
    modules: Vec<ModuleMeshes>,
    rig: LightRig,
}

impl SceneModel {
    /// Mesh the store's current contents from scratch.
    pub fn new(store: &ModuleStore, light_intensity: f32) -> Self {
        let rig = LightRig::with_intensity(light_intensity);
        let mut scene = Self {
            ground: geometry::ground_mesh(&rig),
            modules: Vec::new(),
            rig,
        };
        scene.rebuild_all(store);
        scene
    }

    pub fn module_meshes(&self) -> &[ModuleMeshes] {
        &self.modules
    }

    /// Apply layout change events against the store's post-layout state:
    /// build meshes for added modules, drop removed ones, remesh resized
    /// ones. Events arrive in the order the layout pass produced them.
    pub fn apply_events(&mut self, store: &ModuleStore, events: &[LayoutEvent]) {
        for event in events {
            match *event {
                LayoutEvent::Added { index } => {
                    if let Ok(module) = store.get(index) {
                        let meshes = geometry::build_module(module, &self.rig);
                        if index == self.modules.len() {
                            self.modules.push(meshes);
                        } else if index < self.modules.len() {
                            self.modules[index] = meshes;
                        }
                    }
                }
                LayoutEvent::Removed { index } => {
                    if index < self.modules.len() {
                        self.modules.remove(index);
                    }
                }
                LayoutEvent::Resized { index } => {
                    if index < self.modules.len() {
                        if let Ok(module) = store.get(index) {
                            self.modules[index] = geometry::build_module(module, &self.rig);
                        }
                    }
                }
            }
        }
        debug_assert_eq!(self.modules.len(), store.len());
    }

    /// Remesh every module (finish changed run-wide).
    pub fn rebuild_all(&mut self, store: &ModuleStore) {
        self.modules = store
            .iter()
            .map(|module| geometry::build_module(module, &self.rig))
            .collect();
    }

    /// Swap the light rig to a new master intensity and rebake everything,
    /// ground included.
    pub fn set_light_intensity(&mut self, store: &ModuleStore, intensity: f32) {
        self.rig = LightRig::with_intensity(intensity);
        self.ground = geometry::ground_mesh(&self.rig);
        self.rebuild_all(store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cabinet::{self, CabinetModule, MaterialKind, ModuleStore};

    fn store_with_total(total: f32) -> ModuleStore {
        let mut store = ModuleStore::new(CabinetModule::new(60.0, 60.0, 60.0, MaterialKind::Wood));
        cabinet::apply_total_width(&mut store, total, 0).unwrap();
        store
    }

    #[test]
    fn test_scene_meshes_every_module() {
        let store = store_with_total(150.0);
        let scene = SceneModel::new(&store, 1.0);
        assert_eq!(scene.module_meshes().len(), 3);
        assert!(!scene.ground.vertices.is_empty());
    }

    #[test]
    fn test_grow_events_extend_the_scene() {
        let mut store = store_with_total(60.0);
        let mut scene = SceneModel::new(&store, 1.0);
        let events = cabinet::apply_total_width(&mut store, 180.0, 0).unwrap();
        scene.apply_events(&store, &events);
        assert_eq!(scene.module_meshes().len(), 3);
    }

    #[test]
    fn test_shrink_events_drop_meshes() {
        let mut store = store_with_total(180.0);
        let mut scene = SceneModel::new(&store, 1.0);
        let events = cabinet::apply_total_width(&mut store, 61.0, 0).unwrap();
        scene.apply_events(&store, &events);
        assert_eq!(scene.module_meshes().len(), 2);
    }

    #[test]
    fn test_resize_event_remeshes_in_place() {
        let mut store = store_with_total(120.0);
        let mut scene = SceneModel::new(&store, 1.0);
        let event = cabinet::update_module_depth_height(&mut store, 1, 40.0, 100.0).unwrap();
        scene.apply_events(&store, &[event]);
        assert_eq!(scene.module_meshes().len(), 2);
        let heights: Vec<f32> = scene.module_meshes()[1]
            .body
            .vertices
            .iter()
            .map(|v| v.position.y)
            .collect();
        let max_y = heights.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        assert!((max_y - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_light_change_keeps_mesh_counts() {
        let store = store_with_total(150.0);
        let mut scene = SceneModel::new(&store, 1.0);
        scene.set_light_intensity(&store, 0.3);
        assert_eq!(scene.module_meshes().len(), 3);
        assert!((scene.rig.key.intensity - 0.3).abs() < 0.001);
    }

    #[test]
    fn test_events_round_trip_matches_full_rebuild() {
        // Apply a grow and a shrink through events, then compare counts
        // with a scene meshed from scratch.
        let mut store = store_with_total(60.0);
        let mut scene = SceneModel::new(&store, 1.0);
        for total in [150.0, 300.0, 45.0, 121.0] {
            let events = cabinet::apply_total_width(&mut store, total, 0).unwrap();
            scene.apply_events(&store, &events);
            assert_eq!(scene.module_meshes().len(), store.len());
        }
    }
}
