//! Layout engine: partitions a requested total width into modules and
//! keeps the run centered
//!
//! The rules mirror the physical product line: every module except the
//! last is exactly `MODULE_QUANTUM` wide, the last module takes the
//! remainder (however small), and the whole run is centered on x = 0.

use super::{check_dimension, CabinetError, CabinetModule, MaterialKind, ModuleStore, MODULE_QUANTUM};

/// Width changes smaller than this are treated as no change at all, so
/// re-applying the same total width stays silent.
const WIDTH_EPSILON: f32 = 0.0001;

/// Change notifications produced by a layout pass, in application order.
/// The scene layer consumes these to build, drop, or rebuild meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    /// A module was appended at `index`.
    Added { index: usize },
    /// The module that was at `index` was removed.
    Removed { index: usize },
    /// An existing module changed size.
    Resized { index: usize },
}

/// Number of modules a run of `total_width` cm requires: one per started
/// quantum, never less than one.
pub fn required_modules(total_width: f32) -> usize {
    ((total_width / MODULE_QUANTUM).ceil() as usize).max(1)
}

/// Re-partition the run to `total_width` cm.
///
/// Grows or shrinks the store to `required_modules(total_width)`, assigns
/// per-module widths (quantum for all but the last, remainder to the
/// last), and recenters the run. New modules copy the selected module's
/// depth and height and the first module's finish; `selected` may be stale
/// after a shrink and falls back to the last module. Returns the change
/// events in the order they happened.
///
/// Applying the same width twice is a no-op the second time: same widths,
/// same positions, no events.
pub fn apply_total_width(
    store: &mut ModuleStore,
    total_width: f32,
    selected: usize,
) -> Result<Vec<LayoutEvent>, CabinetError> {
    check_dimension("total width", total_width)?;

    let needed = required_modules(total_width);
    let mut events = Vec::new();

    // Shrink from the right end. `needed` is at least 1, so this never
    // trips the one-module floor.
    while store.len() > needed {
        let index = store.len() - 1;
        store.remove_last()?;
        events.push(LayoutEvent::Removed { index });
    }

    // Modules that predate this call; only these can emit Resized.
    let surviving = store.len();

    if store.len() < needed {
        let template = *store.get(selected.min(store.len() - 1))?;
        let material = store.get(0)?.material;
        while store.len() < needed {
            let len = store.append(CabinetModule::new(
                MODULE_QUANTUM,
                template.depth,
                template.height,
                material,
            ));
            events.push(LayoutEvent::Added { index: len - 1 });
        }
    }

    // Width pass: quantum everywhere except the last module, which takes
    // the remainder so the widths sum to `total_width` exactly.
    let count = store.len();
    for index in 0..count {
        let target = if index + 1 < count {
            MODULE_QUANTUM
        } else {
            total_width - (count as f32 - 1.0) * MODULE_QUANTUM
        };
        let module = store.get_mut(index)?;
        if (module.width - target).abs() > WIDTH_EPSILON {
            module.width = target;
            if index < surviving {
                events.push(LayoutEvent::Resized { index });
            }
        }
    }

    reposition(store);
    Ok(events)
}

/// Change one module's depth and height in place.
///
/// Validates before mutating: on any error the store is untouched. Width
/// and positions are unaffected, so the rest of the run never shifts.
pub fn update_module_depth_height(
    store: &mut ModuleStore,
    index: usize,
    depth: f32,
    height: f32,
) -> Result<LayoutEvent, CabinetError> {
    check_dimension("depth", depth)?;
    check_dimension("height", height)?;
    let module = store.get_mut(index)?;
    module.depth = depth;
    module.height = height;
    Ok(LayoutEvent::Resized { index })
}

/// Apply one finish to every module. The selector is run-wide; the product
/// line does not offer mixed finishes.
pub fn set_material(store: &mut ModuleStore, material: MaterialKind) {
    for module in store.iter_mut() {
        module.material = material;
    }
}

/// Recompute every module's x so the run is centered at 0: the leftmost
/// module starts at -total/2 and positions accumulate left to right.
fn reposition(store: &mut ModuleStore) {
    let total = store.total_width();
    let mut x = -total / 2.0;
    for module in store.iter_mut() {
        module.position_x = x;
        x += module.width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_store() -> ModuleStore {
        ModuleStore::new(CabinetModule::new(60.0, 60.0, 60.0, MaterialKind::Wood))
    }

    fn widths(store: &ModuleStore) -> Vec<f32> {
        store.iter().map(|m| m.width).collect()
    }

    fn positions(store: &ModuleStore) -> Vec<f32> {
        store.iter().map(|m| m.position_x).collect()
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 0.001, "{} != {}", a, b);
    }

    #[test]
    fn test_required_modules_per_started_quantum() {
        assert_eq!(required_modules(1.0), 1);
        assert_eq!(required_modules(59.9), 1);
        assert_eq!(required_modules(60.0), 1);
        assert_eq!(required_modules(61.0), 2);
        assert_eq!(required_modules(120.0), 2);
        assert_eq!(required_modules(150.0), 3);
        assert_eq!(required_modules(300.0), 5);
    }

    #[test]
    fn test_exact_quantum_is_one_module() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 60.0, 0).unwrap();
        assert_eq!(widths(&store), vec![60.0]);
    }

    #[test]
    fn test_one_cm_over_quantum_splits_in_two() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 61.0, 0).unwrap();
        assert_eq!(store.len(), 2);
        assert_close(store.get(0).unwrap().width, 60.0);
        assert_close(store.get(1).unwrap().width, 1.0);
    }

    #[test]
    fn test_exact_multiple_gives_equal_modules() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 120.0, 0).unwrap();
        assert_eq!(widths(&store), vec![60.0, 60.0]);
    }

    #[test]
    fn test_remainder_goes_to_last_module() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 150.0, 0).unwrap();
        assert_eq!(store.len(), 3);
        assert_close(store.get(0).unwrap().width, 60.0);
        assert_close(store.get(1).unwrap().width, 60.0);
        assert_close(store.get(2).unwrap().width, 30.0);
    }

    #[test]
    fn test_narrow_run_is_one_narrow_module() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 45.0, 0).unwrap();
        assert_eq!(widths(&store), vec![45.0]);
    }

    #[test]
    fn test_widths_sum_to_requested_total() {
        for total in [35.0, 60.0, 61.0, 120.0, 150.0, 247.5, 300.0] {
            let mut store = fresh_store();
            apply_total_width(&mut store, total, 0).unwrap();
            assert_close(store.total_width(), total);
        }
    }

    #[test]
    fn test_only_last_module_deviates_from_quantum() {
        for total in [61.0, 121.0, 150.0, 299.0] {
            let mut store = fresh_store();
            apply_total_width(&mut store, total, 0).unwrap();
            let n = store.len();
            for (i, module) in store.iter().enumerate() {
                if i + 1 < n {
                    assert_close(module.width, MODULE_QUANTUM);
                } else {
                    assert!(module.width > 0.0);
                    assert!(module.width <= MODULE_QUANTUM + 0.001);
                }
            }
        }
    }

    #[test]
    fn test_nearly_degenerate_last_module_survives() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 121.0, 0).unwrap();
        assert_eq!(store.len(), 3);
        assert_close(store.get(2).unwrap().width, 1.0);
    }

    #[test]
    fn test_run_is_centered_at_origin() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 150.0, 0).unwrap();
        assert_eq!(positions(&store), vec![-75.0, -15.0, 45.0]);
        let last = store.get(store.len() - 1).unwrap();
        assert_close(last.position_x + last.width, 75.0);
    }

    #[test]
    fn test_leftmost_edge_is_minus_half_total() {
        for total in [45.0, 61.0, 120.0, 150.0, 280.0] {
            let mut store = fresh_store();
            apply_total_width(&mut store, total, 0).unwrap();
            let min_x = store
                .iter()
                .map(|m| m.position_x)
                .fold(f32::INFINITY, f32::min);
            assert_close(min_x, -total / 2.0);
        }
    }

    #[test]
    fn test_reapplying_same_width_emits_nothing() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 140.0, 0).unwrap();
        let widths_before = widths(&store);
        let positions_before = positions(&store);
        let events = apply_total_width(&mut store, 140.0, 0).unwrap();
        assert!(events.is_empty(), "second pass produced {:?}", events);
        assert_eq!(widths(&store), widths_before);
        assert_eq!(positions(&store), positions_before);
    }

    #[test]
    fn test_shrink_then_grow_restores_layout() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 180.0, 0).unwrap();
        let before = widths(&store);
        apply_total_width(&mut store, 60.0, 0).unwrap();
        assert_eq!(store.len(), 1);
        apply_total_width(&mut store, 180.0, 0).unwrap();
        assert_eq!(widths(&store), before);
        assert_eq!(positions(&store), vec![-90.0, -30.0, 30.0]);
    }

    #[test]
    fn test_grow_events_are_appends() {
        let mut store = fresh_store();
        let events = apply_total_width(&mut store, 150.0, 0).unwrap();
        assert_eq!(
            events,
            vec![LayoutEvent::Added { index: 1 }, LayoutEvent::Added { index: 2 }]
        );
    }

    #[test]
    fn test_shrink_events_remove_from_the_right() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 180.0, 0).unwrap();
        let events = apply_total_width(&mut store, 61.0, 0).unwrap();
        assert_eq!(
            events,
            vec![
                LayoutEvent::Removed { index: 2 },
                LayoutEvent::Resized { index: 1 },
            ]
        );
    }

    #[test]
    fn test_grow_copies_selected_depth_height_and_first_finish() {
        let mut store = fresh_store();
        store.append(CabinetModule::new(60.0, 35.0, 90.0, MaterialKind::Gray));
        apply_total_width(&mut store, 240.0, 1).unwrap();
        assert_eq!(store.len(), 4);
        for index in 2..4 {
            let module = store.get(index).unwrap();
            assert_close(module.depth, 35.0);
            assert_close(module.height, 90.0);
            assert_eq!(module.material, MaterialKind::Wood);
        }
    }

    #[test]
    fn test_stale_selection_falls_back_to_last_module() {
        let mut store = fresh_store();
        let result = apply_total_width(&mut store, 150.0, 7);
        assert!(result.is_ok());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_rejects_non_positive_total() {
        for bad in [0.0, -5.0] {
            let mut store = fresh_store();
            let before = store.clone();
            let result = apply_total_width(&mut store, bad, 0);
            assert!(matches!(
                result,
                Err(CabinetError::InvalidDimension { .. })
            ));
            assert_eq!(store, before);
        }
    }

    #[test]
    fn test_rejects_non_finite_total() {
        let mut store = fresh_store();
        let before = store.clone();
        assert!(apply_total_width(&mut store, f32::NAN, 0).is_err());
        assert!(apply_total_width(&mut store, f32::INFINITY, 0).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_depth_height_changes_only_target() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 120.0, 0).unwrap();
        let event = update_module_depth_height(&mut store, 0, 45.0, 100.0).unwrap();
        assert_eq!(event, LayoutEvent::Resized { index: 0 });
        assert_close(store.get(0).unwrap().depth, 45.0);
        assert_close(store.get(0).unwrap().height, 100.0);
        assert_close(store.get(1).unwrap().depth, 60.0);
        assert_close(store.get(1).unwrap().height, 60.0);
        assert_eq!(positions(&store), vec![-60.0, 0.0]);
    }

    #[test]
    fn test_update_depth_height_validates_before_mutating() {
        let mut store = fresh_store();
        let before = store.clone();
        assert!(update_module_depth_height(&mut store, 0, 0.0, 80.0).is_err());
        assert!(update_module_depth_height(&mut store, 0, 40.0, -1.0).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_depth_height_out_of_range_is_an_error() {
        let mut store = fresh_store();
        let before = store.clone();
        let result = update_module_depth_height(&mut store, 9, 40.0, 80.0);
        assert!(matches!(
            result,
            Err(CabinetError::IndexOutOfRange { index: 9, len: 1 })
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_set_material_covers_every_module() {
        let mut store = fresh_store();
        apply_total_width(&mut store, 180.0, 0).unwrap();
        set_material(&mut store, MaterialKind::Black);
        assert!(store.iter().all(|m| m.material == MaterialKind::Black));
    }

    #[test]
    fn test_depth_edit_then_width_change_inherits_new_depth() {
        let mut store = fresh_store();
        update_module_depth_height(&mut store, 0, 40.0, 110.0).unwrap();
        apply_total_width(&mut store, 150.0, 0).unwrap();
        for module in store.iter() {
            assert_close(module.depth, 40.0);
            assert_close(module.height, 110.0);
        }
    }
}
