//! Dimension model: the module-width quantum and cm-based sizes
//!
//! All cabinet math happens in centimeters. The scene layer converts to
//! render units (1 unit = 1 m) only when meshes are built, so the model
//! stays in the units the product catalog uses.

use super::CabinetError;

/// Maximum width of a single module, in cm.
///
/// A run wider than this is partitioned into fixed-width modules; only the
/// last module may be narrower.
pub const MODULE_QUANTUM: f32 = 60.0;

/// Render-unit scale: 1 cm = 0.01 units, so 1 unit = 1 m.
pub const UNITS_PER_CM: f32 = 0.01;

/// Convert a length in cm to render units.
pub fn cm_to_units(cm: f32) -> f32 {
    cm * UNITS_PER_CM
}

/// Outer dimensions of a single module, in cm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

impl Dimensions {
    /// Catalog default: a 60 cm cube.
    pub const DEFAULT: Dimensions = Dimensions {
        width: 60.0,
        depth: 60.0,
        height: 60.0,
    };
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reject non-positive or non-finite lengths before they reach the store.
pub fn check_dimension(name: &'static str, value: f32) -> Result<(), CabinetError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CabinetError::InvalidDimension { name, value })
    }
}
