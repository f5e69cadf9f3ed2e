//! Cabinet domain model
//!
//! Dimensions, modules, the ordered store, and the layout engine. This is
//! the whole configurator minus pixels: plain synchronous data in cm, no
//! rendering types, so all of it runs headless under test.

mod dimensions;
mod layout;
mod module;
mod store;

pub use dimensions::{check_dimension, cm_to_units, Dimensions, MODULE_QUANTUM, UNITS_PER_CM};
pub use layout::{
    apply_total_width, required_modules, set_material, update_module_depth_height, LayoutEvent,
};
pub use module::{CabinetModule, MaterialKind};
pub use store::ModuleStore;

/// Error type for cabinet model operations
///
/// Every variant is recoverable: the store is left untouched and the UI
/// reports the message instead of applying the change.
#[derive(Debug, Clone, PartialEq)]
pub enum CabinetError {
    /// A non-positive or non-finite length was supplied.
    InvalidDimension { name: &'static str, value: f32 },
    /// A store access or selection used an index outside the run.
    IndexOutOfRange { index: usize, len: usize },
    /// An attempt to remove the last remaining module.
    EmptyStore,
}

impl std::fmt::Display for CabinetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CabinetError::InvalidDimension { name, value } => {
                write!(f, "Invalid {}: {} (must be a positive length in cm)", name, value)
            }
            CabinetError::IndexOutOfRange { index, len } => {
                write!(f, "Module index {} out of range ({} modules)", index, len)
            }
            CabinetError::EmptyStore => {
                write!(f, "Cannot remove the last remaining module")
            }
        }
    }
}

impl std::error::Error for CabinetError {}
