//! A single cabinet module and its finish

use super::Dimensions;

/// Surface finish, applied uniformly to the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaterialKind {
    #[default]
    Wood,
    Black,
    Gray,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 3] = [MaterialKind::Wood, MaterialKind::Black, MaterialKind::Gray];

    /// Label for the finish selector.
    pub fn label(&self) -> &'static str {
        match self {
            MaterialKind::Wood => "Wood",
            MaterialKind::Black => "Black",
            MaterialKind::Gray => "Gray",
        }
    }
}

/// One cabinet segment.
///
/// `position_x` is derived, not user-set: the layout pass writes the left
/// edge of the module in cm, relative to the centered run. Everything else
/// is what the customer configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CabinetModule {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub position_x: f32,
    pub material: MaterialKind,
}

impl CabinetModule {
    pub fn new(width: f32, depth: f32, height: f32, material: MaterialKind) -> Self {
        Self {
            width,
            depth,
            height,
            position_x: 0.0,
            material,
        }
    }

    pub fn with_dimensions(dims: Dimensions, material: MaterialKind) -> Self {
        Self::new(dims.width, dims.depth, dims.height, material)
    }
}
