//! Surface finish presets
//!
//! Flat colors plus the two scalar knobs the shading model reads. Values
//! match the showroom palette: warm oak, black lacquer, gray lacquer, and
//! a brass-toned handle.

use macroquad::prelude::Color;

use crate::cabinet::MaterialKind;

/// How much door fronts are darkened relative to the body finish, so the
/// run reads as panels instead of one solid block.
const DOOR_SHADE: f32 = 0.72;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finish {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
}

/// Warm oak brown (#8B4513).
pub const WOOD: Finish = Finish {
    color: Color::new(0.545, 0.271, 0.075, 1.0),
    roughness: 0.8,
    metalness: 0.1,
};

/// Near-black lacquer (#1A1A1A).
pub const BLACK: Finish = Finish {
    color: Color::new(0.102, 0.102, 0.102, 1.0),
    roughness: 0.3,
    metalness: 0.2,
};

/// Cool gray lacquer (#6B7280).
pub const GRAY: Finish = Finish {
    color: Color::new(0.420, 0.447, 0.502, 1.0),
    roughness: 0.4,
    metalness: 0.1,
};

/// Brass-toned handle metal.
pub const HANDLE: Finish = Finish {
    color: Color::new(0.545, 0.271, 0.075, 1.0),
    roughness: 0.2,
    metalness: 0.8,
};

/// Matte ground plane (#F5F5F5).
pub const GROUND: Finish = Finish {
    color: Color::new(0.961, 0.961, 0.961, 1.0),
    roughness: 1.0,
    metalness: 0.0,
};

impl Finish {
    /// Body finish for a material kind.
    pub fn for_material(kind: MaterialKind) -> Finish {
        match kind {
            MaterialKind::Wood => WOOD,
            MaterialKind::Black => BLACK,
            MaterialKind::Gray => GRAY,
        }
    }

    /// Door-front finish: the body finish with a darkened color.
    pub fn door(kind: MaterialKind) -> Finish {
        let base = Finish::for_material(kind);
        Finish {
            color: Color::new(
                base.color.r * DOOR_SHADE,
                base.color.g * DOOR_SHADE,
                base.color.b * DOOR_SHADE,
                1.0,
            ),
            ..base
        }
    }
}
