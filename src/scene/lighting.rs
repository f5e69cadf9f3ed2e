//! Studio light rig and CPU-side shading
//!
//! macroquad's default 3D material is unlit, so light is baked into vertex
//! colors at mesh build time: a fixed ambient term plus three directional
//! lights (key, fill, rim), Lambert diffuse with a small highlight for
//! metallic finishes. Good enough for flat-shaded boxes, and it keeps the
//! render path on the stock pipeline.

use macroquad::prelude::{vec3, Color, Vec3};

use super::materials::Finish;

/// Dim gray ambient (#404040 at 0.4 strength), independent of the user's
/// light slider.
const AMBIENT_LEVEL: f32 = 0.1;

/// Relative strengths of the three directionals; the light slider scales
/// all three together.
const KEY_WEIGHT: f32 = 1.0;
const FILL_WEIGHT: f32 = 0.3;
const RIM_WEIGHT: f32 = 0.2;

/// One directional light.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    /// Unit vector from the scene toward the light.
    pub toward: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            toward: position.normalize(),
            intensity,
        }
    }
}

/// The three-point studio rig around the cabinet.
#[derive(Debug, Clone, Copy)]
pub struct LightRig {
    pub ambient: f32,
    pub key: DirectionalLight,
    pub fill: DirectionalLight,
    pub rim: DirectionalLight,
}

impl LightRig {
    /// Rig at a given master intensity (1.0 is the showroom default).
    pub fn with_intensity(intensity: f32) -> Self {
        Self {
            ambient: AMBIENT_LEVEL,
            key: DirectionalLight::new(vec3(5.0, 5.0, 5.0), KEY_WEIGHT * intensity),
            fill: DirectionalLight::new(vec3(-3.0, 3.0, -3.0), FILL_WEIGHT * intensity),
            rim: DirectionalLight::new(vec3(0.0, 2.0, -5.0), RIM_WEIGHT * intensity),
        }
    }

    fn lights(&self) -> [DirectionalLight; 3] {
        [self.key, self.fill, self.rim]
    }

    /// Diffuse light level hitting a surface with this normal, ambient
    /// included.
    pub fn irradiance(&self, normal: Vec3) -> f32 {
        let mut level = self.ambient;
        for light in self.lights() {
            level += light.intensity * normal.dot(light.toward).max(0.0);
        }
        level
    }

    /// Bake a finish into a displayable face color: Lambert diffuse plus a
    /// key-light highlight scaled by metalness, clamped to range.
    pub fn shade(&self, finish: &Finish, normal: Vec3) -> Color {
        let diffuse = self.irradiance(normal);
        let key_facing = normal.dot(self.key.toward).max(0.0);
        let shininess = 2.0 + 30.0 * (1.0 - finish.roughness);
        let highlight = finish.metalness * self.key.intensity * key_facing.powf(shininess);
        Color::new(
            (finish.color.r * diffuse + highlight).clamp(0.0, 1.0),
            (finish.color.g * diffuse + highlight).clamp(0.0, 1.0),
            (finish.color.b * diffuse + highlight).clamp(0.0, 1.0),
            finish.color.a,
        )
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::with_intensity(1.0)
    }
}
