//! Parametric mesh building
//!
//! Each module is meshed in its own local space with the origin at the
//! left-back-bottom corner; the viewport translates it by the module's
//! live position when drawing, so recentering the run never rebuilds
//! geometry. Lighting is baked per face (flat shading).

use macroquad::models::{Mesh, Vertex};
use macroquad::prelude::{vec3, Color, Vec3};

use super::lighting::LightRig;
use super::materials::{self, Finish};
use crate::cabinet::{cm_to_units, CabinetModule};

/// Door front proportions relative to the module.
const DOOR_WIDTH_RATIO: f32 = 0.95;
const DOOR_HEIGHT_RATIO: f32 = 0.95;
const DOOR_THICKNESS_RATIO: f32 = 0.05;

/// Handle bar: a thin horizontal cylinder across the door front.
const HANDLE_LENGTH_RATIO: f32 = 0.3;
/// Handle radius in render units (1 cm).
const HANDLE_RADIUS: f32 = 0.01;
/// How far in front of the carcass the handle sits, as a depth fraction.
const HANDLE_OFFSET_RATIO: f32 = 0.075;
const HANDLE_SEGMENTS: usize = 12;

/// Ground plane: 8 m square, slightly below y = 0 so module bottoms never
/// z-fight with it.
const GROUND_SIZE: f32 = 8.0;
const GROUND_DROP: f32 = 0.01;

/// The renderable meshes of one module, in module-local units.
pub struct ModuleMeshes {
    pub body: Mesh,
    pub door: Mesh,
    pub handle: Mesh,
}

/// Build the meshes for one module.
pub fn build_module(module: &CabinetModule, rig: &LightRig) -> ModuleMeshes {
    let w = cm_to_units(module.width);
    let h = cm_to_units(module.height);
    let d = cm_to_units(module.depth);

    let body = box_mesh(
        vec3(w / 2.0, h / 2.0, d / 2.0),
        vec3(w, h, d),
        &Finish::for_material(module.material),
        rig,
    );

    let door_thickness = d * DOOR_THICKNESS_RATIO;
    let door = box_mesh(
        vec3(w / 2.0, h / 2.0, d + door_thickness / 2.0),
        vec3(w * DOOR_WIDTH_RATIO, h * DOOR_HEIGHT_RATIO, door_thickness),
        &Finish::door(module.material),
        rig,
    );

    let handle = handle_mesh(
        vec3(w / 2.0, h / 2.0, d + d * HANDLE_OFFSET_RATIO),
        w * HANDLE_LENGTH_RATIO,
        rig,
    );

    ModuleMeshes { body, door, handle }
}

/// The floor the run sits on.
pub fn ground_mesh(rig: &LightRig) -> Mesh {
    let half = GROUND_SIZE / 2.0;
    let y = -GROUND_DROP;
    let color = rig.shade(&materials::GROUND, vec3(0.0, 1.0, 0.0));
    let corners = [
        vec3(-half, y, half),
        vec3(half, y, half),
        vec3(half, y, -half),
        vec3(-half, y, -half),
    ];
    let mut vertices = Vec::with_capacity(4);
    let mut indices = Vec::with_capacity(6);
    push_quad(&mut vertices, &mut indices, &corners, color);
    Mesh {
        vertices,
        indices,
        texture: None,
    }
}

/// Axis-aligned box, one baked color per face.
fn box_mesh(center: Vec3, size: Vec3, finish: &Finish, rig: &LightRig) -> Mesh {
    let min = center - size / 2.0;
    let max = center + size / 2.0;

    // Outward normal plus the four corners, counter-clockwise seen from
    // outside.
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            vec3(1.0, 0.0, 0.0),
            [
                vec3(max.x, min.y, max.z),
                vec3(max.x, min.y, min.z),
                vec3(max.x, max.y, min.z),
                vec3(max.x, max.y, max.z),
            ],
        ),
        (
            vec3(-1.0, 0.0, 0.0),
            [
                vec3(min.x, min.y, min.z),
                vec3(min.x, min.y, max.z),
                vec3(min.x, max.y, max.z),
                vec3(min.x, max.y, min.z),
            ],
        ),
        (
            vec3(0.0, 1.0, 0.0),
            [
                vec3(min.x, max.y, max.z),
                vec3(max.x, max.y, max.z),
                vec3(max.x, max.y, min.z),
                vec3(min.x, max.y, min.z),
            ],
        ),
        (
            vec3(0.0, -1.0, 0.0),
            [
                vec3(min.x, min.y, min.z),
                vec3(max.x, min.y, min.z),
                vec3(max.x, min.y, max.z),
                vec3(min.x, min.y, max.z),
            ],
        ),
        (
            vec3(0.0, 0.0, 1.0),
            [
                vec3(min.x, min.y, max.z),
                vec3(max.x, min.y, max.z),
                vec3(max.x, max.y, max.z),
                vec3(min.x, max.y, max.z),
            ],
        ),
        (
            vec3(0.0, 0.0, -1.0),
            [
                vec3(max.x, min.y, min.z),
                vec3(min.x, min.y, min.z),
                vec3(min.x, max.y, min.z),
                vec3(max.x, max.y, min.z),
            ],
        ),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, corners) in faces {
        let color = rig.shade(finish, normal);
        push_quad(&mut vertices, &mut indices, &corners, color);
    }

    Mesh {
        vertices,
        indices,
        texture: None,
    }
}

/// Horizontal cylinder bar, axis along x, flat-shaded per segment.
fn handle_mesh(center: Vec3, length: f32, rig: &LightRig) -> Mesh {
    let half = length / 2.0;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for seg in 0..HANDLE_SEGMENTS {
        let a0 = seg as f32 / HANDLE_SEGMENTS as f32 * std::f32::consts::TAU;
        let a1 = (seg + 1) as f32 / HANDLE_SEGMENTS as f32 * std::f32::consts::TAU;
        let n0 = vec3(0.0, a0.cos(), a0.sin());
        let n1 = vec3(0.0, a1.cos(), a1.sin());
        let color = rig.shade(&materials::HANDLE, ((n0 + n1) / 2.0).normalize());
        let corners = [
            center + vec3(-half, 0.0, 0.0) + n0 * HANDLE_RADIUS,
            center + vec3(half, 0.0, 0.0) + n0 * HANDLE_RADIUS,
            center + vec3(half, 0.0, 0.0) + n1 * HANDLE_RADIUS,
            center + vec3(-half, 0.0, 0.0) + n1 * HANDLE_RADIUS,
        ];
        push_quad(&mut vertices, &mut indices, &corners, color);
    }

    // End caps as triangle fans.
    for (normal, x) in [(vec3(-1.0, 0.0, 0.0), -half), (vec3(1.0, 0.0, 0.0), half)] {
        let color = rig.shade(&materials::HANDLE, normal);
        let cap_center = center + vec3(x, 0.0, 0.0);
        let base = vertices.len() as u16;
        vertices.push(vertex_at(cap_center, color));
        for seg in 0..=HANDLE_SEGMENTS {
            let a = seg as f32 / HANDLE_SEGMENTS as f32 * std::f32::consts::TAU;
            let p = cap_center + vec3(0.0, a.cos(), a.sin()) * HANDLE_RADIUS;
            vertices.push(vertex_at(p, color));
        }
        for seg in 0..HANDLE_SEGMENTS as u16 {
            indices.extend_from_slice(&[base, base + 1 + seg, base + 2 + seg]);
        }
    }

    Mesh {
        vertices,
        indices,
        texture: None,
    }
}

/// Append one quad as two triangles. Corners are counter-clockwise seen
/// from the front.
fn push_quad(vertices: &mut Vec<Vertex>, indices: &mut Vec<u16>, corners: &[Vec3; 4], color: Color) {
    let base = vertices.len() as u16;
    for corner in corners {
        vertices.push(vertex_at(*corner, color));
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

fn vertex_at(position: Vec3, color: Color) -> Vertex {
    Vertex::new(position.x, position.y, position.z, 0.0, 0.0, color)
}
