//! Orbit camera for the 3D viewport
//!
//! Spherical coordinates around a target point, with eased motion: input
//! moves the goal pose, the rendered pose chases it each frame. The math
//! stays macroquad-free except for building the final Camera3D, so it all
//! runs headless under test.

use macroquad::camera::Camera3D;
use macroquad::prelude::{vec3, Vec3};

/// Distance limits: close enough to inspect a handle, far enough to see a
/// full 3 m run.
const MIN_DISTANCE: f32 = 1.0;
const MAX_DISTANCE: f32 = 10.0;

/// Keep elevation shy of the poles so the up vector stays stable.
const MAX_ELEVATION: f32 = 1.4;

/// Radians of orbit per pixel of drag.
const ROTATE_SPEED: f32 = 0.005;

/// Zoom factor per wheel notch.
const ZOOM_IN_FACTOR: f32 = 0.95;
const ZOOM_OUT_FACTOR: f32 = 1.05;

/// Pan scale per pixel, multiplied by the current distance.
const PAN_SPEED: f32 = 0.001;

/// Easing strength per 60 Hz frame.
const DAMPING: f32 = 0.05;

/// One orbit pose: where the camera looks from and at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPose {
    pub target: Vec3,
    pub azimuth: f32,
    pub elevation: f32,
    pub distance: f32,
}

impl OrbitPose {
    /// World-space camera position for this pose.
    pub fn position(&self) -> Vec3 {
        let forward = vec3(
            self.elevation.cos() * self.azimuth.sin(),
            -self.elevation.sin(),
            self.elevation.cos() * self.azimuth.cos(),
        );
        self.target - forward * self.distance
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Pose the user is steering toward.
    pub goal: OrbitPose,
    /// Smoothed pose actually rendered.
    pub current: OrbitPose,
    home: OrbitPose,
}

impl OrbitCamera {
    pub fn new(home: OrbitPose) -> Self {
        Self {
            goal: home,
            current: home,
            home,
        }
    }

    /// Rotate the goal pose by a mouse delta in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.goal.azimuth += dx * ROTATE_SPEED;
        self.goal.elevation =
            (self.goal.elevation + dy * ROTATE_SPEED).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Zoom by wheel notches; positive zooms in.
    pub fn zoom(&mut self, notches: f32) {
        let factor = if notches > 0.0 {
            ZOOM_IN_FACTOR
        } else {
            ZOOM_OUT_FACTOR
        };
        self.goal.distance = (self.goal.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Pan the orbit target in the view plane by a mouse delta in pixels.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let step = self.goal.distance * PAN_SPEED;
        let right = vec3(self.goal.azimuth.cos(), 0.0, -self.goal.azimuth.sin());
        self.goal.target -= right * dx * step;
        self.goal.target += vec3(0.0, 1.0, 0.0) * dy * step;
    }

    /// Glide back to the home pose.
    pub fn reset(&mut self) {
        self.goal = self.home;
    }

    /// Ease the rendered pose toward the goal. Frame-rate independent.
    pub fn update(&mut self, dt: f32) {
        let t = 1.0 - (1.0 - DAMPING).powf(dt * 60.0);
        self.current.azimuth += (self.goal.azimuth - self.current.azimuth) * t;
        self.current.elevation += (self.goal.elevation - self.current.elevation) * t;
        self.current.distance += (self.goal.distance - self.current.distance) * t;
        self.current.target += (self.goal.target - self.current.target) * t;
    }

    /// macroquad camera for this frame. `fovy` in radians; `viewport` in
    /// physical pixels with a bottom-left origin.
    pub fn camera(&self, fovy: f32, aspect: f32, viewport: Option<(i32, i32, i32, i32)>) -> Camera3D {
        Camera3D {
            position: self.current.position(),
            target: self.current.target,
            up: vec3(0.0, 1.0, 0.0),
            fovy,
            aspect: Some(aspect),
            viewport,
            ..Default::default()
        }
    }
}
