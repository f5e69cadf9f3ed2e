//! Viewer settings loading
//!
//! Uses RON (Rusty Object Notation) for a human-readable settings file.
//! Everything here is presentation: slider ranges, the light level, the
//! starting camera pose. Cabinet runs themselves are never persisted.
//! Native builds read `assets/settings.ron` at startup; WASM builds and
//! any load failure fall back to the compiled-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Validation limits so a hand-edited file cannot wedge the viewer
pub mod limits {
    /// Longest length any slider may offer, in cm
    pub const MAX_LENGTH_CM: f32 = 1000.0;
    /// Smallest useful slider span, in cm
    pub const MIN_RANGE_SPAN: f32 = 1.0;
    /// Maximum light multiplier
    pub const MAX_LIGHT: f32 = 4.0;
    /// Maximum camera distance in render units
    pub const MAX_CAMERA_DISTANCE: f32 = 50.0;
}

/// Error type for settings loading
#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        SettingsError::ParseError(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::ParseError(e) => write!(f, "Parse error: {}", e),
            SettingsError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Inclusive slider range in cm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Starting camera pose, orbit parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Orbit angle around the y axis, radians
    pub azimuth: f32,
    /// Tilt above the horizon, radians
    pub elevation: f32,
    /// Distance from the orbit target, render units
    pub distance: f32,
    /// Vertical field of view, degrees
    pub fov_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        // Three-quarter view from above, matching the showroom opener.
        Self {
            azimuth: -2.356,
            elevation: 0.53,
            distance: 4.92,
            fov_degrees: 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Total run width slider, cm
    pub total_width_range: SliderRange,
    /// Per-module depth slider, cm
    pub depth_range: SliderRange,
    /// Per-module height slider, cm
    pub height_range: SliderRange,
    /// Light intensity slider
    pub light_range: SliderRange,
    /// Starting light intensity
    pub light_intensity: f32,
    pub camera: CameraSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            total_width_range: SliderRange::new(20.0, 300.0),
            depth_range: SliderRange::new(20.0, 100.0),
            height_range: SliderRange::new(20.0, 250.0),
            light_range: SliderRange::new(0.2, 2.0),
            light_intensity: 1.0,
            camera: CameraSettings::default(),
        }
    }
}

impl Settings {
    /// Load and validate a settings file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = ron::from_str(&contents)?;
        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Startup entry point: missing file means defaults, a broken file is
    /// reported and ignored rather than fatal.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Settings {
        let path = path.as_ref();
        if !path.exists() {
            return Settings::default();
        }
        match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Ignoring {}: {}", path.display(), e);
                Settings::default()
            }
        }
    }
}

fn validate_range(range: &SliderRange, context: &str, max: f32) -> Result<(), String> {
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(format!("{}: range must be finite", context));
    }
    if range.min <= 0.0 {
        return Err(format!("{}: min {} must be positive", context, range.min));
    }
    if range.max > max {
        return Err(format!("{}: max {} exceeds limit {}", context, range.max, max));
    }
    if range.span() < limits::MIN_RANGE_SPAN {
        return Err(format!(
            "{}: span {} is below the minimum of {}",
            context,
            range.span(),
            limits::MIN_RANGE_SPAN
        ));
    }
    Ok(())
}

fn validate_camera(camera: &CameraSettings) -> Result<(), String> {
    if !camera.distance.is_finite() || camera.distance <= 0.0 {
        return Err(format!("camera: distance {} must be positive", camera.distance));
    }
    if camera.distance > limits::MAX_CAMERA_DISTANCE {
        return Err(format!(
            "camera: distance {} exceeds limit {}",
            camera.distance,
            limits::MAX_CAMERA_DISTANCE
        ));
    }
    if !(10.0..=170.0).contains(&camera.fov_degrees) {
        return Err(format!("camera: fov {} outside 10-170 degrees", camera.fov_degrees));
    }
    if !camera.azimuth.is_finite() || !camera.elevation.is_finite() {
        return Err("camera: angles must be finite".to_string());
    }
    if camera.elevation.abs() > 1.5 {
        return Err(format!("camera: elevation {} outside +/-1.5 rad", camera.elevation));
    }
    Ok(())
}

fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    validate_range(&settings.total_width_range, "total_width_range", limits::MAX_LENGTH_CM)
        .map_err(SettingsError::ValidationError)?;
    validate_range(&settings.depth_range, "depth_range", limits::MAX_LENGTH_CM)
        .map_err(SettingsError::ValidationError)?;
    validate_range(&settings.height_range, "height_range", limits::MAX_LENGTH_CM)
        .map_err(SettingsError::ValidationError)?;
    validate_range(&settings.light_range, "light_range", limits::MAX_LIGHT)
        .map_err(SettingsError::ValidationError)?;

    if !settings.light_intensity.is_finite() || settings.light_intensity <= 0.0 {
        return Err(SettingsError::ValidationError(format!(
            "light_intensity {} must be positive",
            settings.light_intensity
        )));
    }
    if settings.light_intensity > limits::MAX_LIGHT {
        return Err(SettingsError::ValidationError(format!(
            "light_intensity {} exceeds limit {}",
            settings.light_intensity,
            limits::MAX_LIGHT
        )));
    }

    validate_camera(&settings.camera).map_err(SettingsError::ValidationError)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_pass_validation() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_parse_partial_file_fills_defaults() {
        let settings: Settings = ron::from_str("(light_intensity: 1.5)").unwrap();
        assert_eq!(settings.light_intensity, 1.5);
        assert_eq!(settings.total_width_range, Settings::default().total_width_range);
        assert_eq!(settings.camera, CameraSettings::default());
    }

    #[test]
    fn test_parse_full_file() {
        let text = r#"(
            total_width_range: (min: 30.0, max: 240.0),
            depth_range: (min: 25.0, max: 80.0),
            height_range: (min: 30.0, max: 200.0),
            light_range: (min: 0.5, max: 1.5),
            light_intensity: 0.8,
            camera: (azimuth: 0.0, elevation: 0.4, distance: 6.0, fov_degrees: 45.0),
        )"#;
        let settings: Settings = ron::from_str(text).unwrap();
        assert!(validate_settings(&settings).is_ok());
        assert_eq!(settings.total_width_range, SliderRange::new(30.0, 240.0));
        assert_eq!(settings.camera.fov_degrees, 45.0);
    }

    #[test]
    fn test_validation_rejects_inverted_range() {
        let settings = Settings {
            depth_range: SliderRange::new(100.0, 20.0),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_absurd_lengths() {
        let settings = Settings {
            height_range: SliderRange::new(20.0, 5000.0),
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_light() {
        let settings = Settings {
            light_intensity: -1.0,
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_err());

        let settings = Settings {
            light_intensity: 100.0,
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_validation_rejects_broken_camera() {
        let settings = Settings {
            camera: CameraSettings {
                distance: -2.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_err());

        let settings = Settings {
            camera: CameraSettings {
                fov_degrees: 5.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_load_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "(light_intensity: 1.2, camera: (distance: 7.0))").unwrap();
        drop(file);

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.light_intensity, 1.2);
        assert_eq!(settings.camera.distance, 7.0);
    }

    #[test]
    fn test_load_or_default_ignores_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        std::fs::write(&path, "not ron at all {{{").unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_load_or_default_ignores_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        std::fs::write(&path, "(light_intensity: -3.0)").unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_load_or_default_missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.ron");
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }
}
