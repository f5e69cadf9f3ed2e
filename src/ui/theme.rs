//! UI Theme - Shared colors and styling constants
//!
//! Centralized color definitions for a consistent look across the viewport
//! and the control panel.

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Panel background
pub const PANEL_BG: Color = Color::new(0.13, 0.13, 0.15, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Accent color for active elements
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Header/title text size
pub const FONT_SIZE_HEADER: f32 = 14.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 12.0;

// =============================================================================
// Viewport Colors
// =============================================================================

/// Deep navy backdrop behind the 3D scene (~15, 23, 42)
pub const VIEWPORT_BG: Color = Color::new(0.059, 0.090, 0.165, 1.0);

// =============================================================================
// Widget Colors
// =============================================================================

/// Button background
pub const BUTTON_BG: Color = Color::new(0.18, 0.18, 0.21, 1.0);

/// Button background when hovered
pub const BUTTON_HOVER: Color = Color::new(0.24, 0.24, 0.28, 1.0);

/// Slider track background
pub const TRACK_BG: Color = Color::new(0.20, 0.20, 0.23, 1.0);

/// List row background when hovered
pub const ROW_HOVER: Color = Color::new(0.18, 0.18, 0.21, 1.0);

/// List row background when selected
pub const ROW_SELECTED: Color = Color::new(0.10, 0.27, 0.32, 1.0);
