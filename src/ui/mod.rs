//! Immediate-mode UI for the configurator
//!
//! Rectangle-based layout, rebuilt every frame, drawn straight through
//! macroquad. Just enough widget vocabulary for one control panel: labels,
//! buttons, sliders, and selectable rows.
//!
//! Note: the drag/hot bookkeeping in `UiContext` is wider than the current
//! widget set needs.

#![allow(dead_code)]

mod input;
mod panel;
mod rect;
mod theme;
mod widgets;

pub use input::*;
pub use panel::*;
pub use rect::*;
pub use theme::*;
pub use widgets::*;
