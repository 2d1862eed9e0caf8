//! Adaptive multi-panel layout
//!
//! This module owns the panel widths of the editing view and turns pointer events on
//! the handles between panels into proportional width changes.

pub mod config;
pub mod engine;
pub mod types;

pub use config::{LayoutConfig, LayoutConfigError};
pub use engine::{drag_widths, toggle_widths, LayoutEvent, LayoutState};
pub use types::{DragSession, PanelSet, WIDTH_EPSILON};
