//! Configuration for the layout engine

use serde::Deserialize;
use thiserror::Error;

/// A threshold combination the layout engine cannot honor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutConfigError {
    #[error("panel_count must be at least 1")]
    NoPanels,
    #[error("{field} must be a finite percentage in [0, 100], got {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("shrink_neighbor_share must be in [0, 1], got {0}")]
    ShareOutOfRange(f64),
    #[error("min_drag_width ({min}) must not exceed max_panel_width ({max})")]
    InvertedDragBounds { min: f64, max: f64 },
    #[error("{count} panels at min_drag_width {min} exceed the container")]
    FloorTooWide { count: usize, min: f64 },
}

/// Thresholds used by drag-resize and minimize/restore, all in percent of the container
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of panels in a fresh layout
    pub panel_count: usize,

    /// Smallest width a panel can be dragged down to
    pub min_drag_width: f64,

    /// Largest width a growing panel can reach
    pub max_panel_width: f64,

    /// Fraction of freed space given to the panel right of a shrinking handle
    pub shrink_neighbor_share: f64,

    /// Width of a minimized panel
    pub minimized_width: f64,

    /// Width a minimized panel is restored to
    pub restored_width: f64,

    /// Panels at or below this width count as minimized
    pub minimize_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panel_count: 3,
            min_drag_width: 1.0,
            max_panel_width: 95.0,
            shrink_neighbor_share: 0.7,
            minimized_width: 2.0,
            restored_width: 33.0,
            minimize_threshold: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of panels
    pub fn with_panel_count(mut self, count: usize) -> Self {
        self.panel_count = count;
        self
    }

    /// Set the drag floor and the growth ceiling
    pub fn with_drag_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_drag_width = min;
        self.max_panel_width = max;
        self
    }

    /// Set the share of freed space given to the adjacent panel when shrinking
    pub fn with_shrink_neighbor_share(mut self, share: f64) -> Self {
        self.shrink_neighbor_share = share.clamp(0.0, 1.0);
        self
    }

    /// Set the minimize/restore targets and the threshold between them
    pub fn with_minimize(mut self, minimized: f64, restored: f64, threshold: f64) -> Self {
        self.minimized_width = minimized;
        self.restored_width = restored;
        self.minimize_threshold = threshold;
        self
    }

    /// Check that every width stays in [0, 100] under these thresholds
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        if self.panel_count == 0 {
            return Err(LayoutConfigError::NoPanels);
        }
        let percentages = [
            ("min_drag_width", self.min_drag_width),
            ("max_panel_width", self.max_panel_width),
            ("minimized_width", self.minimized_width),
            ("restored_width", self.restored_width),
            ("minimize_threshold", self.minimize_threshold),
        ];
        for (field, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                return Err(LayoutConfigError::OutOfRange { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.shrink_neighbor_share) {
            return Err(LayoutConfigError::ShareOutOfRange(self.shrink_neighbor_share));
        }
        if self.min_drag_width > self.max_panel_width {
            return Err(LayoutConfigError::InvertedDragBounds {
                min: self.min_drag_width,
                max: self.max_panel_width,
            });
        }
        if self.min_drag_width * self.panel_count as f64 > 100.0 {
            return Err(LayoutConfigError::FloorTooWide {
                count: self.panel_count,
                min: self.min_drag_width,
            });
        }
        Ok(())
    }
}
