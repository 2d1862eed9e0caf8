//! Drag-resize and minimize/restore transitions
//!
//! [`LayoutState::apply`] is a pure `(state, event) -> state` transition. A drag update
//! always recomputes from the [`DragSession`] snapshot, so repeating an update is a no-op
//! and moving the pointer back to where the drag started restores the start widths exactly.
//!
//! Redistribution rules (percent of container):
//! - growing panel `h`: every panel right of the handle is raided by the drag delta, down
//!   to the drag floor; panel `h` gets what was taken, capped at the ceiling, and any excess
//!   goes back to the raided panels evenly
//! - shrinking panel `h`: the freed space goes to panel `h + 1` and the other panels in a
//!   fixed ratio, with no bound check on the receivers
//! - minimize/restore: fixed target widths, the difference absorbed proportionally

use tracing::{debug, trace};

use super::config::LayoutConfig;
use super::types::{DragSession, PanelSet};

/// Pointer and control events driving the layout
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    /// Pointer pressed on handle `handle` at container x-coordinate `pointer_x`
    BeginDrag { handle: usize, pointer_x: f64 },
    /// Pointer moved while a handle is held
    UpdateDrag { pointer_x: f64, container_width: f64 },
    /// Pointer released
    EndDrag,
    /// Minimize a panel, or restore it if it is already minimized
    ToggleMinimize { panel: usize },
    /// Return to an even split
    Reset,
}

/// Panel widths plus the active drag, if any
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    panels: PanelSet,
    drag: Option<DragSession>,
    config: LayoutConfig,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutState {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            panels: PanelSet::equal(config.panel_count),
            drag: None,
            config,
        }
    }

    /// Replace the panel widths, ending any drag
    pub fn with_panels(mut self, panels: PanelSet) -> Self {
        self.panels = panels;
        self.drag = None;
        self
    }

    pub fn panels(&self) -> &PanelSet {
        &self.panels
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Apply one event and return the next state
    ///
    /// Events that make no sense in the current state (a second begin-drag, an update
    /// without a drag, an unknown handle or panel) leave the state unchanged.
    pub fn apply(mut self, event: LayoutEvent) -> Self {
        match event {
            LayoutEvent::BeginDrag { handle, pointer_x } => {
                if self.drag.is_some() {
                    debug!(handle, "begin-drag ignored, a drag is already active");
                } else if handle >= self.panels.handle_count() || !pointer_x.is_finite() {
                    debug!(handle, pointer_x, "begin-drag ignored, invalid handle or pointer");
                } else {
                    debug!(handle, pointer_x, "drag started");
                    self.drag = Some(DragSession::new(handle, pointer_x.max(0.0), &self.panels));
                }
            }
            LayoutEvent::UpdateDrag {
                pointer_x,
                container_width,
            } => {
                let Some(session) = &self.drag else {
                    trace!("drag update without an active drag");
                    return self;
                };
                if !pointer_x.is_finite() || !container_width.is_finite() || container_width <= 0.0
                {
                    trace!(pointer_x, container_width, "drag update ignored");
                    return self;
                }
                let pointer = pointer_x.clamp(0.0, container_width);
                let start = session.start_pointer_x().min(container_width);
                let delta = ((pointer - start) / container_width * 100.0).clamp(-100.0, 100.0);
                let widths =
                    drag_widths(session.start_widths(), session.handle(), delta, &self.config);
                trace!(delta, ?widths, "drag update");
                self.panels = PanelSet::from_raw(widths);
            }
            LayoutEvent::EndDrag => {
                if self.drag.take().is_some() {
                    debug!(widths = ?self.panels.widths(), "drag ended");
                }
            }
            LayoutEvent::ToggleMinimize { panel } => {
                if self.drag.is_some() {
                    debug!(panel, "minimize ignored during drag");
                } else {
                    let widths = toggle_widths(self.panels.widths(), panel, &self.config);
                    debug!(panel, ?widths, "panel toggled");
                    self.panels = PanelSet::from_raw(widths);
                }
            }
            LayoutEvent::Reset => {
                self.drag = None;
                self.panels = PanelSet::equal(self.panels.len());
            }
        }
        self
    }
}

/// Widths after dragging `handle` by `delta` percent from `start`
pub fn drag_widths(start: &[f64], handle: usize, delta: f64, config: &LayoutConfig) -> Vec<f64> {
    if handle + 1 >= start.len() || delta == 0.0 {
        return start.to_vec();
    }
    if delta > 0.0 {
        grow(start, handle, delta, config)
    } else {
        shrink(start, handle, -delta, config)
    }
}

fn grow(start: &[f64], handle: usize, delta: f64, config: &LayoutConfig) -> Vec<f64> {
    let mut widths = start.to_vec();
    let mut taken = 0.0;
    for (index, width) in widths.iter_mut().enumerate().skip(handle + 1) {
        let next = (start[index] - delta)
            .max(config.min_drag_width)
            .min(start[index]);
        taken += start[index] - next;
        *width = next;
    }

    let ceiling = config.max_panel_width.max(start[handle]);
    let grown = start[handle] + taken;
    if grown > ceiling {
        let raided = widths.len() - handle - 1;
        let refund = (grown - ceiling) / raided as f64;
        for width in &mut widths[handle + 1..] {
            *width += refund;
        }
        widths[handle] = ceiling;
    } else {
        widths[handle] = grown;
    }
    widths
}

fn shrink(start: &[f64], handle: usize, amount: f64, config: &LayoutConfig) -> Vec<f64> {
    let mut widths = start.to_vec();
    let target = (start[handle] - amount)
        .max(config.min_drag_width)
        .min(start[handle]);
    let freed = start[handle] - target;
    widths[handle] = target;

    let others: Vec<usize> = (0..widths.len())
        .filter(|&index| index != handle && index != handle + 1)
        .collect();
    if others.is_empty() {
        widths[handle + 1] += freed;
    } else {
        widths[handle + 1] += freed * config.shrink_neighbor_share;
        let share = freed * (1.0 - config.shrink_neighbor_share) / others.len() as f64;
        for index in others {
            widths[index] += share;
        }
    }
    widths
}

/// Widths after minimizing or restoring `panel`
pub fn toggle_widths(widths: &[f64], panel: usize, config: &LayoutConfig) -> Vec<f64> {
    if panel >= widths.len() || widths.len() < 2 {
        return widths.to_vec();
    }

    let current = widths[panel];
    let others_total: f64 = widths
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != panel)
        .map(|(_, w)| w)
        .sum();
    let target = if current > config.minimize_threshold {
        config.minimized_width
    } else {
        config.restored_width
    }
    .clamp(0.0, current + others_total);
    let diff = target - current;

    let mut next = widths.to_vec();
    next[panel] = target;
    let other_count = (widths.len() - 1) as f64;
    for (index, width) in next.iter_mut().enumerate() {
        if index == panel {
            continue;
        }
        *width = if others_total > 0.0 {
            widths[index] - diff * widths[index] / others_total
        } else {
            widths[index] - diff / other_count
        };
    }
    next
}
