//! Core types for the layout engine

/// Tolerance used when checking that widths add up to 100
pub const WIDTH_EPSILON: f64 = 1e-6;

/// Ordered panel widths in percent of the container
///
/// Widths always add up to 100 and each lies in `[0, 100]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSet {
    widths: Vec<f64>,
}

impl PanelSet {
    /// Split the container evenly between `count` panels (at least one)
    ///
    /// Widths are truncated to two decimals and the last panel absorbs the remainder,
    /// so three panels come out as `[33.33, 33.33, 33.34]`.
    pub fn equal(count: usize) -> Self {
        let count = count.max(1);
        let share = (10_000.0 / count as f64).floor() / 100.0;
        let mut widths = vec![share; count];
        widths[count - 1] = 100.0 - share * (count - 1) as f64;
        Self { widths }
    }

    /// Build a panel set from arbitrary widths
    ///
    /// Each width is clamped into `[0, 100]`, then the set is scaled to sum to 100.
    /// An empty or all-zero input falls back to an even split.
    pub fn from_widths(widths: Vec<f64>) -> Self {
        if widths.is_empty() {
            return Self::equal(1);
        }
        let clamped: Vec<f64> = widths
            .into_iter()
            .map(|w| if w.is_finite() { w.clamp(0.0, 100.0) } else { 0.0 })
            .collect();
        let total: f64 = clamped.iter().sum();
        if total <= 0.0 {
            return Self::equal(clamped.len());
        }
        if (total - 100.0).abs() <= WIDTH_EPSILON {
            return Self { widths: clamped };
        }
        Self {
            widths: clamped.iter().map(|w| w * 100.0 / total).collect(),
        }
    }

    pub(crate) fn from_raw(widths: Vec<f64>) -> Self {
        Self { widths }
    }

    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    pub fn width(&self, index: usize) -> Option<f64> {
        self.widths.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Number of handles between adjacent panels
    pub fn handle_count(&self) -> usize {
        self.widths.len().saturating_sub(1)
    }

    pub fn total(&self) -> f64 {
        self.widths.iter().sum()
    }

    /// Widths as CSS percentages, e.g. `"33.33%"`
    pub fn css_widths(&self) -> Vec<String> {
        self.widths.iter().map(|w| format!("{:.2}%", w)).collect()
    }
}

impl Default for PanelSet {
    fn default() -> Self {
        Self::equal(3)
    }
}

/// Snapshot taken when a handle is grabbed
///
/// Every drag update is computed from this snapshot, never from the previous update.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    handle: usize,
    start_pointer_x: f64,
    start_widths: Vec<f64>,
}

impl DragSession {
    pub fn new(handle: usize, start_pointer_x: f64, panels: &PanelSet) -> Self {
        Self {
            handle,
            start_pointer_x,
            start_widths: panels.widths().to_vec(),
        }
    }

    /// Handle index; handle `h` sits between panels `h` and `h + 1`
    pub fn handle(&self) -> usize {
        self.handle
    }

    pub fn start_pointer_x(&self) -> f64 {
        self.start_pointer_x
    }

    pub fn start_widths(&self) -> &[f64] {
        &self.start_widths
    }
}
