// File: crates/diagram-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, font sizes).

/// Default surface width in pixels.
pub const WIDTH: u32 = 900;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 600;

/// Gap between the X axis and its labels.
pub const LABELS_MARGIN: i32 = 20;
/// Gap between the Y axis and its tick values.
pub const VALUES_MARGIN: i32 = 10;

pub const AXIS_LINE_WIDTH: u32 = 2;
pub const TITLE_FONT_SIZE: u32 = 20;
pub const LABELS_FONT_SIZE: u32 = 12;

pub const LEGEND_MARK_SIZE: i32 = 10;
pub const LEGEND_FONT_SIZE: i32 = 12;
/// Vertical gap between pie legend entries.
pub const LEGEND_MARGIN: i32 = 5;
/// Gap between a legend swatch and its caption.
pub const LEGEND_TEXT_GAP: i32 = 5;

/// Horizontal padding on both sides of every bar.
pub const BAR_MARGIN: i32 = 2;
/// Padding kept around the pie inside its graph area.
pub const PIE_MARGIN: i32 = 20;
/// Share of the surface width given to the pie; the rest holds the legend.
pub const PIE_GRAPH_SHARE: f64 = 0.66;

/// Line width used when a line category does not set one.
pub const DEFAULT_LINE_WIDTH: u32 = 1;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for tick values (left), title (top) and labels plus legend (bottom).
    fn default() -> Self {
        Self::new(50, 50, 50, 150)
    }
}

/// What to do with values past the last label of a line or bar chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Render the prefix that has labels, ignore the rest.
    #[default]
    Truncate,
    /// Every category must have exactly one value per label.
    Strict,
}
