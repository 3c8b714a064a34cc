// File: crates/diagram-core/src/layout.rs
// Summary: Pure geometry shared by the axis charts: plot area, ticks, label positions, legend slots.

use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::scale::Scale;
use crate::types::{Insets, LABELS_MARGIN, LEGEND_FONT_SIZE, LEGEND_MARK_SIZE, LEGEND_TEXT_GAP};

/// Region inside the insets where data geometry is drawn.
pub type PlotArea = RectI32;

/// Plot area of a `width` x `height` surface after removing `insets`.
pub fn plot_area(width: u32, height: u32, insets: &Insets) -> Result<PlotArea> {
    let w = i64::from(width);
    let h = i64::from(height);
    if w <= i64::from(insets.hsum()) || h <= i64::from(insets.vsum()) {
        return Err(ChartError::LayoutOverflow(format!(
            "surface {width}x{height} leaves no plot area inside insets {insets:?}"
        )));
    }
    // Both bounds are positive and below the u32 surface size.
    Ok(RectI32::from_ltrb(
        insets.left as i32,
        insets.top as i32,
        (w - i64::from(insets.right)) as i32,
        (h - i64::from(insets.bottom)) as i32,
    ))
}

/// Pixel rows of every tick, from `rounded_min` upwards.
pub fn tick_positions(scale: &Scale) -> Vec<i32> {
    (0..scale.tick_count).map(|i| scale.tick_row(i)).collect()
}

/// X position of each label for a polyline chart: the first on the left
/// edge, the rest `width / (n - 1)` whole pixels apart.
pub fn label_columns(label_count: usize, area: &PlotArea) -> Result<Vec<i32>> {
    if label_count < 2 {
        return Err(ChartError::TooFewLabels { required: 2, found: label_count });
    }
    let intervals = i32::try_from(label_count - 1).unwrap_or(i32::MAX);
    let x_step = area.width() / intervals;
    if x_step <= 0 {
        return Err(ChartError::LayoutOverflow(format!(
            "{label_count} labels do not fit into a plot {} pixels wide",
            area.width()
        )));
    }
    Ok((0..intervals + 1).map(|i| area.left + i * x_step).collect())
}

/// Width of the slot each label owns in a bar chart.
pub fn label_segment_width(label_count: usize, area: &PlotArea) -> Result<i32> {
    if label_count == 0 {
        return Err(ChartError::TooFewLabels { required: 1, found: 0 });
    }
    let count = i32::try_from(label_count).unwrap_or(i32::MAX);
    let width = area.width() / count;
    if width <= 0 {
        return Err(ChartError::LayoutOverflow(format!(
            "{label_count} labels do not fit into a plot {} pixels wide",
            area.width()
        )));
    }
    Ok(width)
}

/// Reserved box for one category's swatch and name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendSlot {
    pub x: i32,
    pub y: i32,
    pub height: i32,
}

impl LegendSlot {
    /// Top-left corner of the square color mark.
    pub fn swatch(&self) -> (i32, i32) {
        (self.x, self.y + self.height / 2 - LEGEND_MARK_SIZE / 2)
    }

    /// Anchor of the caption, vertically centred on the slot.
    pub fn caption(&self) -> (i32, i32) {
        (self.x + LEGEND_MARK_SIZE + LEGEND_TEXT_GAP, self.y + self.height / 2)
    }

    /// Caption anchor for text drawn on its default baseline: half a font
    /// size below the slot centre.
    pub fn baseline_caption(&self) -> (i32, i32) {
        let (x, y) = self.caption();
        (x, y + LEGEND_FONT_SIZE / 2)
    }
}

/// Slots stacked under the X labels, anchored at the horizontal centre.
/// The band below the labels is split into `category_count + 1` rows.
pub fn legend_slots(category_count: usize, area: &PlotArea, insets: &Insets) -> Vec<LegendSlot> {
    let band = insets.bottom as i32 - LABELS_MARGIN;
    let rows = i32::try_from(category_count + 1).unwrap_or(i32::MAX);
    let height = (band / rows).max(1);
    let top = area.bottom + LABELS_MARGIN + height / 2;
    let x = area.center_x();
    (0..category_count as i32)
        .map(|i| LegendSlot { x, y: top + i * height, height })
        .collect()
}
