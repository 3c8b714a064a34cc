// File: crates/diagram-core/src/axis.rs
// Summary: Validated axis frame shared by line and bar charts, plus the drawing of its furniture.

use std::io;

use tracing::debug;

use crate::canvas::VectorCanvas;
use crate::category::{Categories, CategoryData};
use crate::chart::ChartConfig;
use crate::color::{self, Color, ColorSource};
use crate::error::{ChartError, Result};
use crate::layout::{self, LegendSlot, PlotArea};
use crate::scale::Scale;
use crate::theme::Theme;
use crate::types::{
    LabelPolicy, AXIS_LINE_WIDTH, LABELS_FONT_SIZE, LEGEND_FONT_SIZE, LEGEND_MARK_SIZE, VALUES_MARGIN,
};

/// How legend captions line up with their swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CaptionAlign {
    /// Anchored on the slot centre with `alignment-baseline:middle`.
    Middle,
    /// Default baseline, half a font size below the slot centre.
    Baseline,
}

/// Everything an axis chart needs before the first byte is written.
pub(crate) struct AxisFrame {
    pub area: PlotArea,
    pub scale: Scale,
    pub ticks: Vec<i32>,
    pub legend: Vec<LegendSlot>,
    /// Resolved color per category, in insertion order.
    pub colors: Vec<Color>,
    /// Number of values drawn per category.
    pub visible: Vec<usize>,
}

impl AxisFrame {
    /// Validate the definition and compute the shared geometry.
    /// Colors are drawn from `source` only once validation has passed.
    pub(crate) fn prepare<C: CategoryData>(
        config: &ChartConfig,
        categories: &Categories<C>,
        labels: &[String],
        source: &mut dyn ColorSource,
    ) -> Result<Self> {
        if !(config.step > 0.0 && config.step.is_finite()) {
            return Err(ChartError::InvalidStep(config.step));
        }
        if categories.is_empty() {
            return Err(ChartError::EmptyCategories);
        }
        if config.label_policy == LabelPolicy::Strict {
            if let Some(c) = categories.iter().find(|c| c.values().len() != labels.len()) {
                return Err(ChartError::LabelMismatch {
                    category: c.name().to_owned(),
                    values: c.values().len(),
                    labels: labels.len(),
                });
            }
        }

        let insets = &config.options.insets;
        let area = layout::plot_area(config.width, config.height, insets)?;
        let all_values = categories.iter().flat_map(|c| c.values().iter().copied());
        let scale = Scale::compute(all_values, config.min_value, config.max_value, config.step, area)?;
        debug!(
            rounded_min = scale.rounded_min,
            rounded_max = scale.rounded_max,
            ticks = scale.tick_count,
            pixels_per_tick = scale.pixels_per_tick,
            "computed value scale"
        );

        let mut visible = Vec::with_capacity(categories.len());
        for c in categories {
            let shown = c.values().len().min(labels.len());
            if shown < c.values().len() {
                debug!(
                    category = c.name(),
                    dropped = c.values().len() - shown,
                    "values past the last label are not drawn"
                );
            }
            if let Some(&v) = c.values()[..shown].iter().find(|v| !scale.contains(**v)) {
                return Err(ChartError::ValueOutOfRange {
                    category: c.name().to_owned(),
                    value: v,
                    min: scale.rounded_min,
                    max: scale.rounded_max,
                });
            }
            visible.push(shown);
        }

        let ticks = layout::tick_positions(&scale);
        let legend = layout::legend_slots(categories.len(), &area, insets);
        let colors = color::resolve(categories.iter().map(CategoryData::color), source);

        Ok(Self { area, scale, ticks, legend, colors, visible })
    }

    pub(crate) fn draw_axes(&self, canvas: &mut dyn VectorCanvas, theme: &Theme) -> io::Result<()> {
        let style = format!("stroke-width:{AXIS_LINE_WIDTH};stroke:{};", theme.axis_line);
        let a = &self.area;
        canvas.line(a.left, a.bottom, a.right, a.bottom, &style)?;
        canvas.line(a.left, a.bottom, a.left, a.top, &style)
    }

    /// Tick values right-aligned against the Y axis.
    pub(crate) fn draw_tick_values(&self, canvas: &mut dyn VectorCanvas, theme: &Theme) -> io::Result<()> {
        canvas.group(&format!(
            "text-anchor:end;alignment-baseline:central;font-size:{LABELS_FONT_SIZE};fill:{}",
            theme.axis_label
        ))?;
        for (i, &row) in self.ticks.iter().enumerate() {
            canvas.text(self.area.left - VALUES_MARGIN, row, &format_value(self.scale.tick_value(i)), "")?;
        }
        canvas.group_end()
    }

    /// Grid lines on every tick above the X axis.
    pub(crate) fn draw_horizontal_grid(&self, canvas: &mut dyn VectorCanvas) -> io::Result<()> {
        for &row in self.ticks.iter().skip(1) {
            canvas.line(self.area.left, row, self.area.right, row, "")?;
        }
        Ok(())
    }

    pub(crate) fn draw_legend<C: CategoryData>(
        &self,
        canvas: &mut dyn VectorCanvas,
        categories: &Categories<C>,
        theme: &Theme,
        align: CaptionAlign,
    ) -> io::Result<()> {
        let caption_style = match align {
            CaptionAlign::Middle => {
                format!("alignment-baseline:middle;font-size:{LEGEND_FONT_SIZE};fill:{}", theme.axis_label)
            }
            CaptionAlign::Baseline => format!("font-size:{LEGEND_FONT_SIZE};fill:{}", theme.axis_label),
        };
        for ((slot, cat), color) in self.legend.iter().zip(categories).zip(&self.colors) {
            let (x, y) = slot.swatch();
            canvas.rect(x, y, LEGEND_MARK_SIZE, LEGEND_MARK_SIZE, &format!("fill:{color}"))?;
            let (x, y) = match align {
                CaptionAlign::Middle => slot.caption(),
                CaptionAlign::Baseline => slot.baseline_caption(),
            };
            canvas.text(x, y, cat.name(), &caption_style)?;
        }
        Ok(())
    }
}

pub(crate) fn grid_style(theme: &Theme) -> String {
    format!("stroke-width:1;stroke:{}", theme.grid)
}

pub(crate) fn label_style(theme: &Theme) -> String {
    format!("text-anchor:middle;font-size:{LABELS_FONT_SIZE};fill:{}", theme.axis_label)
}

/// Two decimals, as printed on ticks, bars and wedges.
pub fn format_value(v: f64) -> String {
    format!("{v:.2}")
}
