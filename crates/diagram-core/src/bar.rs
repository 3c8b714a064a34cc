// File: crates/diagram-core/src/bar.rs
// Summary: Grouped bar chart builder, its frozen definition, and the bar renderer.

use std::io::Write;

use tracing::{debug, trace};

use crate::axis::{self, format_value, AxisFrame, CaptionAlign};
use crate::canvas::VectorCanvas;
use crate::category::{BarCategory, Categories, CategoryData};
use crate::chart::{self, ChartConfig, Render};
use crate::color::ColorSource;
use crate::error::{ChartError, Result};
use crate::layout;
use crate::types::{BAR_MARGIN, LABELS_FONT_SIZE, LABELS_MARGIN};

/// One cluster of bars per label, one bar per category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarChart {
    pub config: ChartConfig,
    categories: Categories<BarCategory>,
    labels: Vec<String>,
}

impl BarChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_category(&mut self, name: impl Into<String>) -> &mut BarCategory {
        self.categories.push(BarCategory::new(name))
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut BarCategory> {
        self.categories.get_mut(name)
    }

    pub fn categories(&self) -> &Categories<BarCategory> {
        &self.categories
    }

    pub fn set_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn snapshot(&self) -> BarDefinition {
        BarDefinition { chart: self.clone() }
    }

    pub fn build<W: Write>(&self, out: W, colors: &mut dyn ColorSource) -> Result<()> {
        self.snapshot().write_svg(out, colors).map(drop)
    }
}

/// Pixel box of one bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Frozen bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDefinition {
    chart: BarChart,
}

impl BarDefinition {
    pub fn chart(&self) -> &BarChart {
        &self.chart
    }
}

/// Split `segment` pixels into one bar per category, each padded by `BAR_MARGIN` on both sides.
fn bar_width(segment: i32, categories: usize) -> Result<i32> {
    let count = i32::try_from(categories).unwrap_or(i32::MAX);
    let width = segment / count - 2 * BAR_MARGIN;
    if width <= 0 {
        return Err(ChartError::LayoutOverflow(format!(
            "{categories} bars leave no width in a {segment} pixel label segment"
        )));
    }
    Ok(width)
}

impl Render for BarDefinition {
    fn render(&self, canvas: &mut dyn VectorCanvas, colors: &mut dyn ColorSource) -> Result<()> {
        let BarChart { config, categories, labels } = &self.chart;
        let frame = AxisFrame::prepare(config, categories, labels, colors)?;
        let area = &frame.area;
        let segment = layout::label_segment_width(labels.len(), area)?;
        let width = bar_width(segment, categories.len())?;
        let slot = segment / i32::try_from(categories.len()).unwrap_or(i32::MAX);
        debug!(segment, bar_width = width, "computed bar layout");

        // (category index, value, rect) in drawing order: label by label, category by category.
        let mut bars = Vec::new();
        for (i, seg_left) in (0..labels.len()).map(|i| (i, area.left + i as i32 * segment)) {
            for (c, (cat, &shown)) in categories.iter().zip(&frame.visible).enumerate() {
                if i >= shown {
                    continue;
                }
                let v = cat.values()[i];
                let y = frame.scale.to_px(v);
                let rect = BarRect {
                    x: seg_left + c as i32 * slot + BAR_MARGIN,
                    y,
                    width,
                    height: frame.scale.bottom - y,
                };
                bars.push((c, v, rect));
            }
        }

        let theme = &config.options.theme;
        chart::begin_document(canvas, config.width, config.height, &config.title, &config.options)?;
        frame.draw_axes(canvas, theme)?;

        canvas.group(&axis::label_style(theme))?;
        let label_y = area.bottom + LABELS_MARGIN;
        for (i, label) in labels.iter().enumerate() {
            canvas.text(area.left + segment / 2 + i as i32 * segment, label_y, label, "")?;
        }
        canvas.group_end()?;

        frame.draw_tick_values(canvas, theme)?;

        if config.grid {
            canvas.group(&axis::grid_style(theme))?;
            frame.draw_horizontal_grid(canvas)?;
            canvas.group_end()?;
        }

        trace!(bars = bars.len(), "drawing bars");
        let value_style = format!(
            "text-anchor:middle;font-size:{LABELS_FONT_SIZE};fill:{}",
            theme.axis_label
        );
        for (c, v, r) in bars {
            canvas.rect(r.x, r.y, r.width, r.height, &format!("fill:{}", frame.colors[c]))?;
            canvas.text(r.x + r.width / 2, r.y - BAR_MARGIN, &format_value(v), &value_style)?;
        }

        frame.draw_legend(canvas, categories, theme, CaptionAlign::Middle)?;
        canvas.end()?;
        Ok(())
    }
}
