// File: crates/diagram-core/src/line.rs
// Summary: Line chart builder, its frozen definition, and the polyline renderer.

use std::io::Write;

use tracing::trace;

use crate::axis::{self, AxisFrame, CaptionAlign};
use crate::canvas::VectorCanvas;
use crate::category::{Categories, CategoryData, LineCategory};
use crate::chart::{self, ChartConfig, Render};
use crate::color::ColorSource;
use crate::error::Result;
use crate::geometry::PointI32;
use crate::layout;
use crate::types::{DEFAULT_LINE_WIDTH, LABELS_MARGIN};

/// Categories drawn as polylines over evenly spaced labels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineChart {
    pub config: ChartConfig,
    categories: Categories<LineCategory>,
    labels: Vec<String>,
}

impl LineChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_category(&mut self, name: impl Into<String>) -> &mut LineCategory {
        self.categories.push(LineCategory::new(name))
    }

    /// First category called `name`.
    pub fn category_mut(&mut self, name: &str) -> Option<&mut LineCategory> {
        self.categories.get_mut(name)
    }

    pub fn categories(&self) -> &Categories<LineCategory> {
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

    pub fn snapshot(&self) -> LineDefinition {
        LineDefinition { chart: self.clone() }
    }

    pub fn build<W: Write>(&self, out: W, colors: &mut dyn ColorSource) -> Result<()> {
        self.snapshot().write_svg(out, colors).map(drop)
    }
}

/// Frozen line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineDefinition {
    chart: LineChart,
}

impl LineDefinition {
    pub fn chart(&self) -> &LineChart {
        &self.chart
    }
}

impl Render for LineDefinition {
    fn render(&self, canvas: &mut dyn VectorCanvas, colors: &mut dyn ColorSource) -> Result<()> {
        let LineChart { config, categories, labels } = &self.chart;
        let frame = AxisFrame::prepare(config, categories, labels, colors)?;
        let columns = layout::label_columns(labels.len(), &frame.area)?;

        let polylines: Vec<Vec<PointI32>> = categories
            .iter()
            .zip(&frame.visible)
            .map(|(c, &shown)| {
                c.values()[..shown]
                    .iter()
                    .zip(&columns)
                    .map(|(&v, &x)| PointI32::new(x, frame.scale.to_px(v)))
                    .collect()
            })
            .collect();

        let theme = &config.options.theme;
        let area = &frame.area;
        chart::begin_document(canvas, config.width, config.height, &config.title, &config.options)?;
        frame.draw_axes(canvas, theme)?;

        canvas.group(&axis::label_style(theme))?;
        let label_y = area.bottom + LABELS_MARGIN;
        for (label, &x) in labels.iter().zip(&columns) {
            canvas.text(x, label_y, label, "")?;
        }
        canvas.group_end()?;

        frame.draw_tick_values(canvas, theme)?;

        if config.grid {
            canvas.group(&axis::grid_style(theme))?;
            for &x in columns.iter().skip(1) {
                canvas.line(x, area.top, x, area.bottom, "")?;
            }
            frame.draw_horizontal_grid(canvas)?;
            canvas.group_end()?;
        }

        for ((cat, points), color) in categories.iter().zip(&polylines).zip(&frame.colors) {
            trace!(category = cat.name(), points = points.len(), "drawing polyline");
            let width = cat.line_width.unwrap_or(DEFAULT_LINE_WIDTH);
            canvas.group(&format!("stroke-width:{width};stroke:{color}"))?;
            for pair in points.windows(2) {
                canvas.line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, "")?;
            }
            canvas.group_end()?;
        }

        frame.draw_legend(canvas, categories, theme, CaptionAlign::Baseline)?;
        canvas.end()?;
        Ok(())
    }
}
