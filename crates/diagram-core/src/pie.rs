// File: crates/diagram-core/src/pie.rs
// Summary: Pie chart builder, wedge angle sweep, polar geometry and the pie renderer.

use std::io::Write;

use tracing::{debug, trace};

use crate::axis::format_value;
use crate::canvas::VectorCanvas;
use crate::category::{Categories, CategoryData, PieCategory};
use crate::chart::{self, Render, RenderOptions};
use crate::color::{self, ColorSource};
use crate::error::{ChartError, Result};
use crate::geometry::{polar_offset, PointI32};
use crate::types::{
    HEIGHT, LABELS_FONT_SIZE, LEGEND_FONT_SIZE, LEGEND_MARGIN, LEGEND_MARK_SIZE, LEGEND_TEXT_GAP, PIE_GRAPH_SHARE,
    PIE_MARGIN, WIDTH,
};

/// Settings of a pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Print each value next to its wedge.
    pub show_values: bool,
    /// Distance of value labels from the centre; just outside the pie when `None`.
    pub values_radius: Option<u32>,
    /// Upper bound for the pie radius; the largest radius that fits when `None`.
    pub radius: Option<u32>,
    /// Draw negative values as wedges swept the other way instead of rejecting them.
    pub allow_negative: bool,
    pub options: RenderOptions,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: WIDTH,
            height: HEIGHT,
            show_values: false,
            values_radius: None,
            radius: None,
            allow_negative: false,
            options: RenderOptions::default(),
        }
    }
}

/// Categories drawn as proportional sectors of one circle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PieChart {
    pub config: PieConfig,
    categories: Categories<PieCategory>,
}

impl PieChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_category(&mut self, name: impl Into<String>) -> &mut PieCategory {
        self.categories.push(PieCategory::new(name))
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut PieCategory> {
        self.categories.get_mut(name)
    }

    pub fn categories(&self) -> &Categories<PieCategory> {
        &self.categories
    }

    pub fn snapshot(&self) -> PieDefinition {
        PieDefinition { chart: self.clone() }
    }

    pub fn build<W: Write>(&self, out: W, colors: &mut dyn ColorSource) -> Result<()> {
        self.snapshot().write_svg(out, colors).map(drop)
    }
}

/// Angular extent of one wedge, in degrees counter-clockwise from 3 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub start: f64,
    pub end: f64,
    /// `end - start`; negative for negative values.
    pub span: f64,
    /// SVG large-arc flag: the wedge covers more than half the circle.
    pub large_arc: bool,
}

impl Wedge {
    /// Direction halfway through the wedge.
    pub fn bisector(&self) -> f64 {
        self.end - self.span / 2.0
    }
}

/// Sweep the cumulative angle over `values`; every wedge spans `value / total * 360`.
pub fn wedges(values: &[f64]) -> Result<Vec<Wedge>> {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return Err(ChartError::ZeroTotal);
    }
    let mut seg = 0.0;
    Ok(values
        .iter()
        .map(|&v| {
            let span = v / total * 360.0;
            let start = seg;
            seg += span;
            Wedge { start, end: seg, span, large_arc: span.abs() > 180.0 }
        })
        .collect())
}

/// Pixel layout of the pie and its legend column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieGeometry {
    pub graph_width: i32,
    pub graph_height: i32,
    pub center: PointI32,
    pub radius: i32,
    pub values_radius: i32,
}

impl PieGeometry {
    /// Fit the largest pie into the left part of the surface, leaving room
    /// for the largest wedge shift.
    pub fn compute(config: &PieConfig, max_shift: u32) -> Result<Self> {
        let top = i32::try_from(config.options.insets.top).unwrap_or(i32::MAX);
        let graph_width = (f64::from(config.width) * PIE_GRAPH_SHARE) as i32;
        let graph_height = i32::try_from(config.height).unwrap_or(i32::MAX) - top;
        let shift = i32::try_from(max_shift).unwrap_or(i32::MAX);

        let fitted = graph_width.min(graph_height) / 2 - PIE_MARGIN - shift;
        let radius = match config.radius.and_then(|r| i32::try_from(r).ok()) {
            Some(r) if r > 0 && r < fitted => r,
            _ => fitted,
        };
        if radius <= 0 {
            return Err(ChartError::LayoutOverflow(format!(
                "no room for a pie in a {graph_width}x{graph_height} graph area with shift {max_shift}"
            )));
        }

        let values_radius = config
            .values_radius
            .filter(|&r| r > 0)
            .and_then(|r| i32::try_from(r).ok())
            .unwrap_or(radius + PIE_MARGIN / 2);

        Ok(Self {
            graph_width,
            graph_height,
            center: PointI32::new(graph_width / 2, top + graph_height / 2),
            radius,
            values_radius,
        })
    }
}

/// Relative path for one wedge: to the start of the arc, along it, and back.
pub fn wedge_path(origin: PointI32, radius: i32, wedge: &Wedge) -> String {
    let r = f64::from(radius);
    let from = polar_offset(wedge.start, r);
    let to = polar_offset(wedge.end, r);
    let sweep = u8::from(wedge.span < 0.0);
    format!(
        "M {},{} l {},{} a{radius},{radius} 0 {},{sweep} {},{} z",
        origin.x,
        origin.y,
        from.x,
        from.y,
        u8::from(wedge.large_arc),
        to.x - from.x,
        to.y - from.y,
    )
}

/// Frozen pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieDefinition {
    chart: PieChart,
}

impl PieDefinition {
    pub fn chart(&self) -> &PieChart {
        &self.chart
    }

    fn validate(&self) -> Result<Vec<f64>> {
        let PieChart { config, categories } = &self.chart;
        if categories.is_empty() {
            return Err(ChartError::EmptyCategories);
        }
        if let Some(c) = categories.iter().find(|c| !c.value.is_finite()) {
            return Err(ChartError::ValueOutOfRange {
                category: c.name().to_owned(),
                value: c.value,
                min: f64::MIN,
                max: f64::MAX,
            });
        }
        // A lone category is a full circle whatever its sign.
        if !config.allow_negative && categories.len() > 1 {
            if let Some(c) = categories.iter().find(|c| c.value < 0.0) {
                return Err(ChartError::NegativeValue { category: c.name().to_owned(), value: c.value });
            }
        }
        Ok(categories.iter().map(|c| c.value).collect())
    }
}

impl Render for PieDefinition {
    fn render(&self, canvas: &mut dyn VectorCanvas, source: &mut dyn ColorSource) -> Result<()> {
        let values = self.validate()?;
        let PieChart { config, categories } = &self.chart;
        let slices = wedges(&values)?;
        let max_shift = categories.iter().map(|c| c.shift).max().unwrap_or(0);
        let geo = PieGeometry::compute(config, max_shift)?;
        let colors = color::resolve(categories.iter().map(CategoryData::color), source);
        debug!(radius = geo.radius, cx = geo.center.x, cy = geo.center.y, "computed pie geometry");

        let theme = &config.options.theme;
        let value_style = format!(
            "text-anchor:middle;font-size:{LABELS_FONT_SIZE};fill:{}",
            theme.axis_label
        );
        chart::begin_document(canvas, config.width, config.height, &config.title, &config.options)?;

        let c = geo.center;
        if categories.len() == 1 {
            canvas.circle(c.x, c.y, geo.radius, &format!("fill:{}", colors[0]))?;
            if config.show_values {
                canvas.text(c.x, c.y, &format_value(values[0]), &value_style)?;
            }
        } else {
            for ((cat, wedge), color) in categories.iter().zip(&slices).zip(&colors) {
                trace!(category = cat.name(), start = wedge.start, end = wedge.end, "drawing wedge");
                let shift = polar_offset(wedge.bisector(), f64::from(cat.shift));
                let origin = PointI32::new(c.x + shift.x, c.y + shift.y);
                canvas.path(&wedge_path(origin, geo.radius, wedge), &format!("fill:{color}"))?;
                if config.show_values {
                    let at = polar_offset(wedge.bisector(), f64::from(geo.values_radius));
                    canvas.text(c.x + at.x, c.y + at.y, &format_value(cat.value), &value_style)?;
                }
            }
        }

        let pitch = LEGEND_MARK_SIZE.max(LEGEND_FONT_SIZE);
        let caption_style = format!("font-size:{LEGEND_FONT_SIZE};fill:{}", theme.axis_label);
        let x = geo.graph_width;
        let mut y = i32::try_from(config.options.insets.top).unwrap_or(i32::MAX) + PIE_MARGIN;
        for (cat, color) in categories.iter().zip(&colors) {
            canvas.rect(x, y, LEGEND_MARK_SIZE, LEGEND_MARK_SIZE, &format!("fill:{color}"))?;
            canvas.text(
                x + LEGEND_MARK_SIZE + LEGEND_TEXT_GAP,
                y + pitch / 2 + LEGEND_FONT_SIZE / 2,
                cat.name(),
                &caption_style,
            )?;
            y += pitch + LEGEND_MARGIN;
        }

        canvas.end()?;
        Ok(())
    }
}
