// File: crates/diagram-core/src/chart.rs
// Summary: Chart configuration, the Render capability, and the kind-selecting Chart/Definition enums.

use std::io::{self, Write};

use crate::bar::{BarChart, BarDefinition};
use crate::canvas::{SvgCanvas, VectorCanvas};
use crate::color::ColorSource;
use crate::error::Result;
use crate::line::{LineChart, LineDefinition};
use crate::pie::{PieChart, PieDefinition};
use crate::theme::Theme;
use crate::types::{Insets, LabelPolicy, HEIGHT, TITLE_FONT_SIZE, WIDTH};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub insets: Insets,
    pub theme: Theme,
}

/// Settings of a line or bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub grid: bool,
    /// Bottom of the value axis; the smallest value when `None`.
    pub min_value: Option<f64>,
    /// Top of the value axis; the largest value when `None`.
    pub max_value: Option<f64>,
    /// Distance between ticks. Must be set to a positive value.
    pub step: f64,
    pub label_policy: LabelPolicy,
    pub options: RenderOptions,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: WIDTH,
            height: HEIGHT,
            grid: false,
            min_value: None,
            max_value: None,
            step: 0.0,
            label_policy: LabelPolicy::default(),
            options: RenderOptions::default(),
        }
    }
}

/// A frozen chart that can draw itself onto any canvas.
pub trait Render {
    /// Validate, lay out and emit the chart. Nothing reaches `canvas`
    /// unless validation succeeds.
    fn render(&self, canvas: &mut dyn VectorCanvas, colors: &mut dyn ColorSource) -> Result<()>;

    /// Render as an SVG document into `out` and hand the writer back.
    fn write_svg<W: Write>(&self, out: W, colors: &mut dyn ColorSource) -> Result<W>
    where
        Self: Sized,
    {
        let mut canvas = SvgCanvas::new(out);
        self.render(&mut canvas, colors)?;
        Ok(canvas.into_inner())
    }

    fn to_svg_string(&self, colors: &mut dyn ColorSource) -> Result<String>
    where
        Self: Sized,
    {
        let bytes = self.write_svg(Vec::new(), colors)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Open the document: surface, optional background and the centred title.
pub(crate) fn begin_document(
    canvas: &mut dyn VectorCanvas,
    width: u32,
    height: u32,
    title: &str,
    options: &RenderOptions,
) -> io::Result<()> {
    canvas.start(width, height)?;
    if let Some(bg) = &options.theme.background {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        canvas.rect(0, 0, w, h, &format!("fill:{bg}"))?;
    }
    let x = i32::try_from(width / 2).unwrap_or(i32::MAX);
    let y = i32::try_from(options.insets.top / 2).unwrap_or(i32::MAX);
    canvas.text(
        x,
        y,
        title,
        &format!(
            "text-anchor:middle;alignment-baseline:central;font-size:{TITLE_FONT_SIZE};fill:{}",
            options.theme.title
        ),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// Mutable chart of a kind chosen at creation.
#[derive(Clone, Debug)]
pub enum Chart {
    Line(LineChart),
    Bar(BarChart),
    Pie(PieChart),
}

impl Chart {
    pub fn new(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Line => Chart::Line(LineChart::new()),
            ChartKind::Bar => Chart::Bar(BarChart::new()),
            ChartKind::Pie => Chart::Pie(PieChart::new()),
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            Chart::Line(_) => ChartKind::Line,
            Chart::Bar(_) => ChartKind::Bar,
            Chart::Pie(_) => ChartKind::Pie,
        }
    }

    /// Freeze the current state for rendering.
    pub fn snapshot(&self) -> Definition {
        match self {
            Chart::Line(c) => Definition::Line(c.snapshot()),
            Chart::Bar(c) => Definition::Bar(c.snapshot()),
            Chart::Pie(c) => Definition::Pie(c.snapshot()),
        }
    }

    /// Snapshot and write the SVG document to `out`.
    pub fn build<W: Write>(&self, out: W, colors: &mut dyn ColorSource) -> Result<()> {
        self.snapshot().write_svg(out, colors).map(drop)
    }
}

/// Immutable chart of any kind.
#[derive(Clone, Debug)]
pub enum Definition {
    Line(LineDefinition),
    Bar(BarDefinition),
    Pie(PieDefinition),
}

impl Render for Definition {
    fn render(&self, canvas: &mut dyn VectorCanvas, colors: &mut dyn ColorSource) -> Result<()> {
        match self {
            Definition::Line(d) => d.render(canvas, colors),
            Definition::Bar(d) => d.render(canvas, colors),
            Definition::Pie(d) => d.render(canvas, colors),
        }
    }
}
