// File: crates/diagram-core/src/lib.rs
// Summary: Core library entry point; exports chart builders and SVG rendering.

pub mod axis;
pub mod bar;
pub mod canvas;
pub mod category;
pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod line;
pub mod pie;
pub mod scale;
pub mod theme;
pub mod types;

pub use bar::{BarChart, BarDefinition};
pub use canvas::{Primitive, RecordingCanvas, SvgCanvas, VectorCanvas};
pub use category::{BarCategory, Categories, CategoryData, LineCategory, PieCategory};
pub use chart::{Chart, ChartConfig, ChartKind, Definition, Render, RenderOptions};
pub use color::{Color, ColorSource, Palette, RandomColors};
pub use error::ChartError;
pub use line::{LineChart, LineDefinition};
pub use pie::{PieChart, PieConfig, PieDefinition};
pub use scale::Scale;
pub use theme::Theme;
pub use types::{Insets, LabelPolicy};
