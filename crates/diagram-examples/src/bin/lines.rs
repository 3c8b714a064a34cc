// File: crates/diagram-examples/src/bin/lines.rs
// Summary: Monthly revenue line chart with a grid, written to SVG.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use diagram_core::{LineChart, RandomColors};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut chart = LineChart::new();
    chart.set_labels([
        "January", "February", "March", "April", "May", "June", "July", "August", "September", "October",
        "November", "December",
    ]);
    chart.config.title = "Revenue by month".into();
    chart.config.step = 50.0;
    chart.config.grid = true;
    chart.config.min_value = Some(-300.0);
    chart.config.max_value = Some(800.0);

    chart.new_category("Revenue 2014").set_values([-25.0, 460.0, 100.0]);
    chart.new_category("Revenue 2015").set_values([234.0, 23.0, 345.0, 76.0, 267.0]);
    chart.new_category("Revenue 2014").set_values([368.0, -10.0, 100.0, 451.0, 589.0, 99.0]);
    chart.new_category("Revenue 2015").set_line_width(2).set_values([
        34.0, 765.0, 367.0, 796.0, 234.0, 235.0, 342.0, 23.0, 23.0, 345.0, 456.0, -300.0, 456.0, 34.0, 56.0,
        345.0, 56.0, 98.0, 123.0, 345.0, 234.0, 234.0, 234.0, 345.0,
    ]);

    let out = std::path::PathBuf::from("target/out/example_lines.svg");
    std::fs::create_dir_all(out.parent().unwrap_or(std::path::Path::new(".")))?;
    chart.build(std::fs::File::create(&out)?, &mut RandomColors::from_entropy())?;
    info!(out = %out.display(), "wrote chart");
    Ok(())
}
