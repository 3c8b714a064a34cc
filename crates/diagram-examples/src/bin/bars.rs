// File: crates/diagram-examples/src/bin/bars.rs
// Summary: Yearly grouped bar chart with fixed and random colors, written to SVG.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use diagram_core::{BarChart, RandomColors};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut chart = BarChart::new();
    chart.set_labels(["2014", "2015", "2016"]);
    chart.config.title = "Revenue by year".into();
    chart.config.step = 50.0;
    chart.config.grid = true;
    chart.config.min_value = Some(-300.0);
    chart.config.max_value = Some(1000.0);

    chart.new_category("Revenue 2014").set_color("red").set_values([-25.0, 460.0, 100.0]);
    chart.new_category("Revenue 2015").set_color("green").set_values([34.0, 765.0, 45.0]);
    chart.new_category("Revenue 2015").set_values([34.0, 765.0, 230.0]);
    chart.new_category("Revenue 2015").set_values([12.0, 560.0, 765.0]);

    let out = std::path::PathBuf::from("target/out/example_bars.svg");
    std::fs::create_dir_all(out.parent().unwrap_or(std::path::Path::new(".")))?;
    chart.build(std::fs::File::create(&out)?, &mut RandomColors::from_entropy())?;
    info!(out = %out.display(), "wrote chart");
    Ok(())
}
