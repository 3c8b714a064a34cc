// File: crates/diagram-examples/src/bin/pie.rs
// Summary: Seven-wedge pie with shifted wedges and inner value labels, written to SVG.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use diagram_core::{PieChart, RandomColors};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut chart = PieChart::new();
    chart.config.title = "Share by category".into();
    chart.config.width = 700;
    chart.config.height = 500;
    chart.config.show_values = true;
    chart.config.values_radius = Some(180);

    let shift = 4;
    for (i, value) in [100.0, 200.0, 300.0, 12.0, 24.0, 57.0, 99.0].into_iter().enumerate() {
        chart.new_category(format!("Category {}", i + 1)).set_value(value).set_shift(shift);
    }

    let out = std::path::PathBuf::from("target/out/example_pie.svg");
    std::fs::create_dir_all(out.parent().unwrap_or(std::path::Path::new(".")))?;
    chart.build(std::fs::File::create(&out)?, &mut RandomColors::from_entropy())?;
    info!(out = %out.display(), "wrote chart");
    Ok(())
}
