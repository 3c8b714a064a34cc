// File: crates/demo/src/main.rs
// Summary: Demo loads a labelled CSV table and renders it as line, bar and pie SVGs.

use anyhow::{Context, Result};
use diagram_core::theme;
use diagram_core::{BarChart, LineChart, PieChart, RandomColors, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Labels from the first column, one numeric series per remaining column.
struct Table {
    labels: Vec<String>,
    columns: Vec<(String, Vec<f64>)>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Accept path and theme from CLI or fall back to the bundled table (supports .csv/.cvs swap)
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/data/revenue.csv").to_string());
    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "classic".to_string());

    let (path, used_alt) = resolve_path(&raw)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let table = load_table(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(rows = table.labels.len(), series = table.columns.len(), "loaded table");
    if table.labels.is_empty() || table.columns.is_empty() {
        anyhow::bail!("no data loaded, check headers/delimiter.");
    }

    let options = RenderOptions { theme: theme::find(&theme_name), ..RenderOptions::default() };
    let step = nice_step(table.columns.iter().flat_map(|(_, v)| v.iter().copied()));
    let title = path.file_stem().and_then(|s| s.to_str()).unwrap_or("table").to_string();
    let mut colors = RandomColors::from_entropy();

    // 1) One polyline per column
    let mut line = LineChart::new();
    line.config.title = title.clone();
    line.config.step = step;
    line.config.grid = true;
    line.config.options = options.clone();
    line.set_labels(table.labels.iter().cloned());
    for (name, values) in &table.columns {
        line.new_category(name.as_str()).set_values(values.iter().copied());
    }
    let out_line = out_name_with(&path, "line");
    line.build(create(&out_line)?, &mut colors)
        .with_context(|| format!("rendering {}", out_line.display()))?;
    info!(out = %out_line.display(), "wrote line chart");

    // 2) Bars grouped by row
    let mut bars = BarChart::new();
    bars.config.title = title.clone();
    bars.config.step = step;
    bars.config.grid = true;
    bars.config.options = options.clone();
    bars.set_labels(table.labels.iter().cloned());
    for (name, values) in &table.columns {
        bars.new_category(name.as_str()).set_values(values.iter().copied());
    }
    let out_bars = out_name_with(&path, "bars");
    bars.build(create(&out_bars)?, &mut colors)
        .with_context(|| format!("rendering {}", out_bars.display()))?;
    info!(out = %out_bars.display(), "wrote bar chart");

    // 3) Column totals as wedges
    let mut pie = PieChart::new();
    pie.config.title = title;
    pie.config.show_values = true;
    pie.config.options = options;
    for (name, values) in &table.columns {
        pie.new_category(name.as_str()).set_value(values.iter().sum());
    }
    let out_pie = out_name_with(&path, "pie");
    pie.build(create(&out_pie)?, &mut colors)
        .with_context(|| format!("rendering {}", out_pie.display()))?;
    info!(out = %out_pie.display(), "wrote pie chart");

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.svg
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    out.push(format!("chart_{stem}_{suffix}.svg"));
    out
}

fn create(path: &Path) -> Result<std::fs::File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))
}

/// Load a table whose header row names the series and whose first column holds the labels.
fn load_table(path: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_owned).collect::<Vec<_>>();
    info!(?headers, "read headers");

    let mut table = Table {
        labels: Vec::new(),
        columns: headers.iter().skip(1).map(|h| (h.clone(), Vec::new())).collect(),
    };

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(label) = rec.get(0) else { continue };
        let parsed: Option<Vec<f64>> = (1..headers.len())
            .map(|i| rec.get(i).and_then(|s| s.parse::<f64>().ok()))
            .collect();
        match parsed {
            Some(values) => {
                table.labels.push(label.to_string());
                for ((_, column), v) in table.columns.iter_mut().zip(values) {
                    column.push(v);
                }
            }
            None => warn!(row = row + 1, "skipping row with a missing or non-numeric cell"),
        }
    }
    Ok(table)
}

/// Roughly ten ticks over the data, on a 1/2/5 x 10^k step.
fn nice_step(values: impl Iterator<Item = f64>) -> f64 {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let range = hi - lo;
    if !range.is_finite() || range <= 0.0 {
        return 1.0;
    }
    let raw = range / 10.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = match raw / magnitude {
        r if r <= 1.0 => 1.0,
        r if r <= 2.0 => 2.0,
        r if r <= 5.0 => 5.0,
        _ => 10.0,
    };
    step * magnitude
}
