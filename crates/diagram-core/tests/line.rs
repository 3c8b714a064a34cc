// File: crates/diagram-core/tests/line.rs
// Purpose: Validate line chart validation, truncation policy, segment geometry, grid and legend output.

use diagram_core::{
    ChartError, LabelPolicy, LineChart, Palette, Primitive, RecordingCanvas, Render,
};

fn chart() -> LineChart {
    let mut chart = LineChart::new();
    chart.config.title = "Revenue".into();
    chart.config.step = 50.0;
    chart.set_labels(["a", "b", "c"]);
    chart
}

/// Lines emitted inside the first group whose style equals `style`.
fn lines_in_group(rec: &RecordingCanvas, style: &str) -> Vec<(i32, i32, i32, i32)> {
    let start = rec
        .primitives
        .iter()
        .position(|p| matches!(p, Primitive::Group { style: s } if s == style))
        .unwrap_or_else(|| panic!("no group with style {style}"));
    rec.primitives[start + 1..]
        .iter()
        .take_while(|p| !matches!(p, Primitive::GroupEnd))
        .filter_map(|p| match p {
            Primitive::Line { x1, y1, x2, y2, .. } => Some((*x1, *y1, *x2, *y2)),
            _ => None,
        })
        .collect()
}

fn render(chart: &LineChart) -> Result<RecordingCanvas, ChartError> {
    let mut rec = RecordingCanvas::new();
    chart.snapshot().render(&mut rec, &mut Palette::default())?;
    Ok(rec)
}

#[test]
fn zero_step_is_invalid() {
    let mut c = chart();
    c.config.step = 0.0;
    c.new_category("x").set_values([1.0, 2.0, 3.0]);
    let mut rec = RecordingCanvas::new();
    let err = c.snapshot().render(&mut rec, &mut Palette::default()).unwrap_err();
    assert!(matches!(err, ChartError::InvalidStep(s) if s == 0.0));
    assert!(rec.primitives.is_empty(), "nothing may be emitted before validation passes");
}

#[test]
fn no_categories_is_an_error() {
    let c = chart();
    let mut rec = RecordingCanvas::new();
    let err = c.snapshot().render(&mut rec, &mut Palette::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyCategories));
    assert!(rec.primitives.is_empty());
}

#[test]
fn flat_series_is_degenerate() {
    let mut c = chart();
    c.new_category("x").set_values([7.0, 7.0, 7.0]);
    assert!(matches!(render(&c), Err(ChartError::DegenerateRange { .. })));
}

#[test]
fn one_label_is_not_enough() {
    let mut c = chart();
    c.set_labels(["only"]);
    c.new_category("x").set_values([0.0, 100.0]);
    assert!(matches!(render(&c), Err(ChartError::TooFewLabels { required: 2, found: 1 })));
}

#[test]
fn segments_follow_the_quantized_grid_and_stop_at_the_last_label() {
    let mut c = chart();
    c.new_category("x").set_color("red").set_values([0.0, 50.0, 100.0, 150.0]);
    let rec = render(&c).unwrap();

    // 0..150 in steps of 50 => 4 ticks, 400 / 3 = 133 pixels each.
    let segments = lines_in_group(&rec, "stroke-width:1;stroke:red");
    assert_eq!(segments, vec![(50, 450, 450, 317), (450, 317, 850, 184)]);
}

#[test]
fn short_series_draws_its_prefix() {
    let mut c = chart();
    c.new_category("long").set_color("red").set_values([0.0, 100.0, 50.0]);
    c.new_category("short").set_color("blue").set_values([100.0, 0.0]);
    let rec = render(&c).unwrap();
    assert_eq!(lines_in_group(&rec, "stroke-width:1;stroke:red").len(), 2);
    assert_eq!(lines_in_group(&rec, "stroke-width:1;stroke:blue"), vec![(50, 50, 450, 450)]);
}

#[test]
fn strict_policy_rejects_extra_values() {
    let mut c = chart();
    c.config.label_policy = LabelPolicy::Strict;
    c.new_category("x").set_values([0.0, 50.0, 100.0, 150.0]);
    let err = render(&c).unwrap_err();
    match err {
        ChartError::LabelMismatch { category, values, labels } => {
            assert_eq!(category, "x");
            assert_eq!((values, labels), (4, 3));
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn values_outside_explicit_bounds_are_rejected() {
    let mut c = chart();
    c.config.min_value = Some(0.0);
    c.config.max_value = Some(100.0);
    c.new_category("x").set_values([0.0, 150.0, 50.0]);
    let err = render(&c).unwrap_err();
    assert!(matches!(err, ChartError::ValueOutOfRange { value, .. } if value == 150.0));
}

#[test]
fn astronomical_values_fail_cleanly() {
    let mut c = chart();
    c.config.step = 1.0;
    c.new_category("x").set_values([0.0, 1e20, 5.0]);
    let mut rec = RecordingCanvas::new();
    let err = c.snapshot().render(&mut rec, &mut Palette::default()).unwrap_err();
    assert!(matches!(err, ChartError::LayoutOverflow(_)), "{err}");
    assert!(rec.primitives.is_empty());

    let mut c = chart();
    c.config.min_value = Some(f64::NEG_INFINITY);
    c.new_category("x").set_values([0.0, 50.0, 100.0]);
    assert!(matches!(render(&c), Err(ChartError::DegenerateRange { .. })));
}

#[test]
fn line_width_is_applied_to_the_group() {
    let mut c = chart();
    c.new_category("x").set_color("red").set_line_width(3).set_values([0.0, 50.0, 100.0]);
    let rec = render(&c).unwrap();
    assert_eq!(lines_in_group(&rec, "stroke-width:3;stroke:red").len(), 2);
}

#[test]
fn grid_draws_one_line_per_label_boundary_and_tick() {
    let mut c = chart();
    c.config.grid = true;
    c.new_category("x").set_values([0.0, 50.0, 100.0, 150.0]);
    let rec = render(&c).unwrap();
    let grid = lines_in_group(&rec, "stroke-width:1;stroke:lightgray");
    let vertical = grid.iter().filter(|l| l.0 == l.2).count();
    let horizontal = grid.iter().filter(|l| l.1 == l.3).count();
    assert_eq!((vertical, horizontal), (2, 3));
}

#[test]
fn labels_ticks_and_legend_are_written() {
    let mut c = chart();
    c.new_category("2014").set_values([0.0, 50.0, 150.0]);
    c.new_category("2015").set_values([10.0, 20.0, 30.0]);
    let rec = render(&c).unwrap();
    let texts: Vec<&str> = rec.texts().collect();
    for want in ["Revenue", "a", "b", "c", "0.00", "50.00", "100.00", "150.00", "2014", "2015"] {
        assert!(texts.contains(&want), "missing text {want}: {texts:?}");
    }
    // Two legend swatches.
    assert_eq!(rec.rects().count(), 2);
    assert!(matches!(rec.primitives.first(), Some(Primitive::Start { width: 900, height: 600 })));
    assert!(matches!(rec.primitives.last(), Some(Primitive::End)));
}

#[test]
fn legend_captions_sit_on_their_baseline() {
    let mut c = chart();
    c.new_category("2014").set_values([0.0, 50.0, 150.0]);
    c.new_category("2015").set_values([10.0, 20.0, 30.0]);
    let rec = render(&c).unwrap();
    // Two slots 43 px high starting at 491; caption half a font size below the centre.
    let found = rec.primitives.iter().any(|p| {
        matches!(p, Primitive::Text { x: 465, y: 518, text, style }
            if text == "2014" && style == "font-size:12;fill:#3C3C3C")
    });
    assert!(found, "no baseline caption for the first legend entry");
}

#[test]
fn uncolored_categories_take_palette_colors_in_order() {
    let mut c = chart();
    c.new_category("first").set_values([0.0, 50.0, 100.0]);
    c.new_category("second").set_color("black").set_values([0.0, 50.0, 100.0]);
    c.new_category("third").set_values([0.0, 50.0, 100.0]);
    let rec = render(&c).unwrap();
    assert_eq!(lines_in_group(&rec, "stroke-width:1;stroke:#4e79a7").len(), 2);
    assert_eq!(lines_in_group(&rec, "stroke-width:1;stroke:black").len(), 2);
    assert_eq!(lines_in_group(&rec, "stroke-width:1;stroke:#f28e2b").len(), 2);
}

#[test]
fn repeated_names_are_kept_as_separate_series() {
    let mut c = chart();
    c.new_category("dup").set_values([0.0, 50.0, 100.0]);
    c.new_category("dup").set_values([100.0, 50.0, 0.0]);
    assert_eq!(c.categories().len(), 2);
    c.category_mut("dup").unwrap().set_color("green");
    let rec = render(&c).unwrap();
    assert_eq!(lines_in_group(&rec, "stroke-width:1;stroke:green")[0], (50, 450, 450, 250));
}
