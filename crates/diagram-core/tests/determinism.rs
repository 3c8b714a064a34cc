// File: crates/diagram-core/tests/determinism.rs
// Purpose: Same definition and same color source must give byte-identical documents.

use diagram_core::{
    BarChart, Chart, ChartKind, Color, ColorSource, Palette, PieChart, RandomColors, Render,
};

fn bars(colored: bool) -> BarChart {
    let mut c = BarChart::new();
    c.config.step = 25.0;
    c.config.grid = true;
    c.set_labels(["q1", "q2", "q3", "q4"]);
    for (i, name) in ["north", "south", "east"].into_iter().enumerate() {
        let cat = c.new_category(name);
        cat.set_values((0..4).map(|k| (k * 20 + i * 15) as f64));
        if colored {
            cat.set_color(["red", "green", "blue"][i]);
        }
    }
    c
}

#[test]
fn explicit_colors_ignore_the_source() {
    let def = bars(true).snapshot();
    let a = def.to_svg_string(&mut RandomColors::from_entropy()).unwrap();
    let b = def.to_svg_string(&mut RandomColors::from_entropy()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn seeded_random_colors_repeat() {
    let def = bars(false).snapshot();
    let a = def.to_svg_string(&mut RandomColors::seeded(7)).unwrap();
    let b = def.to_svg_string(&mut RandomColors::seeded(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rendering_twice_from_one_snapshot_is_stable() {
    let def = bars(false).snapshot();
    let first = def.to_svg_string(&mut Palette::default()).unwrap();
    let second = def.to_svg_string(&mut Palette::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn snapshot_is_isolated_from_later_edits() {
    let mut chart = bars(true);
    let def = chart.snapshot();
    let before = def.to_svg_string(&mut Palette::default()).unwrap();
    chart.new_category("west").set_values([1.0, 2.0, 3.0, 4.0]);
    chart.config.title = "changed".into();
    assert_eq!(def.to_svg_string(&mut Palette::default()).unwrap(), before);
    assert_eq!(def.chart().categories().len(), 3);
}

#[test]
fn palette_cycles() {
    let mut p = Palette::new(vec![Color::from("red"), Color::from("blue")]);
    let got: Vec<Color> = (0..5).map(|_| p.next_color()).collect();
    let names: Vec<&str> = got.iter().map(Color::as_str).collect();
    assert_eq!(names, ["red", "blue", "red", "blue", "red"]);

    let mut fallback = Palette::new(Vec::new());
    assert_eq!(fallback.next_color().as_str(), "#4e79a7");
}

#[test]
fn random_colors_are_hex_triples() {
    let mut rc = RandomColors::seeded(1);
    for _ in 0..20 {
        let c = rc.next_color();
        let s = c.as_str();
        assert_eq!(s.len(), 7);
        assert!(s.starts_with('#'));
        assert!(s[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}

#[test]
fn chart_enum_dispatches_on_kind() {
    for kind in [ChartKind::Line, ChartKind::Bar, ChartKind::Pie] {
        assert_eq!(Chart::new(kind).kind(), kind);
    }

    let mut pie = PieChart::new();
    pie.new_category("a").set_value(2.0);
    pie.new_category("b").set_value(1.0);
    let chart = Chart::Pie(pie);
    let mut out = Vec::new();
    chart.build(&mut out, &mut Palette::default()).unwrap();
    let svg = String::from_utf8(out).unwrap();
    assert_eq!(svg.matches("<path ").count(), 2);

    let via_def = chart.snapshot().to_svg_string(&mut Palette::default()).unwrap();
    assert_eq!(svg, via_def);
}

#[test]
fn empty_chart_from_enum_fails() {
    let err = Chart::new(ChartKind::Line).build(Vec::new(), &mut Palette::default()).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn definitions_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<diagram_core::LineDefinition>();
    assert_send_sync::<diagram_core::BarDefinition>();
    assert_send_sync::<diagram_core::PieDefinition>();

    let def = bars(true).snapshot();
    let svg = std::thread::spawn(move || def.to_svg_string(&mut Palette::default()).unwrap())
        .join()
        .unwrap();
    assert!(svg.ends_with("</svg>\n"));
}
