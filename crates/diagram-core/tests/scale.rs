// File: crates/diagram-core/tests/scale.rs
// Purpose: Validate min/max inference, outward step rounding, tick counts and the quantized pixel mapping.

use diagram_core::geometry::RectI32;
use diagram_core::scale::{ieee_remainder, round_outward, value_bounds, Scale};
use diagram_core::ChartError;

fn plot() -> RectI32 {
    RectI32::from_ltrb(50, 50, 850, 450)
}

#[test]
fn remainder_rounds_quotient_half_to_even() {
    assert_eq!(ieee_remainder(-25.0, 50.0), -25.0);
    assert_eq!(ieee_remainder(75.0, 50.0), -25.0);
    assert_eq!(ieee_remainder(125.0, 50.0), 25.0);
    assert_eq!(ieee_remainder(460.0, 50.0), 10.0);
    assert_eq!(ieee_remainder(100.0, 50.0), 0.0);
}

#[test]
fn auto_bounds_cover_every_category_value() {
    let categories: Vec<Vec<f64>> = vec![
        vec![-25.0, 460.0, 100.0],
        vec![234.0, 23.0, 345.0, 76.0, 267.0],
        vec![34.0, 765.0, -300.0, 456.0],
    ];
    let (lo, hi) = value_bounds(categories.iter().flatten().copied()).expect("values present");
    assert_eq!(lo, -300.0);
    assert_eq!(hi, 765.0);
}

#[test]
fn value_bounds_of_nothing_is_none() {
    assert_eq!(value_bounds(std::iter::empty()), None);
}

#[test]
fn tick_rounding_scenario() {
    let scale = Scale::compute([-25.0, 460.0], None, None, 50.0, plot()).expect("valid scale");
    assert_eq!(scale.rounded_min, -50.0);
    assert_eq!(scale.rounded_max, 470.0);
    assert_eq!(scale.tick_count, 11);
    assert_eq!(scale.pixels_per_tick, 40);
    assert_eq!(scale.bottom, 450);
}

#[test]
fn rounding_is_outward_and_bounded_by_half_a_step() {
    let cases = [
        (-25.0, 460.0, 50.0),
        (3.7, 98.2, 10.0),
        (-1234.5, -12.25, 100.0),
        (0.0, 1.0, 0.25),
        (17.0, 1017.0, 7.0),
    ];
    for (min, max, step) in cases {
        let (lo, hi) = round_outward(min, max, step);
        assert!(lo <= min, "{lo} > {min}");
        assert!(hi >= max, "{hi} < {max}");
        assert!(min - lo <= step / 2.0 + 1e-9);
        assert!(hi - max <= step / 2.0 + 1e-9);
    }
}

#[test]
fn on_step_bounds_are_kept() {
    assert_eq!(round_outward(-300.0, 1000.0, 50.0), (-300.0, 1000.0));
}

#[test]
fn explicit_bounds_win_over_values() {
    let scale = Scale::compute([1.0, 2.0], Some(0.0), Some(100.0), 10.0, plot()).unwrap();
    assert_eq!((scale.rounded_min, scale.rounded_max), (0.0, 100.0));
    assert_eq!(scale.tick_count, 11);
}

#[test]
fn one_explicit_bound_is_completed_from_values() {
    let scale = Scale::compute([5.0, 42.0], Some(-100.0), None, 10.0, plot()).unwrap();
    assert_eq!(scale.rounded_min, -100.0);
    assert_eq!(scale.rounded_max, 44.0);
    assert_eq!(scale.tick_count, 15);
}

#[test]
fn single_tick_range_fails_instead_of_dividing_by_zero() {
    let err = Scale::compute([0.0, 10.0], None, None, 50.0, plot()).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateRange { .. }), "{err}");
}

#[test]
fn equal_min_and_max_is_degenerate() {
    let err = Scale::compute([5.0, 5.0, 5.0], None, None, 1.0, plot()).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateRange { .. }));

    let err = Scale::compute(Vec::<f64>::new(), Some(10.0), Some(0.0), 1.0, plot()).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateRange { .. }));
}

#[test]
fn no_values_without_bounds_is_degenerate() {
    let err = Scale::compute(Vec::<f64>::new(), None, None, 1.0, plot()).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateRange { .. }));
}

#[test]
fn non_positive_step_is_rejected() {
    for step in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let err = Scale::compute([0.0, 10.0], None, None, step, plot()).unwrap_err();
        assert!(matches!(err, ChartError::InvalidStep(_)), "step {step}: {err}");
    }
}

#[test]
fn ticks_that_do_not_fit_the_plot_overflow() {
    let tiny = RectI32::from_ltrb(0, 0, 100, 5);
    let err = Scale::compute([0.0, 100.0], None, None, 1.0, tiny).unwrap_err();
    assert!(matches!(err, ChartError::LayoutOverflow(_)));
}

#[test]
fn tick_count_is_at_least_two() {
    for (values, step) in [([0.0, 1.0], 1.0), ([-7.5, 7.5], 5.0), ([0.1, 0.2], 0.1), ([3.0, 400.0], 25.0)] {
        let scale = Scale::compute(values, None, None, step, plot()).unwrap();
        assert!(scale.tick_count >= 2);
    }
}

#[test]
fn on_tick_values_map_exactly_to_tick_rows() {
    for step in [50.0, 0.1, 7.0, 0.3] {
        let scale = Scale::compute([-2.5 * step, 9.3 * step], None, None, step, plot()).unwrap();
        for k in 0..scale.tick_count {
            let v = scale.rounded_min + k as f64 * step;
            assert_eq!(
                scale.to_px(v),
                scale.bottom - k as i32 * scale.pixels_per_tick,
                "step {step}, tick {k}"
            );
        }
    }
}

#[test]
fn sub_step_values_are_quantized_not_linear() {
    let scale = Scale::compute([-25.0, 460.0], None, None, 50.0, plot()).unwrap();
    // 510 above the minimum: ten whole ticks plus 10/50 of a tick, floored.
    assert_eq!(scale.to_px(460.0), 450 - (10 * 40 + 8));
    assert_eq!(scale.to_px(-25.0), 430);
    assert_eq!(scale.height_of(scale.rounded_min), 0);
}

#[test]
fn contains_follows_rounded_range() {
    let scale = Scale::compute([-25.0, 460.0], None, None, 50.0, plot()).unwrap();
    assert!(scale.contains(-50.0));
    assert!(scale.contains(470.0));
    assert!(!scale.contains(-50.1));
    assert!(!scale.contains(f64::NAN));
}

#[test]
fn huge_ranges_overflow_instead_of_panicking() {
    let err = Scale::compute([0.0, 1e20], None, None, 1.0, plot()).unwrap_err();
    assert!(matches!(err, ChartError::LayoutOverflow(_)), "{err}");

    let err = Scale::compute([-1e308, 1e308], None, None, 1.0, plot()).unwrap_err();
    assert!(matches!(err, ChartError::LayoutOverflow(_)), "{err}");
}

#[test]
fn non_finite_explicit_bounds_are_degenerate() {
    for (lo, hi) in [
        (Some(f64::NEG_INFINITY), None),
        (None, Some(f64::INFINITY)),
        (Some(f64::NAN), Some(10.0)),
    ] {
        let err = Scale::compute([1.0, 2.0], lo, hi, 1.0, plot()).unwrap_err();
        assert!(matches!(err, ChartError::DegenerateRange { .. }), "{lo:?}..{hi:?}: {err}");
    }
}

#[test]
fn tick_rows_step_up_from_the_bottom() {
    let scale = Scale::compute([-25.0, 460.0], None, None, 50.0, plot()).unwrap();
    assert_eq!(scale.tick_row(0), 450);
    assert_eq!(scale.tick_row(scale.tick_count - 1), 50);
}
