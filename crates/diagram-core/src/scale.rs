// File: crates/diagram-core/src/scale.rs
// Summary: Step-aligned value axis and the quantized value -> pixel transform.

use crate::error::{ChartError, Result};
use crate::geometry::RectI32;

/// Value Y coordinate.
pub type Value = f64;

/// Offsets closer than this to a whole number of steps count as on-tick.
const SNAP_EPSILON: f64 = 1e-9;

/// IEEE 754 remainder of `x / step`: the quotient is rounded half to even,
/// so the magnitude of the result never exceeds `step / 2`.
#[inline]
pub fn ieee_remainder(x: Value, step: Value) -> Value {
    x - (x / step).round_ties_even() * step
}

/// Smallest and largest finite value, or `None` when there are none.
pub fn value_bounds(values: impl IntoIterator<Item = Value>) -> Option<(Value, Value)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Push `min` down and `max` up by the magnitude of their step remainders.
pub fn round_outward(min: Value, max: Value, step: Value) -> (Value, Value) {
    let rem = ieee_remainder(min, step).abs();
    let lo = if rem > 0.0 { min - rem } else { min };
    let rem = ieee_remainder(max, step).abs();
    let hi = if rem > 0.0 { max + rem } else { max };
    (lo, hi)
}

/// Vertical value scale over a plot area, computed once per render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub rounded_min: Value,
    pub rounded_max: Value,
    pub step: Value,
    /// Number of labelled rows, both ends included. Always >= 2.
    pub tick_count: usize,
    /// Whole pixels between adjacent ticks.
    pub pixels_per_tick: i32,
    /// Pixel row of `rounded_min`.
    pub bottom: i32,
}

impl Scale {
    /// Build the scale for `values`, using the explicit bounds where given
    /// and the observed extremes otherwise.
    pub fn compute(
        values: impl IntoIterator<Item = Value>,
        explicit_min: Option<Value>,
        explicit_max: Option<Value>,
        step: Value,
        plot: RectI32,
    ) -> Result<Self> {
        if !(step > 0.0 && step.is_finite()) {
            return Err(ChartError::InvalidStep(step));
        }

        if let Some(b) = explicit_min.into_iter().chain(explicit_max).find(|b| !b.is_finite()) {
            return Err(ChartError::DegenerateRange { min: b, max: b, step });
        }

        let observed = value_bounds(values);
        let lo = explicit_min.or(observed.map(|(lo, _)| lo));
        let hi = explicit_max.or(observed.map(|(_, hi)| hi));
        let (min, max) = match (lo, hi) {
            (Some(lo), Some(hi)) => (lo, hi),
            (lo, hi) => {
                let v = lo.or(hi).unwrap_or(0.0);
                return Err(ChartError::DegenerateRange { min: v, max: v, step });
            }
        };
        if !(min < max) {
            return Err(ChartError::DegenerateRange { min, max, step });
        }

        let (rounded_min, rounded_max) = round_outward(min, max, step);
        // Stays in f64 until it is known to fit the plot.
        let intervals = ((rounded_max - rounded_min) / step + 0.5).floor();
        if intervals < 1.0 {
            return Err(ChartError::DegenerateRange { min: rounded_min, max: rounded_max, step });
        }
        if !(intervals <= f64::from(plot.height())) {
            return Err(ChartError::LayoutOverflow(format!(
                "{intervals} tick intervals do not fit into a plot {} pixels high",
                plot.height()
            )));
        }

        let intervals = intervals as i32;
        let tick_count = intervals as usize + 1;
        let pixels_per_tick = plot.height() / intervals;

        Ok(Self { rounded_min, rounded_max, step, tick_count, pixels_per_tick, bottom: plot.bottom })
    }

    /// Quantized transform: whole steps map to whole tick distances and only
    /// the sub-step remainder is interpolated, so on-tick values land exactly
    /// on their tick row.
    pub fn to_px(&self, v: Value) -> i32 {
        let offset = v - self.rounded_min;
        let ratio = offset / self.step;
        let nearest = ratio.round();
        let whole = if (ratio - nearest).abs() < SNAP_EPSILON { nearest } else { ratio.floor() };
        let per_value = f64::from(self.pixels_per_tick) / self.step;
        let rem_px = ((offset - whole * self.step) * per_value).floor().max(0.0);
        self.bottom - (whole as i32 * self.pixels_per_tick + rem_px as i32)
    }

    /// Pixel distance between the `rounded_min` row and the row of `v`.
    #[inline]
    pub fn height_of(&self, v: Value) -> i32 {
        self.bottom - self.to_px(v)
    }

    #[inline]
    pub fn tick_value(&self, i: usize) -> Value {
        self.rounded_min + i as f64 * self.step
    }

    #[inline]
    pub fn tick_row(&self, i: usize) -> i32 {
        self.bottom - i as i32 * self.pixels_per_tick
    }

    /// Whether `v` lies on the drawn axis.
    #[inline]
    pub fn contains(&self, v: Value) -> bool {
        v >= self.rounded_min && v <= self.rounded_max
    }
}
