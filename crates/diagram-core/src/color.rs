// File: crates/diagram-core/src/color.rs
// Summary: SVG paint values and injectable sources for automatic category colors.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Any SVG paint value: a keyword (`red`), a hex triple or an `rgb()` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// `#rrggbb` from an RGB triple.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Supplies colors for categories that were added without one.
///
/// Renderers ask for exactly one color per uncolored category, in category
/// insertion order, so a deterministic source gives deterministic output.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Random RGB triples. Unseeded instances make every render differ.
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    /// Reproducible sequence.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Seeded from the operating system; output is not reproducible.
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        let r = self.rng.random_range(0..255u8);
        let g = self.rng.random_range(0..255u8);
        let b = self.rng.random_range(0..255u8);
        Color::rgb(r, g, b)
    }
}

/// Cycles through a fixed list of colors.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<Color>,
    next: usize,
}

impl Palette {
    /// Falls back to the built-in list when `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors, next: 0 }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let colors = ["#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7"]
            .into_iter()
            .map(Color::from)
            .collect();
        Self { colors, next: 0 }
    }
}

impl ColorSource for Palette {
    fn next_color(&mut self) -> Color {
        let c = self.colors[self.next % self.colors.len()].clone();
        self.next += 1;
        c
    }
}

/// Resolve one color per category: the explicit one, or the next from `source`.
pub(crate) fn resolve<'a, I>(explicit: I, source: &mut dyn ColorSource) -> Vec<Color>
where
    I: IntoIterator<Item = Option<&'a Color>>,
{
    explicit
        .into_iter()
        .map(|c| match c {
            Some(c) => c.clone(),
            None => source.next_color(),
        })
        .collect()
}
