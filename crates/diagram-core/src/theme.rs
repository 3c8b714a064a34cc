// File: crates/diagram-core/src/theme.rs
// Summary: Color presets for the non-data parts of a chart.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Painted as a full-surface rect when set.
    pub background: Option<Color>,
    pub title: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub grid: Color,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: None,
            title: Color::new("#3C3C3C"),
            axis_line: Color::new("darkgray"),
            axis_label: Color::new("#3C3C3C"),
            grid: Color::new("lightgray"),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Some(Color::rgb(18, 18, 20)),
            title: Color::rgb(235, 235, 245),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(210, 210, 220),
            grid: Color::rgb(40, 40, 45),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Some(Color::rgb(0xff, 0xff, 0xff)),
            title: Color::rgb(0x00, 0x00, 0x00),
            axis_line: Color::rgb(0x00, 0x00, 0x00),
            axis_label: Color::rgb(0x00, 0x00, 0x00),
            grid: Color::rgb(0x88, 0x88, 0x88),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

