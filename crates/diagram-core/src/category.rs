// File: crates/diagram-core/src/category.rs
// Summary: Category models for each chart kind and the ordered, name-indexed container holding them.

use indexmap::IndexMap;

use crate::color::Color;

/// Read access shared by every category kind.
pub trait CategoryData {
    fn name(&self) -> &str;
    fn color(&self) -> Option<&Color>;
    fn values(&self) -> &[f64];
}

/// One polyline of a line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineCategory {
    name: String,
    pub color: Option<Color>,
    /// Stroke width in pixels; 1 when unset.
    pub line_width: Option<u32>,
    values: Vec<f64>,
}

impl LineCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), color: None, line_width: None, values: Vec::new() }
    }

    /// Replace the values, in label order.
    pub fn set_values(&mut self, values: impl IntoIterator<Item = f64>) -> &mut Self {
        self.values = values.into_iter().collect();
        self
    }

    pub fn set_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    pub fn set_line_width(&mut self, width: u32) -> &mut Self {
        self.line_width = Some(width);
        self
    }
}

impl CategoryData for LineCategory {
    fn name(&self) -> &str { &self.name }
    fn color(&self) -> Option<&Color> { self.color.as_ref() }
    fn values(&self) -> &[f64] { &self.values }
}

/// One bar per label in a bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarCategory {
    name: String,
    pub color: Option<Color>,
    values: Vec<f64>,
}

impl BarCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), color: None, values: Vec::new() }
    }

    pub fn set_values(&mut self, values: impl IntoIterator<Item = f64>) -> &mut Self {
        self.values = values.into_iter().collect();
        self
    }

    pub fn set_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.color = Some(color.into());
        self
    }
}

impl CategoryData for BarCategory {
    fn name(&self) -> &str { &self.name }
    fn color(&self) -> Option<&Color> { self.color.as_ref() }
    fn values(&self) -> &[f64] { &self.values }
}

/// One wedge of a pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieCategory {
    name: String,
    pub color: Option<Color>,
    pub value: f64,
    /// Outward displacement of the wedge along its bisector, in pixels.
    pub shift: u32,
}

impl PieCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), color: None, value: 0.0, shift: 0 }
    }

    pub fn set_value(&mut self, value: f64) -> &mut Self {
        self.value = value;
        self
    }

    pub fn set_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    pub fn set_shift(&mut self, shift: u32) -> &mut Self {
        self.shift = shift;
        self
    }
}

impl CategoryData for PieCategory {
    fn name(&self) -> &str { &self.name }
    fn color(&self) -> Option<&Color> { self.color.as_ref() }
    fn values(&self) -> &[f64] { std::slice::from_ref(&self.value) }
}

/// Categories in insertion order with a name index.
///
/// Names may repeat; lookups by name return entries in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Categories<C> {
    items: Vec<C>,
    by_name: IndexMap<String, Vec<usize>>,
}

impl<C> Default for Categories<C> {
    fn default() -> Self {
        Self { items: Vec::new(), by_name: IndexMap::new() }
    }
}

impl<C: CategoryData> Categories<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append and hand back the stored category for further setup.
    pub fn push(&mut self, category: C) -> &mut C {
        let idx = self.items.len();
        self.by_name.entry(category.name().to_owned()).or_default().push(idx);
        self.items.push(category);
        &mut self.items[idx]
    }

    /// First category added under `name`.
    pub fn get(&self, name: &str) -> Option<&C> {
        let idx = *self.by_name.get(name)?.first()?;
        self.items.get(idx)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut C> {
        let idx = *self.by_name.get(name)?.first()?;
        self.items.get_mut(idx)
    }

    /// Every category added under `name`, oldest first.
    pub fn get_all<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a C> + 'a {
        self.by_name
            .get(name)
            .into_iter()
            .flatten()
            .map(move |&i| &self.items[i])
    }

    /// Distinct names in first-insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[C] {
        &self.items
    }
}

impl<'a, C> IntoIterator for &'a Categories<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
