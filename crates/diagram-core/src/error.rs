// File: crates/diagram-core/src/error.rs
// Summary: Validation and output errors returned by every render call.

use thiserror::Error;

/// Everything that can stop a chart from rendering.
///
/// Validation variants are always returned before the canvas receives its
/// first call, so a failed render never leaves a truncated document behind.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("step must be greater than zero, got {0}")]
    InvalidStep(f64),

    #[error("nothing to build, categories are empty")]
    EmptyCategories,

    #[error("value range [{min}, {max}] is degenerate for step {step}")]
    DegenerateRange { min: f64, max: f64, step: f64 },

    #[error("sum of category values is zero")]
    ZeroTotal,

    #[error("category '{category}' has {values} values but there are {labels} labels")]
    LabelMismatch {
        category: String,
        values: usize,
        labels: usize,
    },

    #[error("at least {required} labels are required, got {found}")]
    TooFewLabels { required: usize, found: usize },

    #[error("layout overflow: {0}")]
    LayoutOverflow(String),

    #[error("value {value} of category '{category}' lies outside the axis range [{min}, {max}]")]
    ValueOutOfRange {
        category: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("category '{category}' has negative value {value}; set allow_negative to draw signed wedges")]
    NegativeValue { category: String, value: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// True for every variant raised before output starts.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ChartError::Io(_))
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
