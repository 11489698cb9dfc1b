//! Error types with diagnostic codes using miette.
//!
//! Only caller contract violations are errors here. An empty or all-zero
//! dataset is a recognized terminal layout state, not an error; see
//! [`crate::layout::AngularLayout::Empty`].

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised when validating chart input data.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("negative value {value} for entry {label:?}")]
    #[diagnostic(
        code(svgchart::data::negative_value),
        help("chart values must be zero or positive; filter or clamp entries before building the dataset")
    )]
    NegativeValue { label: String, value: f64 },

    #[error("non-finite value for entry {label:?}")]
    #[diagnostic(
        code(svgchart::data::non_finite_value),
        help("NaN and infinite values cannot be laid out")
    )]
    NonFiniteValue { label: String, value: f64 },
}
