//! Input data model: labeled numeric entries, color tokens, palettes.
//!
//! A [`DataSet`] is an ordered sequence of [`DataPoint`]s. Order matters:
//! it is the x-axis order for bar and line charts, and the sweep order
//! (and default color cycle index) for donut and pie charts. The computed
//! total is order-independent.

use crate::errors::ChartError;
use std::fmt;

/// One labeled numeric entry.
///
/// Callers resolve their own field names (`status`/`count`,
/// `category`/`count`, ...) before constructing these; this crate assumes
/// validated field presence and only checks the numeric domain.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// An ordered sequence of data points.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSet {
    points: Vec<DataPoint>,
}

impl DataSet {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Build a dataset from `(label, value)` pairs.
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, f64)>) -> Self {
        Self {
            points: pairs
                .into_iter()
                .map(|(label, value)| DataPoint::new(label, value))
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of all values. Zero for an empty dataset.
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Largest value, or zero for an empty dataset.
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    /// Smallest value, or zero for an empty dataset.
    pub fn min_value(&self) -> f64 {
        let min = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(f64::INFINITY, f64::min);
        if min.is_finite() { min } else { 0.0 }
    }

    /// Reject entries outside the documented input domain.
    ///
    /// Negative values are a caller contract violation (they would produce
    /// negative angles and bar heights), as are NaN and infinities.
    pub fn validate(&self) -> Result<(), ChartError> {
        for point in &self.points {
            if !point.value.is_finite() {
                return Err(ChartError::NonFiniteValue {
                    label: point.label.clone(),
                    value: point.value,
                });
            }
            if point.value < 0.0 {
                return Err(ChartError::NegativeValue {
                    label: point.label.clone(),
                    value: point.value,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<DataPoint> for DataSet {
    fn from_iter<T: IntoIterator<Item = DataPoint>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// An opaque color token: a hex string or any CSS color value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(String);

impl Color {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default color cycle, in assignment order.
const DEFAULT_COLORS: [&str; 8] = [
    "#8b5cf6", "#06b6d4", "#10b981", "#f59e0b", "#ef4444", "#ec4899", "#6366f1", "#84cc16",
];

/// An ordered sequence of color tokens, assigned cyclically by index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        debug_assert!(!colors.is_empty(), "palette must have at least one color");
        Self { colors }
    }

    /// Color for entry `index`, wrapping around the palette.
    pub fn color(&self, index: usize) -> &Color {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|&c| Color::from(c)).collect(),
        }
    }
}

/// Pick the color for entry `index`: the explicit override when one was
/// supplied for that position, otherwise the cyclic palette default.
pub(crate) fn color_for<'a>(explicit: &'a [Color], palette: &'a Palette, index: usize) -> &'a Color {
    explicit.get(index).unwrap_or_else(|| palette.color(index))
}
