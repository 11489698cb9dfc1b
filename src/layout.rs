//! Proportional layout engine.
//!
//! Pure functions from a [`DataSet`] to derived geometry: angular slices
//! for donut/pie charts, bar rectangles, and line points. Every structure
//! here is recomputed from scratch per render; nothing is cached and
//! nothing persists between calls. At dashboard dataset sizes (tens of
//! rows) recomputation is the design, not a compromise.

use crate::data::{Color, DataSet, Palette, color_for};
use crate::errors::ChartError;
use crate::log::debug;
use crate::types::{Angle, round_to_tenth};

/// One angular segment of a donut or pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Percentage of the total, rounded to one decimal place. Display
    /// only; the angles below always come from the unrounded fraction.
    pub percentage: f64,
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub color: Color,
}

/// Result of angular layout.
///
/// `Empty` is a terminal state, not an error: an empty or all-zero dataset
/// has no meaningful arc geometry, and callers must render an explicit
/// empty-state visual instead of a degenerate chart.
#[derive(Debug, Clone, PartialEq)]
pub enum AngularLayout {
    Empty,
    Slices { slices: Vec<Slice>, total: f64 },
}

/// Compute angle ranges, percentages and colors for an angular chart.
///
/// Slices partition `[0°, 360°)` in dataset order with no gaps or
/// overlaps; each slice's start angle equals the previous slice's end
/// angle. Colors come from `explicit_colors` positionally, falling back
/// to the cyclic palette.
pub fn angular(
    data: &DataSet,
    explicit_colors: &[Color],
    palette: &Palette,
) -> Result<AngularLayout, ChartError> {
    data.validate()?;

    let total = data.total();
    if total == 0.0 {
        debug!("angular layout: zero total, no slices");
        return Ok(AngularLayout::Empty);
    }

    let mut current = Angle::ZERO;
    let slices = data
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let fraction = point.value / total;
            let start_angle = current;
            let end_angle = start_angle + Angle(fraction * 360.0);
            current = end_angle;

            Slice {
                label: point.label.clone(),
                value: point.value,
                percentage: round_to_tenth(fraction * 100.0),
                start_angle,
                end_angle,
                color: color_for(explicit_colors, palette, index).clone(),
            }
        })
        .collect::<Vec<_>>();

    debug!(slices = slices.len(), total, "angular layout computed");
    Ok(AngularLayout::Slices { slices, total })
}

/// Vertical space reserved above (value labels) and below (axis labels)
/// the usable bar plot.
const BAR_VERTICAL_MARGIN: f64 = 40.0;
/// Offset of the bar baseline from the bottom edge.
const BAR_BASELINE_OFFSET: f64 = 20.0;
/// Horizontal gutter inside each bar slot, in percent of the plot width.
const BAR_GUTTER_PCT: f64 = 2.0;
/// Axis labels longer than this many characters get an ellipsis.
const BAR_LABEL_MAX_CHARS: usize = 8;
/// Line chart x-axis labels are tighter packed, so truncate earlier.
const LINE_LABEL_MAX_CHARS: usize = 6;

/// One bar of a bar chart. Horizontal placement is in percent of the plot
/// width (bars flex with the container); vertical placement is in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    /// Truncated form for axis display. The full label stays in `label`
    /// for tooltips and legends.
    pub axis_label: String,
    pub value: f64,
    pub x_pct: f64,
    pub width_pct: f64,
    pub y: f64,
    pub height: f64,
}

/// Result of bar layout. `Empty` when no entry is positive.
#[derive(Debug, Clone, PartialEq)]
pub enum BarLayout {
    Empty,
    Bars { bars: Vec<Bar>, max_value: f64 },
}

/// Lay out bars in dataset order, heights scaled to the maximum value.
///
/// `chart_height` is the full pixel height of the drawing region; bars
/// occupy `chart_height - 40` of it, sitting on a baseline 20px above the
/// bottom edge. Each bar is left-aligned inside a `100/n` percent slot
/// with a fixed gutter.
pub fn bars(data: &DataSet, chart_height: f64) -> Result<BarLayout, ChartError> {
    data.validate()?;

    let max_value = data.max_value();
    if data.is_empty() || max_value <= 0.0 {
        debug!("bar layout: no positive values, empty state");
        return Ok(BarLayout::Empty);
    }

    let slot_pct = 100.0 / data.len() as f64;
    let usable_height = chart_height - BAR_VERTICAL_MARGIN;

    let bars = data
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let height = point.value / max_value * usable_height;
            Bar {
                label: point.label.clone(),
                axis_label: truncate_label(&point.label, BAR_LABEL_MAX_CHARS),
                value: point.value,
                x_pct: index as f64 * slot_pct + BAR_GUTTER_PCT / 2.0,
                width_pct: slot_pct - BAR_GUTTER_PCT,
                y: chart_height - height - BAR_BASELINE_OFFSET,
                height,
            }
        })
        .collect();

    Ok(BarLayout::Bars { bars, max_value })
}

/// Line chart plot frame, in viewBox units (`0 0 100 180`).
pub const LINE_VIEW_WIDTH: f64 = 100.0;
pub const LINE_VIEW_HEIGHT: f64 = 180.0;
/// Height of the drawable band; the remaining 20 units hold x labels.
pub const LINE_PLOT_HEIGHT: f64 = 160.0;
pub const LINE_PADDING: f64 = 20.0;

/// One point of a line chart, in viewBox units.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: String,
    /// Truncated form for axis display.
    pub axis_label: String,
}

/// Result of line layout. `Empty` only when the dataset has no entries.
#[derive(Debug, Clone, PartialEq)]
pub enum LineLayout {
    Empty,
    Points {
        points: Vec<LinePoint>,
        min_value: f64,
        max_value: f64,
    },
}

/// Lay out line points: x evenly spaced by index, y linearly interpolated
/// between the dataset's minimum and maximum value.
///
/// A flat series (`min == max`) maps every point to the vertical mid-line
/// instead of dividing by zero, and a single-point series centers its x.
pub fn line(data: &DataSet) -> Result<LineLayout, ChartError> {
    data.validate()?;

    if data.is_empty() {
        debug!("line layout: empty dataset");
        return Ok(LineLayout::Empty);
    }

    let min_value = data.min_value();
    let max_value = data.max_value();
    let span = max_value - min_value;

    let plot_width = LINE_VIEW_WIDTH - LINE_PADDING * 2.0;
    let plot_band = LINE_PLOT_HEIGHT - LINE_PADDING * 2.0;
    let plot_bottom = LINE_PLOT_HEIGHT - LINE_PADDING;
    let count = data.len();

    let points = data
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = if count == 1 {
                LINE_PADDING + plot_width / 2.0
            } else {
                index as f64 / (count - 1) as f64 * plot_width + LINE_PADDING
            };
            let y = if span == 0.0 {
                plot_bottom - plot_band / 2.0
            } else {
                plot_bottom - (point.value - min_value) / span * plot_band
            };
            LinePoint {
                x,
                y,
                value: point.value,
                label: point.label.clone(),
                axis_label: truncate_label(&point.label, LINE_LABEL_MAX_CHARS),
            }
        })
        .collect();

    Ok(LineLayout::Points {
        points,
        min_value,
        max_value,
    })
}

/// Truncate a label for axis display, appending an ellipsis.
pub(crate) fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let head: String = label.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}

/// Legend display form of a label: the first underscore becomes a space
/// (enum-style labels like `in_progress` read as `in progress`).
pub(crate) fn display_label(label: &str) -> String {
    label.replacen('_', " ", 1)
}
