//! Chart renderers.
//!
//! Thin per-chart-type renderers that compose the layout engine and the
//! arc/shape builders into a [`Scene`], plus the legend data external
//! legend lists are built from. All four chart types share one layout
//! engine and one polar/arc module; the renderers themselves only place
//! nodes.

mod bar;
mod donut;
mod line;
mod pie;
pub mod scene;

pub use bar::BarChart;
pub use donut::{CenterLabel, DonutChart};
pub use line::LineChart;
pub use pie::PieChart;

use crate::data::Color;
use crate::errors::ChartError;
use enum_dispatch::enum_dispatch;
use scene::{Anchor, Coord, Node, Scene, Text};

/// Muted foreground used for primary chart text.
pub(crate) const TEXT_COLOR: &str = "#cbd5e1";
/// Dimmer foreground for axis labels and secondary text.
pub(crate) const MUTED_TEXT_COLOR: &str = "#94a3b8";
/// Grid lines and empty-state text.
pub(crate) const FAINT_COLOR: &str = "#64748b";

/// One legend row for a legend-bearing chart, in slice order.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Display form of the label (first underscore spaced out).
    pub label: String,
    pub value: f64,
    /// Rounded to one decimal place.
    pub percentage: f64,
    pub color: Color,
}

/// A rendered chart: the scene to draw plus derived presentation data.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOutput {
    /// Title supplied by the caller, passed through for external rendering.
    pub title: Option<String>,
    pub scene: Scene,
    /// Ordered legend rows; empty for charts without a legend.
    pub legend: Vec<LegendEntry>,
    /// True when the dataset had nothing to draw and the scene holds the
    /// explicit empty-state visual instead of chart geometry.
    pub no_data: bool,
}

/// Render a chart into a scene and legend.
#[enum_dispatch]
pub trait Render {
    fn render(&self) -> Result<ChartOutput, ChartError>;
}

/// Any supported chart, dispatching to its renderer.
#[enum_dispatch(Render)]
#[derive(Debug, Clone)]
pub enum Chart {
    Donut(DonutChart),
    Pie(PieChart),
    Bar(BarChart),
    Line(LineChart),
}

/// The explicit empty-state scene: no arc math on a zero total, just a
/// centered notice in a region of the requested size.
pub(crate) fn empty_state(title: Option<&str>, width: Coord, height: f64) -> ChartOutput {
    let mut scene = Scene::new(width, height);
    let center_x = match width {
        Coord::Px(w) => Coord::Px(w / 2.0),
        Coord::Percent(_) => Coord::Percent(50.0),
    };
    let mut text = Text::new(
        center_x,
        height / 2.0,
        "No data available for chart",
        FAINT_COLOR,
    );
    text.anchor = Some(Anchor::Middle);
    scene.push(Node::Text(text));

    ChartOutput {
        title: title.map(str::to_string),
        scene,
        legend: Vec::new(),
        no_data: true,
    }
}
