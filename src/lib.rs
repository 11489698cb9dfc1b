//! Chart geometry and SVG rendering for dashboard widgets.
//!
//! `svgchart` turns a labeled, ordered dataset into the geometry of a
//! donut, pie, bar or line chart and serializes it as SVG. Everything is
//! a pure, synchronous function of its inputs: no I/O, no caching, no
//! shared state. Derived geometry is recomputed from scratch on every
//! render, which is the right trade at dashboard dataset sizes.
//!
//! # Example
//!
//! ```
//! use svgchart::{DataSet, DonutChart, Render};
//!
//! let data = DataSet::from_pairs([
//!     ("open", 12.0),
//!     ("in_progress", 7.0),
//!     ("resolved", 31.0),
//! ]);
//! let output = DonutChart::new(data)
//!     .with_title("Grievances by status")
//!     .with_center_label("50", "total")
//!     .render()
//!     .unwrap();
//!
//! let svg = output.scene.to_svg();
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(output.legend.len(), 3);
//! ```
//!
//! Angular conventions: 0° is at 12 o'clock and sweeps run clockwise, so
//! a donut's first slice starts at the top and reads like a clock face.
//!
//! An empty or all-zero dataset is not an error; renderers produce an
//! explicit empty-state scene and flag it with
//! [`ChartOutput::no_data`](render::ChartOutput). Negative and non-finite
//! values are rejected up front with [`ChartError`].

pub mod data;
pub mod errors;
pub mod geometry;
pub mod layout;
mod log;
pub mod present;
pub mod render;
pub mod types;

pub use data::{Color, DataPoint, DataSet, Palette};
pub use errors::ChartError;
pub use layout::{AngularLayout, Bar, BarLayout, LineLayout, LinePoint, Slice};
pub use present::{AccentColor, ChangeDirection, MetricCard, ProgressBar};
pub use render::{
    BarChart, CenterLabel, Chart, ChartOutput, DonutChart, LegendEntry, LineChart, PieChart,
    Render,
};
pub use types::Angle;
