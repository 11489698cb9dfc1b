//! Line chart renderer.

use crate::data::{Color, DataSet};
use crate::errors::ChartError;
use crate::geometry::fmt_num;
use crate::layout::{self, LINE_PLOT_HEIGHT, LINE_VIEW_HEIGHT, LINE_VIEW_WIDTH, LineLayout};
use crate::log::debug;
use crate::render::scene::{Anchor, Circle, Coord, Group, Line, Node, Path, Scene, Text};
use crate::render::{ChartOutput, FAINT_COLOR, MUTED_TEXT_COLOR, Render, empty_state};
use std::fmt::Write;

const PIXEL_HEIGHT: f64 = 200.0;
const LINE_WIDTH: f64 = 2.0;
const AREA_OPACITY: f64 = 0.1;
const GRID_OPACITY: f64 = 0.2;
const GRID_LINE_WIDTH: f64 = 0.5;
const MARKER_RADIUS: f64 = 3.0;
/// Larger invisible circle around each marker; carries the tooltip.
const HOVER_RADIUS: f64 = 8.0;
/// In-viewBox font sizes (the viewBox is only 100 units wide).
const AXIS_FONT_SIZE: f64 = 5.0;
const X_LABEL_FONT_SIZE: f64 = 4.0;
const X_LABEL_Y: f64 = 174.0;

/// A line chart over a dataset, drawn in a fixed `0 0 100 180` viewBox
/// that scales with the container.
#[derive(Debug, Clone)]
pub struct LineChart {
    data: DataSet,
    title: Option<String>,
    color: Color,
    show_grid: bool,
}

impl LineChart {
    pub fn new(data: DataSet) -> Self {
        Self {
            data,
            title: None,
            color: Color::from("#8b5cf6"),
            show_grid: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }
}

impl Render for LineChart {
    fn render(&self) -> Result<ChartOutput, ChartError> {
        let layout = layout::line(&self.data)?;
        let LineLayout::Points {
            points,
            min_value,
            max_value,
        } = layout
        else {
            return Ok(empty_state(
                self.title.as_deref(),
                Coord::Percent(100.0),
                PIXEL_HEIGHT,
            ));
        };
        debug!(points = points.len(), "rendering line chart");

        let mut scene = Scene::new(Coord::Percent(100.0), PIXEL_HEIGHT).with_view_box(format!(
            "0 0 {} {}",
            fmt_num(LINE_VIEW_WIDTH),
            fmt_num(LINE_VIEW_HEIGHT)
        ));

        if self.show_grid {
            let children = (0..5)
                .map(|step| {
                    let y = 20.0 + step as f64 * 35.0;
                    Node::Line(Line {
                        x1: 20.0,
                        y1: y,
                        x2: 80.0,
                        y2: y,
                        stroke: FAINT_COLOR.to_string(),
                        stroke_width: GRID_LINE_WIDTH,
                    })
                })
                .collect();
            scene.push(Node::Group(Group {
                opacity: Some(GRID_OPACITY),
                children,
            }));
        }

        let mut path_data = String::new();
        for (index, point) in points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            if index > 0 {
                path_data.push(' ');
            }
            let _ = write!(path_data, "{command} {} {}", fmt_num(point.x), fmt_num(point.y));
        }

        // Area under the curve, closed down to the plot floor.
        let first = points.first().expect("line layout is never empty here");
        let last = points.last().expect("line layout is never empty here");
        let area_data = format!(
            "{path_data} L {} {} L {} {} Z",
            fmt_num(last.x),
            fmt_num(LINE_PLOT_HEIGHT),
            fmt_num(first.x),
            fmt_num(LINE_PLOT_HEIGHT),
        );
        scene.push(Node::Path(Path {
            d: area_data,
            fill: Some(self.color.as_str().to_string()),
            stroke: None,
            stroke_width: None,
            opacity: Some(AREA_OPACITY),
        }));
        scene.push(Node::Path(Path {
            d: path_data,
            fill: None,
            stroke: Some(self.color.as_str().to_string()),
            stroke_width: Some(LINE_WIDTH),
            opacity: None,
        }));

        for point in &points {
            scene.push(Node::Circle(Circle {
                cx: point.x,
                cy: point.y,
                r: MARKER_RADIUS,
                fill: self.color.as_str().to_string(),
                opacity: None,
                title: None,
            }));
            scene.push(Node::Circle(Circle {
                cx: point.x,
                cy: point.y,
                r: HOVER_RADIUS,
                fill: "transparent".to_string(),
                opacity: None,
                title: Some(format!("{}: {}", point.label, fmt_num(point.value))),
            }));
        }

        // Y-axis reference labels: max, midpoint, min.
        let mid = ((max_value + min_value) / 2.0).round();
        for (value, y) in [
            (fmt_num(max_value), 25.0),
            (fmt_num(mid), 95.0),
            (fmt_num(min_value), 165.0),
        ] {
            let mut label = Text::new(Coord::Px(15.0), y, value, MUTED_TEXT_COLOR);
            label.anchor = Some(Anchor::End);
            label.font_size = Some(AXIS_FONT_SIZE);
            scene.push(Node::Text(label));
        }

        // Truncated x-axis labels under each point.
        for point in &points {
            let mut label = Text::new(
                Coord::Px(point.x),
                X_LABEL_Y,
                point.axis_label.as_str(),
                MUTED_TEXT_COLOR,
            );
            label.anchor = Some(Anchor::Middle);
            label.font_size = Some(X_LABEL_FONT_SIZE);
            scene.push(Node::Text(label));
        }

        Ok(ChartOutput {
            title: self.title.clone(),
            scene,
            legend: Vec::new(),
            no_data: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSet;

    #[test]
    fn path_walks_points_in_order() {
        let data = DataSet::from_pairs([("jan", 0.0), ("feb", 5.0), ("mar", 10.0)]);
        let output = LineChart::new(data).render().unwrap();
        let svg = output.scene.to_svg();

        assert!(svg.contains(r#"d="M 20 140 L 50 80 L 80 20""#));
    }

    #[test]
    fn area_closes_to_the_plot_floor() {
        let data = DataSet::from_pairs([("a", 1.0), ("b", 2.0)]);
        let output = LineChart::new(data).render().unwrap();
        let svg = output.scene.to_svg();

        assert!(svg.contains("L 80 160 L 20 160 Z"));
    }

    #[test]
    fn grid_can_be_disabled() {
        let data = DataSet::from_pairs([("a", 1.0), ("b", 2.0)]);
        let with_grid = LineChart::new(data.clone()).render().unwrap();
        let without_grid = LineChart::new(data).with_grid(false).render().unwrap();

        assert!(with_grid.scene.to_svg().contains("<g opacity=\"0.2\">"));
        assert!(!without_grid.scene.to_svg().contains("<g"));
    }

    #[test]
    fn flat_series_renders_without_nan() {
        let data = DataSet::from_pairs([("a", 7.0), ("b", 7.0), ("c", 7.0)]);
        let output = LineChart::new(data).render().unwrap();
        let svg = output.scene.to_svg();

        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
        assert!(svg.contains(r#"d="M 20 80 L 50 80 L 80 80""#));
    }

    #[test]
    fn markers_carry_tooltips() {
        let data = DataSet::from_pairs([("january", 4.0), ("b", 2.0)]);
        let output = LineChart::new(data).render().unwrap();
        let svg = output.scene.to_svg();

        // Full label in the tooltip, truncated label on the axis.
        assert!(svg.contains("<title>january: 4</title>"));
        assert!(svg.contains(">januar...</text>"));
    }

    #[test]
    fn axis_shows_max_mid_min() {
        let data = DataSet::from_pairs([("a", 0.0), ("b", 10.0)]);
        let output = LineChart::new(data).render().unwrap();
        let svg = output.scene.to_svg();

        assert!(svg.contains(r##" y="25" text-anchor="end" font-size="5" fill="#94a3b8">10</text>"##));
        assert!(svg.contains(r##" y="95" text-anchor="end" font-size="5" fill="#94a3b8">5</text>"##));
        assert!(svg.contains(r##" y="165" text-anchor="end" font-size="5" fill="#94a3b8">0</text>"##));
    }

    #[test]
    fn empty_dataset_renders_empty_state() {
        let output = LineChart::new(DataSet::default()).render().unwrap();
        assert!(output.no_data);
    }
}
