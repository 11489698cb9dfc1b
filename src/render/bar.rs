//! Bar chart renderer.

use crate::data::{Color, DataSet};
use crate::errors::ChartError;
use crate::geometry::fmt_num;
use crate::layout::{self, BarLayout};
use crate::log::debug;
use crate::render::scene::{Anchor, Coord, Group, Node, Rect, Scene, Text};
use crate::render::{ChartOutput, MUTED_TEXT_COLOR, Render, TEXT_COLOR, empty_state};

const CHART_HEIGHT: f64 = 200.0;
const BAR_OPACITY: f64 = 0.8;
const BAR_CORNER_RADIUS: f64 = 4.0;
/// Gap between a bar's top edge and its value label.
const VALUE_LABEL_GAP: f64 = 5.0;

/// A vertical bar chart over a dataset. The chart flexes horizontally
/// (percent-based bar placement) at a fixed pixel height.
#[derive(Debug, Clone)]
pub struct BarChart {
    data: DataSet,
    title: Option<String>,
    color: Color,
    height: f64,
}

impl BarChart {
    pub fn new(data: DataSet) -> Self {
        Self {
            data,
            title: None,
            color: Color::from("#8b5cf6"),
            height: CHART_HEIGHT,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fill color shared by all bars.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }
}

impl Render for BarChart {
    fn render(&self) -> Result<ChartOutput, ChartError> {
        let layout = layout::bars(&self.data, self.height)?;
        let BarLayout::Bars { bars, .. } = layout else {
            return Ok(empty_state(
                self.title.as_deref(),
                Coord::Percent(100.0),
                self.height,
            ));
        };
        debug!(bars = bars.len(), "rendering bar chart");

        let mut scene = Scene::new(Coord::Percent(100.0), self.height);
        for bar in &bars {
            let label_x = Coord::Percent(bar.x_pct + bar.width_pct / 2.0);

            let mut value_label = Text::new(label_x, bar.y - VALUE_LABEL_GAP, fmt_num(bar.value), TEXT_COLOR);
            value_label.anchor = Some(Anchor::Middle);
            value_label.font_size = Some(12.0);

            let mut axis_label = Text::new(
                label_x,
                self.height - VALUE_LABEL_GAP,
                bar.axis_label.as_str(),
                MUTED_TEXT_COLOR,
            );
            axis_label.anchor = Some(Anchor::Middle);
            axis_label.font_size = Some(12.0);

            scene.push(Node::Group(Group {
                opacity: None,
                children: vec![
                    Node::Rect(Rect {
                        x: Coord::Percent(bar.x_pct),
                        y: bar.y,
                        width: Coord::Percent(bar.width_pct),
                        height: bar.height,
                        rx: Some(BAR_CORNER_RADIUS),
                        fill: self.color.as_str().to_string(),
                        opacity: Some(BAR_OPACITY),
                    }),
                    Node::Text(value_label),
                    Node::Text(axis_label),
                ],
            }));
        }

        Ok(ChartOutput {
            title: self.title.clone(),
            scene,
            legend: Vec::new(),
            no_data: false,
        })
    }
}
