//! Donut chart renderer.

use crate::data::{Color, DataSet, Palette};
use crate::errors::ChartError;
use crate::geometry::ring_path;
use crate::layout::{self, AngularLayout};
use crate::log::debug;
use crate::render::scene::{Anchor, Coord, Node, Path, Scene, Text};
use crate::render::{ChartOutput, LegendEntry, MUTED_TEXT_COLOR, Render, empty_state};
use glam::dvec2;

const SIZE: f64 = 200.0;
const CENTER: f64 = 100.0;
const OUTER_RADIUS: f64 = 80.0;
const INNER_RADIUS: f64 = 50.0;
const SEGMENT_OPACITY: f64 = 0.9;

/// Optional value/label pair drawn in the donut hole.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterLabel {
    pub value: String,
    pub label: String,
}

/// A donut chart over a dataset, with an optional title, explicit colors
/// and center label.
#[derive(Debug, Clone)]
pub struct DonutChart {
    data: DataSet,
    title: Option<String>,
    colors: Vec<Color>,
    palette: Palette,
    center_label: Option<CenterLabel>,
}

impl DonutChart {
    pub fn new(data: DataSet) -> Self {
        Self {
            data,
            title: None,
            colors: Vec::new(),
            palette: Palette::default(),
            center_label: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Explicit per-entry colors; positions without one fall back to the
    /// palette cycle.
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_center_label(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.center_label = Some(CenterLabel {
            value: value.into(),
            label: label.into(),
        });
        self
    }
}

impl Render for DonutChart {
    fn render(&self) -> Result<ChartOutput, ChartError> {
        let layout = layout::angular(&self.data, &self.colors, &self.palette)?;
        let AngularLayout::Slices { slices, .. } = layout else {
            return Ok(empty_state(self.title.as_deref(), Coord::Px(SIZE), SIZE));
        };
        debug!(slices = slices.len(), "rendering donut chart");

        let center = dvec2(CENTER, CENTER);
        let mut scene = Scene::new(Coord::Px(SIZE), SIZE);
        for slice in &slices {
            scene.push(Node::Path(Path {
                d: ring_path(
                    center,
                    INNER_RADIUS,
                    OUTER_RADIUS,
                    slice.start_angle,
                    slice.end_angle,
                ),
                fill: Some(slice.color.as_str().to_string()),
                stroke: None,
                stroke_width: None,
                opacity: Some(SEGMENT_OPACITY),
            }));
        }

        if let Some(center_label) = &self.center_label {
            let mut value = Text::new(Coord::Px(CENTER), CENTER - 2.0, center_label.value.as_str(), "#ffffff");
            value.anchor = Some(Anchor::Middle);
            value.font_size = Some(24.0);
            value.font_weight = Some("bold");
            scene.push(Node::Text(value));

            let mut label = Text::new(
                Coord::Px(CENTER),
                CENTER + 16.0,
                center_label.label.as_str(),
                MUTED_TEXT_COLOR,
            );
            label.anchor = Some(Anchor::Middle);
            label.font_size = Some(12.0);
            scene.push(Node::Text(label));
        }

        let legend = slices
            .iter()
            .map(|slice| LegendEntry {
                label: layout::display_label(&slice.label),
                value: slice.value,
                percentage: slice.percentage,
                color: slice.color.clone(),
            })
            .collect();

        Ok(ChartOutput {
            title: self.title.clone(),
            scene,
            legend,
            no_data: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSet;

    #[test]
    fn renders_one_segment_per_entry() {
        let data = DataSet::from_pairs([("open", 5.0), ("resolved", 3.0)]);
        let output = DonutChart::new(data).render().unwrap();

        assert!(!output.no_data);
        assert_eq!(output.scene.nodes.len(), 2);
        assert_eq!(output.legend.len(), 2);
    }

    #[test]
    fn legend_carries_display_labels_and_percentages() {
        let data = DataSet::from_pairs([("in_progress", 1.0), ("resolved", 3.0)]);
        let output = DonutChart::new(data).render().unwrap();

        assert_eq!(output.legend[0].label, "in progress");
        assert_eq!(output.legend[0].percentage, 25.0);
        assert_eq!(output.legend[1].percentage, 75.0);
    }

    #[test]
    fn empty_dataset_renders_empty_state() {
        let output = DonutChart::new(DataSet::default())
            .with_title("By status")
            .render()
            .unwrap();

        assert!(output.no_data);
        assert!(output.legend.is_empty());
        assert_eq!(output.title.as_deref(), Some("By status"));
        assert!(output.scene.to_svg().contains("No data available for chart"));
    }

    #[test]
    fn single_entry_renders_full_ring() {
        let data = DataSet::from_pairs([("all", 9.0)]);
        let output = DonutChart::new(data).render().unwrap();
        let svg = output.scene.to_svg();

        // Large-arc flag set on both rim arcs of the lone segment.
        assert!(svg.contains("A 80 80 0 1 0"));
        assert!(svg.contains("A 50 50 0 1 1"));
    }

    #[test]
    fn center_label_is_drawn_in_the_hole() {
        let data = DataSet::from_pairs([("a", 1.0)]);
        let output = DonutChart::new(data)
            .with_center_label("42", "total")
            .render()
            .unwrap();
        let svg = output.scene.to_svg();

        assert!(svg.contains(">42</text>"));
        assert!(svg.contains(">total</text>"));
    }
}
