//! Pie chart renderer.

use crate::data::{Color, DataSet, Palette};
use crate::errors::ChartError;
use crate::geometry::wedge_path;
use crate::layout::{self, AngularLayout};
use crate::log::debug;
use crate::render::scene::{Coord, Node, Path, Scene};
use crate::render::{ChartOutput, LegendEntry, Render, empty_state};
use glam::dvec2;

const SIZE: f64 = 200.0;
const CENTER: f64 = 100.0;
const RADIUS: f64 = 80.0;
const SLICE_OPACITY: f64 = 0.9;

/// A pie chart over a dataset, with an optional title and explicit colors.
#[derive(Debug, Clone)]
pub struct PieChart {
    data: DataSet,
    title: Option<String>,
    colors: Vec<Color>,
    palette: Palette,
}

impl PieChart {
    pub fn new(data: DataSet) -> Self {
        Self {
            data,
            title: None,
            colors: Vec::new(),
            palette: Palette::default(),
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
}

impl Render for PieChart {
    fn render(&self) -> Result<ChartOutput, ChartError> {
        let layout = layout::angular(&self.data, &self.colors, &self.palette)?;
        let AngularLayout::Slices { slices, .. } = layout else {
            return Ok(empty_state(self.title.as_deref(), Coord::Px(SIZE), SIZE));
        };
        debug!(slices = slices.len(), "rendering pie chart");

        let center = dvec2(CENTER, CENTER);
        let mut scene = Scene::new(Coord::Px(SIZE), SIZE);
        for slice in &slices {
            scene.push(Node::Path(Path {
                d: wedge_path(center, RADIUS, slice.start_angle, slice.end_angle),
                fill: Some(slice.color.as_str().to_string()),
                stroke: None,
                stroke_width: None,
                opacity: Some(SLICE_OPACITY),
            }));
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
    fn renders_one_wedge_per_entry() {
        let data = DataSet::from_pairs([("roads", 4.0), ("water", 2.0), ("power", 2.0)]);
        let output = PieChart::new(data).render().unwrap();

        assert_eq!(output.scene.nodes.len(), 3);
        assert_eq!(output.legend.len(), 3);
        assert!(!output.no_data);
    }

    #[test]
    fn wedges_start_at_the_center() {
        let data = DataSet::from_pairs([("a", 1.0), ("b", 1.0)]);
        let output = PieChart::new(data).render().unwrap();
        let svg = output.scene.to_svg();

        assert!(svg.contains(r#"d="M 100 100 L "#));
    }

    #[test]
    fn explicit_colors_reach_the_scene() {
        let data = DataSet::from_pairs([("a", 1.0), ("b", 1.0)]);
        let output = PieChart::new(data)
            .with_colors(vec![Color::from("#111"), Color::from("#222")])
            .render()
            .unwrap();
        let svg = output.scene.to_svg();

        assert!(svg.contains(r##"fill="#111""##));
        assert!(svg.contains(r##"fill="#222""##));
        assert_eq!(output.legend[0].color.as_str(), "#111");
    }

    #[test]
    fn all_zero_dataset_renders_empty_state() {
        let data = DataSet::from_pairs([("a", 0.0), ("b", 0.0)]);
        let output = PieChart::new(data).render().unwrap();

        assert!(output.no_data);
        assert!(output.scene.to_svg().contains("No data available for chart"));
    }

    #[test]
    fn single_entry_renders_full_circle() {
        let data = DataSet::from_pairs([("A", 5.0)]);
        let output = PieChart::new(data).render().unwrap();
        let svg = output.scene.to_svg();

        assert!(svg.contains("A 80 80 0 1 0"));
    }
}
