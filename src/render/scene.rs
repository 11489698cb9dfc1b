//! SVG-equivalent scene graph.
//!
//! Renderers build a [`Scene`] of typed nodes instead of concatenating
//! markup; `Scene::to_svg` is the only place that serializes. The node set
//! covers exactly what the chart renderers emit.

use crate::geometry::fmt_num;
use std::fmt::Write;

/// A horizontal coordinate or extent: fixed pixels, or percent of the
/// container width (bar charts flex horizontally with their container).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coord {
    Px(f64),
    Percent(f64),
}

impl Coord {
    fn write_attr(self, out: &mut String) {
        match self {
            Coord::Px(v) => out.push_str(&fmt_num(v)),
            Coord::Percent(v) => {
                out.push_str(&fmt_num(v));
                out.push('%');
            }
        }
    }
}

/// Text anchoring along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Any scene node the chart renderers emit.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Group(Group),
    Rect(Rect),
    Circle(Circle),
    Line(Line),
    Path(Path),
    Text(Text),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub opacity: Option<f64>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: Coord,
    pub y: f64,
    pub width: Coord,
    pub height: f64,
    /// Corner radius.
    pub rx: Option<f64>,
    pub fill: String,
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
    pub opacity: Option<f64>,
    /// Tooltip text, serialized as a `<title>` child.
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub d: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: Coord,
    pub y: f64,
    pub content: String,
    pub fill: String,
    pub anchor: Option<Anchor>,
    pub font_size: Option<f64>,
    pub font_weight: Option<&'static str>,
}

impl Text {
    pub fn new(x: Coord, y: f64, content: impl Into<String>, fill: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            fill: fill.into(),
            anchor: None,
            font_size: None,
            font_weight: None,
        }
    }
}

/// A renderable scene: a sized drawing region plus its nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: Coord,
    pub height: f64,
    pub view_box: Option<String>,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(width: Coord, height: f64) -> Self {
        Self {
            width,
            height,
            view_box: None,
            nodes: Vec::new(),
        }
    }

    pub fn with_view_box(mut self, view_box: impl Into<String>) -> Self {
        self.view_box = Some(view_box.into());
        self
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Serialize the scene to an SVG document string.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" width=""#);
        self.width.write_attr(&mut out);
        let _ = write!(out, r#"" height="{}""#, fmt_num(self.height));
        if let Some(view_box) = &self.view_box {
            let _ = write!(out, r#" viewBox="{view_box}""#);
        }
        out.push('>');
        for node in &self.nodes {
            write_node(node, &mut out);
        }
        out.push_str("</svg>");
        out
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Group(group) => {
            out.push_str("<g");
            if let Some(opacity) = group.opacity {
                let _ = write!(out, r#" opacity="{}""#, fmt_num(opacity));
            }
            out.push('>');
            for child in &group.children {
                write_node(child, out);
            }
            out.push_str("</g>");
        }
        Node::Rect(rect) => {
            out.push_str(r#"<rect x=""#);
            rect.x.write_attr(out);
            let _ = write!(out, r#"" y="{}" width=""#, fmt_num(rect.y));
            rect.width.write_attr(out);
            let _ = write!(out, r#"" height="{}""#, fmt_num(rect.height));
            if let Some(rx) = rect.rx {
                let _ = write!(out, r#" rx="{}""#, fmt_num(rx));
            }
            let _ = write!(out, r#" fill="{}""#, escape(&rect.fill));
            if let Some(opacity) = rect.opacity {
                let _ = write!(out, r#" opacity="{}""#, fmt_num(opacity));
            }
            out.push_str("/>");
        }
        Node::Circle(circle) => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                fmt_num(circle.cx),
                fmt_num(circle.cy),
                fmt_num(circle.r),
                escape(&circle.fill),
            );
            if let Some(opacity) = circle.opacity {
                let _ = write!(out, r#" opacity="{}""#, fmt_num(opacity));
            }
            match &circle.title {
                Some(title) => {
                    let _ = write!(out, "><title>{}</title></circle>", escape(title));
                }
                None => out.push_str("/>"),
            }
        }
        Node::Line(line) => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                fmt_num(line.x1),
                fmt_num(line.y1),
                fmt_num(line.x2),
                fmt_num(line.y2),
                escape(&line.stroke),
                fmt_num(line.stroke_width),
            );
        }
        Node::Path(path) => {
            let _ = write!(out, r#"<path d="{}""#, path.d);
            let _ = write!(
                out,
                r#" fill="{}""#,
                path.fill.as_deref().map(escape).unwrap_or_else(|| "none".to_string())
            );
            if let Some(stroke) = &path.stroke {
                let _ = write!(out, r#" stroke="{}""#, escape(stroke));
            }
            if let Some(stroke_width) = path.stroke_width {
                let _ = write!(out, r#" stroke-width="{}""#, fmt_num(stroke_width));
            }
            if let Some(opacity) = path.opacity {
                let _ = write!(out, r#" opacity="{}""#, fmt_num(opacity));
            }
            out.push_str("/>");
        }
        Node::Text(text) => {
            out.push_str(r#"<text x=""#);
            text.x.write_attr(out);
            let _ = write!(out, r#"" y="{}""#, fmt_num(text.y));
            if let Some(anchor) = text.anchor {
                let _ = write!(out, r#" text-anchor="{}""#, anchor.as_str());
            }
            if let Some(font_size) = text.font_size {
                let _ = write!(out, r#" font-size="{}""#, fmt_num(font_size));
            }
            if let Some(font_weight) = text.font_weight {
                let _ = write!(out, r#" font-weight="{font_weight}""#);
            }
            let _ = write!(out, r#" fill="{}">{}</text>"#, escape(&text.fill), escape(&text.content));
        }
    }
}

/// Escape text and attribute content for SVG output. Unlike HTML-entity
/// pass-through schemes, everything is escaped unconditionally; chart
/// labels are plain data, never markup.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scene_serializes() {
        let scene = Scene::new(Coord::Px(200.0), 200.0);
        assert_eq!(
            scene.to_svg(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200"></svg>"#
        );
    }

    #[test]
    fn percent_coords_serialize_with_suffix() {
        let mut scene = Scene::new(Coord::Percent(100.0), 200.0);
        scene.push(Node::Rect(Rect {
            x: Coord::Percent(26.0),
            y: 20.0,
            width: Coord::Percent(23.0),
            height: 160.0,
            rx: Some(4.0),
            fill: "#8b5cf6".to_string(),
            opacity: Some(0.8),
        }));
        assert_eq!(
            scene.to_svg(),
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="200">"#,
                r##"<rect x="26%" y="20" width="23%" height="160" rx="4" fill="#8b5cf6" opacity="0.8"/>"##,
                r#"</svg>"#,
            )
        );
    }

    #[test]
    fn circle_title_becomes_tooltip_child() {
        let mut scene = Scene::new(Coord::Px(10.0), 10.0);
        scene.push(Node::Circle(Circle {
            cx: 5.0,
            cy: 5.0,
            r: 8.0,
            fill: "transparent".to_string(),
            opacity: None,
            title: Some("roads & bridges: 4".to_string()),
        }));
        let svg = scene.to_svg();
        assert!(svg.contains("<title>roads &amp; bridges: 4</title></circle>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut scene = Scene::new(Coord::Px(10.0), 10.0);
        scene.push(Node::Text(Text::new(
            Coord::Px(0.0),
            0.0,
            "<script>",
            "#fff",
        )));
        assert!(scene.to_svg().contains(">&lt;script&gt;</text>"));
    }

    #[test]
    fn view_box_is_emitted() {
        let scene = Scene::new(Coord::Percent(100.0), 200.0).with_view_box("0 0 100 180");
        assert!(scene.to_svg().contains(r#" viewBox="0 0 100 180""#));
    }
}
