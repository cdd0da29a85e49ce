//! Arrow drawables and SVG marker generation.
//!
//! Arrows connect illustration elements: pointer references, growth
//! directions, and plain separator lines all render through [`Arrow`].
//! Marker heads are shared per color; the [`ArrowDrawer`] collects the
//! colors actually used so the scene can emit one `<defs>` block up front.

use std::{collections::HashMap, rc::Rc};

use svg::{self, node::element as svg_element};

use crate::{apply_stroke, color::Color, draw::StrokeDefinition, geometry::Point};

/// The path style of an arrow shaft.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ArrowStyle {
    /// A direct line segment between the endpoints.
    #[default]
    Straight,
    /// A quadratic arc. The value is the bend factor: the control point is
    /// offset perpendicular to the travel direction by `bend` times the
    /// endpoint distance. Positive bends bow to the left of travel in screen
    /// coordinates.
    Curved(f32),
}

/// Which ends of the arrow carry a head marker.
///
/// - `Forward`: head at the destination
/// - `Backward`: head at the source
/// - `Bidirectional`: heads at both ends
/// - `Plain`: a bare line, used for separators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Forward,
    Backward,
    Bidirectional,
    Plain,
}

/// Defines the visual properties of an arrow: stroke and path style.
#[derive(Debug, Clone)]
pub struct ArrowDefinition {
    stroke: Rc<StrokeDefinition>,
    style: ArrowStyle,
}

impl ArrowDefinition {
    /// Creates a new definition with the given stroke and a straight path.
    pub fn new(stroke: Rc<StrokeDefinition>) -> Self {
        Self {
            stroke,
            style: ArrowStyle::default(),
        }
    }

    /// Gets the stroke definition.
    pub fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }

    /// Gets the path style.
    pub fn style(&self) -> ArrowStyle {
        self.style
    }

    /// Sets the path style.
    pub fn set_style(&mut self, style: ArrowStyle) {
        self.style = style;
    }
}

impl Default for ArrowDefinition {
    fn default() -> Self {
        Self {
            stroke: Rc::new(StrokeDefinition::default()),
            style: ArrowStyle::default(),
        }
    }
}

/// A drawable arrow with styling and direction markers.
#[derive(Debug, Clone)]
pub struct Arrow {
    definition: Rc<ArrowDefinition>,
    direction: ArrowDirection,
}

/// Manages arrow rendering and SVG marker generation.
///
/// Rendering an arrow registers the marker ids it references; once the scene
/// is complete, [`ArrowDrawer::draw_marker_definitions`] produces the
/// matching `<defs>` element.
#[derive(Debug, Default)]
pub struct ArrowDrawer {
    heads: HashMap<String, Color>,
    tails: HashMap<String, Color>,
}

impl ArrowDrawer {
    /// Draws an arrow and records its marker colors.
    pub fn draw_arrow(
        &mut self,
        arrow: &Arrow,
        source: Point,
        destination: Point,
    ) -> Box<dyn svg::Node> {
        self.register_arrow_markers(arrow);
        arrow.render_to_svg(source, destination)
    }

    /// Generates SVG marker definitions for all collected colors.
    pub fn draw_marker_definitions(&self) -> Box<dyn svg::Node> {
        let mut defs = svg_element::Definitions::new();
        for color in self.heads.values() {
            defs = defs.add(Arrow::create_arrow_left(*color));
        }
        for color in self.tails.values() {
            defs = defs.add(Arrow::create_arrow_right(*color));
        }
        defs.into()
    }

    fn register_arrow_markers(&mut self, arrow: &Arrow) {
        let color = arrow.definition.stroke().color();
        let (head, tail) = Arrow::get_markers(arrow.direction, color);
        if let Some(head) = head {
            self.heads.insert(head, color);
        }
        if let Some(tail) = tail {
            self.tails.insert(tail, color);
        }
    }
}

impl Arrow {
    /// Creates a new arrow.
    pub fn new(definition: Rc<ArrowDefinition>, direction: ArrowDirection) -> Self {
        Self {
            definition,
            direction,
        }
    }

    fn render_to_svg(&self, source: Point, destination: Point) -> Box<dyn svg::Node> {
        let path_data =
            Self::create_path_data_for_style(source, destination, self.definition.style());

        let color = self.definition.stroke().color();

        let path = svg_element::Path::new()
            .set("d", path_data)
            .set("fill", "none");

        let mut path = apply_stroke!(path, self.definition.stroke());

        let (start_marker, end_marker) = Self::get_markers(self.direction, color);

        if let Some(marker) = start_marker {
            path = path.set("marker-start", marker);
        }

        if let Some(marker) = end_marker {
            path = path.set("marker-end", marker);
        }

        Box::new(path)
    }

    fn marker_left_id(color: Color) -> String {
        format!("arrow-left-{}", color.to_id_safe_string())
    }

    fn marker_right_id(color: Color) -> String {
        format!("arrow-right-{}", color.to_id_safe_string())
    }

    /// Marker references for a direction and color: `(start, end)`.
    fn get_markers(direction: ArrowDirection, color: Color) -> (Option<String>, Option<String>) {
        match direction {
            ArrowDirection::Forward => (
                None,
                Some(format!("url(#{})", Self::marker_right_id(color))),
            ),
            ArrowDirection::Backward => {
                (Some(format!("url(#{})", Self::marker_left_id(color))), None)
            }
            ArrowDirection::Bidirectional => (
                Some(format!("url(#{})", Self::marker_left_id(color))),
                Some(format!("url(#{})", Self::marker_right_id(color))),
            ),
            ArrowDirection::Plain => (None, None),
        }
    }

    fn create_path_data_for_style(start: Point, end: Point, style: ArrowStyle) -> String {
        match style {
            ArrowStyle::Straight => Self::create_path_data_from_points(start, end),
            ArrowStyle::Curved(bend) => Self::create_curved_path_data_from_points(start, end, bend),
        }
    }

    fn create_path_data_from_points(start: Point, end: Point) -> String {
        format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
    }

    /// Quadratic arc between the points.
    ///
    /// The control point sits at the midpoint, pushed perpendicular to the
    /// travel direction by `bend` times the endpoint distance.
    fn create_curved_path_data_from_points(start: Point, end: Point, bend: f32) -> String {
        let dist = end.sub_point(start);
        let mid = start.midpoint(end);
        let ctrl = Point::new(mid.x() + dist.y() * bend, mid.y() - dist.x() * bend);

        format!(
            "M {} {} Q {} {} {} {}",
            start.x(),
            start.y(),
            ctrl.x(),
            ctrl.y(),
            end.x(),
            end.y()
        )
    }

    fn create_arrow_right(color: Color) -> svg_element::Marker {
        svg_element::Marker::new()
            .set("id", Self::marker_right_id(color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            )
    }

    fn create_arrow_left(color: Color) -> svg_element::Marker {
        svg_element::Marker::new()
            .set("id", Self::marker_left_id(color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 1)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 10 0 L 0 5 L 10 10 z")
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_arrow(direction: ArrowDirection) -> Arrow {
        Arrow::new(Rc::new(ArrowDefinition::default()), direction)
    }

    #[test]
    fn test_straight_path_data() {
        let path =
            Arrow::create_path_data_from_points(Point::new(10.0, 20.0), Point::new(100.0, 50.0));
        assert_eq!(path, "M 10 20 L 100 50");
    }

    #[test]
    fn test_curved_path_bows_perpendicular() {
        // Horizontal travel, positive bend: control point moves up (negative y)
        let path = Arrow::create_curved_path_data_from_points(
            Point::new(0.0, 100.0),
            Point::new(100.0, 100.0),
            0.25,
        );
        assert_eq!(path, "M 0 100 Q 50 75 100 100");

        // Reversed travel, same bend: control point moves down
        let reverse = Arrow::create_curved_path_data_from_points(
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
            0.25,
        );
        assert_eq!(reverse, "M 100 100 Q 50 125 0 100");
    }

    #[test]
    fn test_markers_per_direction() {
        let color = Color::default();

        let (start, end) = Arrow::get_markers(ArrowDirection::Forward, color);
        assert!(start.is_none());
        assert!(end.is_some());

        let (start, end) = Arrow::get_markers(ArrowDirection::Backward, color);
        assert!(start.is_some());
        assert!(end.is_none());

        let (start, end) = Arrow::get_markers(ArrowDirection::Bidirectional, color);
        assert!(start.is_some());
        assert!(end.is_some());

        let (start, end) = Arrow::get_markers(ArrowDirection::Plain, color);
        assert!(start.is_none());
        assert!(end.is_none());
    }

    #[test]
    fn test_drawer_collects_markers_once_per_color() {
        let mut drawer = ArrowDrawer::default();
        let arrow = test_arrow(ArrowDirection::Forward);

        let _ = drawer.draw_arrow(&arrow, Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let _ = drawer.draw_arrow(&arrow, Point::new(0.0, 5.0), Point::new(10.0, 5.0));

        let defs = drawer.draw_marker_definitions().to_string();
        assert_eq!(defs.matches("<marker").count(), 1);
    }

    #[test]
    fn test_plain_arrow_registers_no_markers() {
        let mut drawer = ArrowDrawer::default();
        let arrow = test_arrow(ArrowDirection::Plain);

        let node = drawer.draw_arrow(&arrow, Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!(!node.to_string().contains("marker-end"));

        let defs = drawer.draw_marker_definitions().to_string();
        assert!(!defs.contains("<marker"));
    }
}
