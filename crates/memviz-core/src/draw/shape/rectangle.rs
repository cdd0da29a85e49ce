//! Rectangle shape definition, optionally rounded and filled.

use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::ShapeDefinition;
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// A rectangle with optional fill color and corner rounding.
///
/// The fill's alpha is emitted as `fill-opacity`, which is how translucent
/// region backdrops are drawn. A `None` fill renders as `fill="none"`.
#[derive(Debug, Clone)]
pub struct RectangleDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
    corner_radius: f32,
}

impl RectangleDefinition {
    /// Creates a new rectangle definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fill color; `None` leaves the interior unfilled.
    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    /// Sets the border stroke.
    pub fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>) {
        self.stroke = stroke;
    }

    /// Sets the corner radius in pixels; zero draws sharp corners.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
    }

    fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Default for RectangleDefinition {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke: Rc::new(StrokeDefinition::default()),
            corner_radius: 0.0,
        }
    }
}

impl ShapeDefinition for RectangleDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        // position is the center of the rectangle
        let bounds = position.to_bounds(size);

        let mut rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height());

        if self.corner_radius > 0.0 {
            rect = rect.set("rx", self.corner_radius);
        }

        rect = match self.fill_color() {
            Some(fill) => rect
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => rect.set("fill", "none"),
        };

        let rect = apply_stroke!(rect, self.stroke());

        Box::new(rect)
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(def: &RectangleDefinition) -> String {
        let node = def.render_to_svg(Size::new(100.0, 50.0), Point::new(60.0, 40.0));
        node.to_string()
    }

    #[test]
    fn test_rectangle_centered_geometry() {
        let rendered = render_to_string(&RectangleDefinition::new());
        assert!(rendered.contains(r#"x="10""#));
        assert!(rendered.contains(r#"y="15""#));
        assert!(rendered.contains(r#"width="100""#));
        assert!(rendered.contains(r#"height="50""#));
    }

    #[test]
    fn test_rectangle_no_fill_by_default() {
        let rendered = render_to_string(&RectangleDefinition::new());
        assert!(rendered.contains(r#"fill="none""#));
    }

    #[test]
    fn test_rectangle_fill_and_opacity() {
        let mut def = RectangleDefinition::new();
        def.set_fill_color(Some(Color::new("#FFCDD2").unwrap().with_alpha(0.5)));
        let rendered = render_to_string(&def);
        assert!(rendered.contains("fill-opacity"));
        assert!(!rendered.contains(r#"fill="none""#));
    }

    #[test]
    fn test_rectangle_rounded_corners() {
        let mut def = RectangleDefinition::new();
        def.set_corner_radius(8.0);
        let rendered = render_to_string(&def);
        assert!(rendered.contains(r#"rx="8""#));

        // Sharp corners omit the attribute entirely
        let sharp = render_to_string(&RectangleDefinition::new());
        assert!(!sharp.contains("rx="));
    }

    #[test]
    fn test_rectangle_dashed_stroke() {
        let mut def = RectangleDefinition::new();
        def.set_stroke(Rc::new(StrokeDefinition::dashed(
            Color::new("#1565C0").unwrap(),
            2.0,
        )));
        let rendered = render_to_string(&def);
        assert!(rendered.contains("stroke-dasharray"));
    }
}
