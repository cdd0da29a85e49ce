//! Ellipse shape definition.

use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::ShapeDefinition;
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// An ellipse with optional fill color.
///
/// Used for the overlapping value-category sets; translucency comes from the
/// fill color's alpha.
#[derive(Debug, Clone)]
pub struct EllipseDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
}

impl EllipseDefinition {
    /// Creates a new ellipse definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fill color; `None` leaves the interior unfilled.
    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    /// Sets the outline stroke.
    pub fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>) {
        self.stroke = stroke;
    }

    fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Default for EllipseDefinition {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke: Rc::new(StrokeDefinition::default()),
        }
    }
}

impl ShapeDefinition for EllipseDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let rx = size.width() / 2.0;
        let ry = size.height() / 2.0;

        let mut ellipse = svg_element::Ellipse::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("rx", rx)
            .set("ry", ry);

        ellipse = match self.fill_color() {
            Some(fill) => ellipse
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => ellipse.set("fill", "none"),
        };

        let ellipse = apply_stroke!(ellipse, self.stroke());

        Box::new(ellipse)
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipse_center_and_radii() {
        let def = EllipseDefinition::new();
        let rendered = def
            .render_to_svg(Size::new(400.0, 290.0), Point::new(280.0, 267.0))
            .to_string();

        assert!(rendered.contains(r#"cx="280""#));
        assert!(rendered.contains(r#"cy="267""#));
        assert!(rendered.contains(r#"rx="200""#));
        assert!(rendered.contains(r#"ry="145""#));
    }

    #[test]
    fn test_ellipse_translucent_fill() {
        let mut def = EllipseDefinition::new();
        def.set_fill_color(Some(Color::new("#C8E6C9").unwrap().with_alpha(0.6)));
        let rendered = def
            .render_to_svg(Size::new(10.0, 10.0), Point::default())
            .to_string();

        assert!(rendered.contains("fill-opacity"));
    }
}
