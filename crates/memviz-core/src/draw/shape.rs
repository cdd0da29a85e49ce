//! Shape definitions and the [`Shape`] wrapper.
//!
//! A [`ShapeDefinition`] describes how a kind of shape renders (fill, border,
//! rounding); a [`Shape`] pairs a shared definition with the explicit size it
//! occupies in a figure. All geometry in the illustrations is literal, so
//! sizes are always given by the caller rather than derived from content.

use std::rc::Rc;

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

mod ellipse;
mod rectangle;

pub use ellipse::EllipseDefinition;
pub use rectangle::RectangleDefinition;

/// A trait for shape definitions that provide stateless rendering.
pub trait ShapeDefinition: std::fmt::Debug {
    /// Renders this shape to an SVG node.
    ///
    /// `position` is the center of the shape; `size` its full extent.
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node>;

    /// Creates a boxed clone of this shape definition.
    fn clone_box(&self) -> Box<dyn ShapeDefinition>;
}

/// Enable cloning of `Box<dyn ShapeDefinition>` by delegating to `clone_box`.
impl Clone for Box<dyn ShapeDefinition> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A shape instance: a shared definition plus the size it is drawn at.
#[derive(Debug, Clone)]
pub struct Shape {
    definition: Rc<Box<dyn ShapeDefinition>>,
    size: Size,
}

impl Shape {
    /// Creates a shape from a concrete definition and an explicit size.
    pub fn new(definition: impl ShapeDefinition + 'static, size: Size) -> Self {
        Self {
            definition: Rc::new(Box::new(definition)),
            size,
        }
    }

    /// Creates a shape reusing an already-shared definition.
    pub fn from_shared(definition: Rc<Box<dyn ShapeDefinition>>, size: Size) -> Self {
        Self { definition, size }
    }

    /// Renders the underlying definition at the given size and position.
    ///
    /// Used by elements that need the node on a layer other than
    /// [`RenderLayer::Content`].
    pub fn render_node(&self, position: Point) -> Box<dyn svg::Node> {
        self.definition.render_to_svg(self.size, position)
    }
}

impl Drawable for Shape {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, self.render_node(position));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_reports_given_size() {
        let shape = Shape::new(RectangleDefinition::new(), Size::new(320.0, 80.0));
        assert_eq!(shape.size(), Size::new(320.0, 80.0));
    }

    #[test]
    fn test_shape_renders_to_content_layer() {
        let shape = Shape::new(RectangleDefinition::new(), Size::new(100.0, 50.0));
        let output = shape.render_to_layers(Point::new(50.0, 25.0));
        assert!(!output.is_empty());
        assert_eq!(output.render().len(), 1);
    }

    #[test]
    fn test_shared_definition_reuse() {
        let definition: Rc<Box<dyn ShapeDefinition>> =
            Rc::new(Box::new(RectangleDefinition::new()));
        let a = Shape::from_shared(Rc::clone(&definition), Size::new(10.0, 10.0));
        let b = Shape::from_shared(definition, Size::new(20.0, 20.0));
        assert_eq!(a.size(), Size::new(10.0, 10.0));
        assert_eq!(b.size(), Size::new(20.0, 20.0));
    }

    #[test]
    fn test_boxed_definition_clone() {
        let boxed: Box<dyn ShapeDefinition> = Box::new(EllipseDefinition::new());
        let cloned = boxed.clone();
        // Both render without panicking
        let _ = boxed.render_to_svg(Size::new(10.0, 10.0), Point::default());
        let _ = cloned.render_to_svg(Size::new(10.0, 10.0), Point::default());
    }
}
