//! A drawable paired with its absolute position on the canvas.

use crate::{
    draw::{Drawable, LayeredOutput},
    geometry::{Bounds, Point, Size},
};

/// A drawable object together with an absolute position.
///
/// The scene uses this to track the bounds actually covered by placed
/// elements.
#[derive(Debug, Clone)]
pub struct PositionedDrawable<D: Drawable> {
    drawable: D,
    position: Point,
}

impl<D: Drawable> PositionedDrawable<D> {
    /// Wraps a drawable; the position defaults to the origin.
    pub fn new(drawable: D) -> Self {
        Self {
            drawable,
            position: Point::default(),
        }
    }

    /// Sets the position for this drawable (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// The bounds this drawable covers at its stored position.
    pub fn bounds(&self) -> Bounds {
        self.position.to_bounds(self.drawable.size())
    }

    /// A reference to the inner drawable.
    pub fn inner(&self) -> &D {
        &self.drawable
    }

    /// The stored position.
    pub fn position(&self) -> Point {
        self.position
    }
}

impl<D: Drawable> Drawable for PositionedDrawable<D> {
    fn render_to_layers(&self, _position: Point) -> LayeredOutput {
        // The stored position wins over the passed one.
        self.drawable.render_to_layers(self.position)
    }

    fn size(&self) -> Size {
        self.drawable.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RectangleDefinition, Shape};

    #[test]
    fn test_bounds_follow_position() {
        let shape = Shape::new(RectangleDefinition::new(), Size::new(40.0, 20.0));
        let positioned = PositionedDrawable::new(shape).with_position(Point::new(100.0, 50.0));

        let bounds = positioned.bounds();
        assert_eq!(bounds.min_x(), 80.0);
        assert_eq!(bounds.min_y(), 40.0);
        assert_eq!(bounds.max_x(), 120.0);
        assert_eq!(bounds.max_y(), 60.0);
    }

    #[test]
    fn test_render_uses_stored_position() {
        let shape = Shape::new(RectangleDefinition::new(), Size::new(40.0, 20.0));
        let positioned = PositionedDrawable::new(shape).with_position(Point::new(100.0, 50.0));

        // Passed position is ignored
        let output = positioned.render_to_layers(Point::new(0.0, 0.0));
        let rendered = output.render().pop().unwrap().to_string();
        assert!(rendered.contains(r#"x="80""#));
    }
}
