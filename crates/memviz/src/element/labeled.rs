//! A shape with a centered text stack.

use memviz_core::{
    draw::{Drawable, LayeredOutput, Shape},
    geometry::{Point, Size},
};

use crate::element::TextStack;

/// A shape with text centered inside it.
///
/// This is the workhorse element: stack-frame cells, heap nodes, smart
/// pointer boxes, and the value-category boxes are all a [`Shape`] with a
/// [`TextStack`] over it.
#[derive(Debug, Clone)]
pub struct LabeledBox {
    shape: Shape,
    label: TextStack,
}

impl LabeledBox {
    /// Combines a shape with the text stack drawn at its center.
    pub fn new(shape: Shape, label: TextStack) -> Self {
        Self { shape, label }
    }
}

impl Drawable for LabeledBox {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = self.shape.render_to_layers(position);
        output.merge(self.label.render_to_layers(position));
        output
    }

    fn size(&self) -> Size {
        self.shape.size()
    }
}
