//! Stacked text lines with per-line styling.

use std::rc::Rc;

use memviz_core::{
    draw::{Drawable, LayeredOutput, Text, TextDefinition},
    geometry::{Point, Size},
};

/// A vertical stack of text lines, each with its own definition.
///
/// Unlike a multi-line [`Text`], every line here can differ in size, weight,
/// or color - a bold name over a smaller gray annotation, for example. The
/// stack is centered on its render position.
#[derive(Debug, Clone, Default)]
pub struct TextStack {
    lines: Vec<(String, Rc<TextDefinition>)>,
    gap: f32,
}

impl TextStack {
    /// Creates an empty stack with no extra gap between lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the extra vertical gap between consecutive lines.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Appends a line (builder style).
    pub fn line(mut self, content: impl Into<String>, definition: Rc<TextDefinition>) -> Self {
        self.lines.push((content.into(), definition));
        self
    }

    fn line_sizes(&self) -> Vec<Size> {
        self.lines
            .iter()
            .map(|(content, definition)| Text::new(definition, content).calculate_size())
            .collect()
    }
}

impl Drawable for TextStack {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let total = self.size();
        let mut top = position.y() - total.height() / 2.0;

        for ((content, definition), line_size) in self.lines.iter().zip(self.line_sizes()) {
            let center = Point::new(position.x(), top + line_size.height() / 2.0);
            output.merge(Text::new(definition, content).render_to_layers(center));
            top += line_size.height() + self.gap;
        }

        output
    }

    fn size(&self) -> Size {
        let sizes = self.line_sizes();
        let width = sizes.iter().fold(0.0f32, |w, s| w.max(s.width()));
        let height: f32 = sizes.iter().map(|s| s.height()).sum();
        let gaps = self.gap * self.lines.len().saturating_sub(1) as f32;
        Size::new(width, height + gaps)
    }
}
