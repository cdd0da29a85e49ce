//! Caption bubbles: rounded boxes sized to their text.

use std::rc::Rc;

use svg::node::element as svg_element;

use memviz_core::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition},
    geometry::{Insets, Point, Size},
};

/// Styling for a [`Callout`] bubble.
///
/// Multiple callouts can share one definition; the leak warning and its
/// green counterpart differ only in colors.
#[derive(Debug, Clone)]
pub struct CalloutDefinition {
    background_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
    text: Rc<TextDefinition>,
    padding: Insets,
    corner_radius: f32,
}

impl CalloutDefinition {
    /// Creates a new callout definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bubble fill; `None` draws only the border.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Sets the bubble border stroke.
    pub fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>) {
        self.stroke = stroke;
    }

    /// Sets the text style used inside the bubble.
    pub fn set_text(&mut self, text: Rc<TextDefinition>) {
        self.text = text;
    }

    /// Sets the padding between the text and the bubble edge.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Sets the bubble corner radius.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
    }

    fn text(&self) -> &TextDefinition {
        &self.text
    }
}

impl Default for CalloutDefinition {
    fn default() -> Self {
        Self {
            background_color: None,
            stroke: Rc::new(StrokeDefinition::default()),
            text: Rc::new(TextDefinition::default()),
            padding: Insets::symmetric(8.0, 14.0),
            corner_radius: 8.0,
        }
    }
}

/// A rounded caption bubble with (possibly multi-line) centered text.
#[derive(Debug, Clone)]
pub struct Callout {
    definition: Rc<CalloutDefinition>,
    content: String,
}

impl Callout {
    pub fn new(definition: Rc<CalloutDefinition>, content: impl Into<String>) -> Self {
        Self {
            definition,
            content: content.into(),
        }
    }
}

impl Drawable for Callout {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let bounds = position.to_bounds(self.size());

        let mut bubble = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", self.definition.corner_radius);

        bubble = match &self.definition.background_color {
            Some(fill) => bubble
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => bubble.set("fill", "none"),
        };

        let bubble = apply_stroke!(bubble, self.definition.stroke);

        output.add_to_layer(RenderLayer::Annotation, Box::new(bubble));
        output.merge(Text::new(self.definition.text(), &self.content).render_to_layers(position));

        output
    }

    fn size(&self) -> Size {
        Text::new(self.definition.text(), &self.content)
            .calculate_size()
            .add_padding(self.definition.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leak_callout() -> Callout {
        let mut definition = CalloutDefinition::new();
        definition.set_background_color(Some(Color::new("#FFEBEE").unwrap()));
        definition.set_stroke(Rc::new(StrokeDefinition::solid(
            Color::new("#C62828").unwrap(),
            1.0,
        )));
        Callout::new(
            Rc::new(definition),
            "函数返回后：引用计数各减1变为1\n互相持有导致永不归零，内存泄漏！",
        )
    }

    #[test]
    fn test_callout_is_larger_than_its_text() {
        let callout = leak_callout();
        let text_size = Text::new(
            callout.definition.text(),
            "函数返回后：引用计数各减1变为1\n互相持有导致永不归零，内存泄漏！",
        )
        .calculate_size();

        assert!(callout.size().width() > text_size.width());
        assert!(callout.size().height() > text_size.height());
    }

    #[test]
    fn test_callout_renders_bubble_and_text() {
        let rendered: String = leak_callout()
            .render_to_layers(Point::new(288.0, 645.0))
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert!(rendered.contains(r#"data-layer="annotation""#));
        assert!(rendered.contains("内存泄漏"));
        assert!(rendered.contains("rx"));
    }
}
