//! Translucent memory-region backdrops.

use std::rc::Rc;

use memviz_core::{
    draw::{Drawable, LayeredOutput, RenderLayer, Shape, Text, TextDefinition},
    geometry::{Point, Size},
};

/// A translucent backdrop marking a memory region (stack or heap area) with
/// a label pinned near one corner.
///
/// The backdrop renders on [`RenderLayer::Region`], beneath all content, so
/// boxes placed inside the region stay fully visible.
#[derive(Debug, Clone)]
pub struct RegionBand {
    shape: Shape,
    label: String,
    label_definition: Rc<TextDefinition>,
    /// Offset of the label position from the band center.
    label_offset: Point,
}

impl RegionBand {
    pub fn new(
        shape: Shape,
        label: impl Into<String>,
        label_definition: Rc<TextDefinition>,
        label_offset: Point,
    ) -> Self {
        Self {
            shape,
            label: label.into(),
            label_definition,
            label_offset,
        }
    }
}

impl Drawable for RegionBand {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Region, self.shape.render_node(position));

        let label_position = position.add_point(self.label_offset);
        output.merge(Text::new(&self.label_definition, &self.label).render_to_layers(label_position));

        output
    }

    fn size(&self) -> Size {
        self.shape.size()
    }
}

#[cfg(test)]
mod tests {
    use memviz_core::{color::Color, draw::RectangleDefinition};

    use super::*;

    #[test]
    fn test_backdrop_on_region_layer() {
        let mut definition = RectangleDefinition::new();
        definition.set_fill_color(Some(Color::new("#E3F2FD").unwrap().with_alpha(0.5)));

        let band = RegionBand::new(
            Shape::new(definition, Size::new(504.0, 187.0)),
            "栈 (Stack)",
            Rc::new(TextDefinition::new()),
            Point::new(-230.0, -60.0),
        );

        let nodes = band.render_to_layers(Point::new(288.0, 145.0)).render();
        let rendered: String = nodes.iter().map(|n| n.to_string()).collect();

        assert!(rendered.contains(r#"data-layer="region""#));
        assert!(rendered.contains("栈 (Stack)"));
    }
}
