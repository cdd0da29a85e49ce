//! Partitioned strips of heap cells.

use std::rc::Rc;

use svg::node::element as svg_element;

use memviz_core::{
    apply_stroke,
    color::Color,
    draw::{
        Drawable, LayeredOutput, RectangleDefinition, RenderLayer, Shape, StrokeDefinition, Text,
        TextDefinition,
    },
    geometry::{Point, Size},
};

/// Gap between the strip's bottom edge and its caption.
const CAPTION_GAP: f32 = 8.0;

/// A row of equal heap cells drawn as one rounded box with internal
/// separators, one value per cell, and an optional caption underneath.
#[derive(Debug, Clone)]
pub struct HeapStrip {
    values: Vec<String>,
    cell_size: Size,
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
    value_definition: Rc<TextDefinition>,
    caption: Option<(String, Rc<TextDefinition>)>,
}

impl HeapStrip {
    pub fn new(
        values: Vec<String>,
        cell_size: Size,
        fill_color: Option<Color>,
        stroke: Rc<StrokeDefinition>,
        value_definition: Rc<TextDefinition>,
    ) -> Self {
        Self {
            values,
            cell_size,
            fill_color,
            stroke,
            value_definition,
            caption: None,
        }
    }

    /// Adds a caption centered under the strip.
    pub fn with_caption(mut self, caption: impl Into<String>, definition: Rc<TextDefinition>) -> Self {
        self.caption = Some((caption.into(), definition));
        self
    }

    fn strip_size(&self) -> Size {
        Size::new(
            self.cell_size.width() * self.values.len() as f32,
            self.cell_size.height(),
        )
    }
}

impl Drawable for HeapStrip {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let strip_size = self.strip_size();
        let bounds = position.to_bounds(strip_size);

        let mut outline = RectangleDefinition::new();
        outline.set_fill_color(self.fill_color);
        outline.set_stroke(Rc::clone(&self.stroke));
        outline.set_corner_radius(4.0);
        output.merge(Shape::new(outline, strip_size).render_to_layers(position));

        // Cell separators, thinner than the outline
        let mut separator = StrokeDefinition::new(self.stroke.color(), 1.0);
        separator.set_style(self.stroke.style().clone());
        for cell in 1..self.values.len() {
            let x = bounds.min_x() + cell as f32 * self.cell_size.width();
            let line = svg_element::Line::new()
                .set("x1", x)
                .set("y1", bounds.min_y())
                .set("x2", x)
                .set("y2", bounds.max_y());
            let line = apply_stroke!(line, &separator);
            output.add_to_layer(RenderLayer::Divider, Box::new(line));
        }

        for (cell, value) in self.values.iter().enumerate() {
            let center = Point::new(
                bounds.min_x() + (cell as f32 + 0.5) * self.cell_size.width(),
                position.y(),
            );
            output.merge(Text::new(&self.value_definition, value).render_to_layers(center));
        }

        if let Some((caption, definition)) = &self.caption {
            let caption_text = Text::new(definition, caption);
            let caption_center = Point::new(
                position.x(),
                bounds.max_y() + CAPTION_GAP + caption_text.calculate_size().height() / 2.0,
            );
            output.merge(caption_text.render_to_layers(caption_center));
        }

        output
    }

    fn size(&self) -> Size {
        self.strip_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_cell_strip() -> HeapStrip {
        HeapStrip::new(
            (1..=5).map(|v| v.to_string()).collect(),
            Size::new(33.0, 60.0),
            Some(Color::new("#C8E6C9").unwrap()),
            Rc::new(StrokeDefinition::solid(Color::new("#4CAF50").unwrap(), 2.0)),
            Rc::new(TextDefinition::new()),
        )
    }

    #[test]
    fn test_strip_width_is_cells_times_cell_width() {
        let strip = five_cell_strip();
        assert_eq!(strip.size(), Size::new(165.0, 60.0));
    }

    #[test]
    fn test_strip_has_one_fewer_separators_than_cells() {
        let rendered: String = five_cell_strip()
            .render_to_layers(Point::new(298.0, 120.0))
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert_eq!(rendered.matches("<line").count(), 4);
        assert_eq!(rendered.matches("<tspan").count(), 5);
    }

    #[test]
    fn test_caption_below_strip() {
        let strip = five_cell_strip().with_caption("堆内存 (未拷贝)", Rc::new(TextDefinition::new()));
        let rendered: String = strip
            .render_to_layers(Point::new(298.0, 120.0))
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert!(rendered.contains("堆内存 (未拷贝)"));
    }
}
