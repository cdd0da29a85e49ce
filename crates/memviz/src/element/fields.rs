//! Object boxes with a title and monospace member rows.

use std::rc::Rc;

use memviz_core::{
    draw::{Drawable, LayeredOutput, Shape, Text, TextDefinition},
    geometry::{Point, Size},
};

/// Vertical gap between the title baseline area and the box's top edge.
const TITLE_GAP: f32 = 6.0;

/// Left inset of the member rows inside the box.
const FIELD_INSET: f32 = 12.0;

/// Distance from the box top to the center of the first member row.
const FIELD_START: f32 = 30.0;

/// Vertical step between member rows.
const FIELD_STEP: f32 = 38.0;

/// An object box: a shape with its name above the top edge and left-aligned
/// monospace member rows inside.
///
/// Used for the `src`/`dst` buffers in the move illustration. A moved-from
/// box adds a `note` rendered near the bottom edge.
#[derive(Debug, Clone)]
pub struct FieldBox {
    shape: Shape,
    title: String,
    title_definition: Rc<TextDefinition>,
    fields: Vec<String>,
    field_definition: Rc<TextDefinition>,
    note: Option<(String, Rc<TextDefinition>)>,
}

impl FieldBox {
    pub fn new(
        shape: Shape,
        title: impl Into<String>,
        title_definition: Rc<TextDefinition>,
        fields: Vec<String>,
        field_definition: Rc<TextDefinition>,
    ) -> Self {
        Self {
            shape,
            title: title.into(),
            title_definition,
            fields,
            field_definition,
            note: None,
        }
    }

    /// Adds a note centered near the bottom edge of the box.
    pub fn with_note(mut self, note: impl Into<String>, definition: Rc<TextDefinition>) -> Self {
        self.note = Some((note.into(), definition));
        self
    }
}

impl Drawable for FieldBox {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = self.shape.render_to_layers(position);
        let bounds = position.to_bounds(self.shape.size());

        let title = Text::new(&self.title_definition, &self.title);
        let title_center = Point::new(
            position.x(),
            bounds.min_y() - title.calculate_size().height() / 2.0 - TITLE_GAP,
        );
        output.merge(title.render_to_layers(title_center));

        // Member rows are left-aligned; their definition carries the Start
        // anchor, so x is the left edge.
        let field_x = bounds.min_x() + FIELD_INSET;
        for (row, field) in self.fields.iter().enumerate() {
            let center = Point::new(field_x, bounds.min_y() + FIELD_START + row as f32 * FIELD_STEP);
            output.merge(Text::new(&self.field_definition, field).render_to_layers(center));
        }

        if let Some((note, definition)) = &self.note {
            let note_text = Text::new(definition, note);
            let note_center = Point::new(
                position.x(),
                bounds.max_y() - note_text.calculate_size().height() / 2.0 - 4.0,
            );
            output.merge(note_text.render_to_layers(note_center));
        }

        output
    }

    fn size(&self) -> Size {
        self.shape.size()
    }
}
