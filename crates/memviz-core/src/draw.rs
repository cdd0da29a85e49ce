//! Drawable elements and rendering support.
//!
//! Everything visible in an illustration implements [`Drawable`]: it reports
//! its size and renders itself into a [`LayeredOutput`], which keeps SVG
//! nodes grouped by z-order layer until the whole scene is assembled.

pub mod shape;

mod arrow;
mod layer;
mod positioned;
mod stroke;
mod text;

pub use arrow::{Arrow, ArrowDefinition, ArrowDirection, ArrowDrawer, ArrowStyle};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use positioned::PositionedDrawable;
pub use shape::{EllipseDefinition, RectangleDefinition, Shape, ShapeDefinition};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{FontSlant, FontWeight, Text, TextAnchor, TextDefinition};

use crate::geometry::{Point, Size};

/// A visual element that can render itself into layered SVG output.
///
/// `position` is the center of the element; drawables expand symmetrically
/// around it. Horizontal text alignment is the one exception, controlled by
/// [`TextAnchor`] on the text definition.
pub trait Drawable {
    /// Renders this element centered at `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// The space the element occupies when rendered.
    fn size(&self) -> Size;
}
