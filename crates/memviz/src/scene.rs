//! The scene: a fixed-size canvas that elements are placed onto.
//!
//! Figures build a [`Scene`] by placing drawables at literal coordinates and
//! drawing arrows between points. The scene keeps the layered SVG output and
//! the arrow marker bookkeeping, and finally assembles everything into an
//! `svg::Document`.

use log::debug;

use svg::Document;
use svg::node::element as svg_element;

use memviz_core::{
    color::Color,
    draw::{Arrow, ArrowDrawer, Drawable, LayeredOutput, PositionedDrawable, RenderLayer},
    geometry::{Bounds, Point, Size},
};

/// A fixed-size canvas accumulating rendered elements.
pub struct Scene {
    size: Size,
    background: Option<Color>,
    output: LayeredOutput,
    arrows: ArrowDrawer,
    content_bounds: Option<Bounds>,
}

impl Scene {
    /// Creates an empty scene with the given canvas size in pixels.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
            output: LayeredOutput::new(),
            arrows: ArrowDrawer::default(),
            content_bounds: None,
        }
    }

    /// The canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the canvas background fill; `None` leaves it transparent.
    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    /// Places a drawable centered at `position`.
    pub fn place<D: Drawable>(&mut self, drawable: D, position: Point) {
        let positioned = PositionedDrawable::new(drawable).with_position(position);

        let bounds = positioned.bounds();
        self.content_bounds = Some(match self.content_bounds {
            Some(current) => current.merge(&bounds),
            None => bounds,
        });

        self.output.merge(positioned.render_to_layers(position));
    }

    /// Draws an arrow between two absolute points.
    pub fn draw_arrow(&mut self, arrow: &Arrow, from: Point, to: Point) {
        let node = self.arrows.draw_arrow(arrow, from, to);
        self.output.add_to_layer(RenderLayer::Arrow, node);
    }

    /// Assembles the scene into an SVG document, consuming it.
    pub fn into_document(self) -> Document {
        if let Some(bounds) = self.content_bounds {
            debug!(
                canvas_width = self.size.width(),
                canvas_height = self.size.height(),
                content_max_x = bounds.max_x(),
                content_max_y = bounds.max_y();
                "Assembling scene"
            );
        }

        let mut document = Document::new()
            .set(
                "viewBox",
                (0.0, 0.0, self.size.width(), self.size.height()),
            )
            .set("width", self.size.width())
            .set("height", self.size.height());

        if let Some(background) = &self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", self.size.width())
                .set("height", self.size.height())
                .set("fill", background.to_string());
            document = document.add(rect);
        }

        document = document.add(self.arrows.draw_marker_definitions());

        for node in self.output.render() {
            document = document.add(node);
        }

        document
    }
}
