//! Memviz Drawing Primitives
//!
//! Foundational types for assembling the memory-concept illustrations:
//!
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds, and insets ([`geometry`] module)
//! - **Draw**: Drawable elements, strokes, text, shapes, and arrows
//!   ([`draw`] module)
//!
//! Everything here is output-format agnostic up to the point of rendering;
//! rendering itself targets SVG nodes, which downstream crates either write
//! out directly or rasterize.

pub mod color;
pub mod draw;
pub mod geometry;
