//! Output backends for assembled scenes.
//!
//! The [`svg`] backend writes the `svg::Document` a scene produces; the
//! [`png`] backend re-parses that SVG with usvg and rasterizes it through
//! resvg at the configured scale.

pub mod png;
pub mod svg;
