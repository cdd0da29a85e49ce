//! Memviz - illustrations for the C++ memory-internals article series.
//!
//! Five figures (address-space layout, stack frame anatomy, `shared_ptr`
//! cycles, move semantics, value categories) are built as fixed scenes and
//! rendered to SVG or PNG.
//!
//! # Examples
//!
//! ```rust,no_run
//! use memviz::{FigureKind, FigureRenderer};
//!
//! let renderer = FigureRenderer::default();
//!
//! // Render to an SVG string
//! let svg = renderer.render_svg(FigureKind::StackFrame)
//!     .expect("failed to render");
//!
//! // Or straight to a PNG file
//! renderer.write_png(FigureKind::MemoryLayout, "memory_layout.png")
//!     .expect("failed to render");
//! ```

pub mod config;
pub mod export;
pub mod font;
pub mod scene;

mod element;
mod error;
mod figure;
mod figures;

pub use memviz_core::{color, draw, geometry};

pub use error::MemvizError;
pub use figure::FigureKind;

use std::path::Path;

use log::info;

use config::AppConfig;

/// Renders figures under a fixed configuration.
///
/// This is the main entry point: hold one renderer and ask it for figures in
/// either output format.
#[derive(Default)]
pub struct FigureRenderer {
    config: AppConfig,
}

impl FigureRenderer {
    /// Creates a renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Renders a figure to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `MemvizError` for invalid configured style values.
    pub fn render_svg(&self, kind: FigureKind) -> Result<String, MemvizError> {
        info!(figure = kind.name(); "Building scene");
        let scene = kind.build_scene(&self.config)?;
        let document = scene.into_document();
        Ok(export::svg::document_to_string(&document))
    }

    /// Renders a figure to PNG bytes at the configured raster scale.
    ///
    /// # Errors
    ///
    /// Returns `MemvizError` for style, SVG processing, or rasterization
    /// failures.
    pub fn render_png(&self, kind: FigureKind) -> Result<Vec<u8>, MemvizError> {
        let svg = self.render_svg(kind)?;
        export::png::rasterize(&svg, self.config.raster())
    }

    /// Renders a figure and writes the SVG to `path`.
    pub fn write_svg(&self, kind: FigureKind, path: impl AsRef<Path>) -> Result<(), MemvizError> {
        info!(figure = kind.name(); "Building scene");
        let scene = kind.build_scene(&self.config)?;
        export::svg::write_document(&scene.into_document(), path)
    }

    /// Renders a figure and writes the PNG to `path`.
    pub fn write_png(&self, kind: FigureKind, path: impl AsRef<Path>) -> Result<(), MemvizError> {
        let svg = self.render_svg(kind)?;
        export::png::write_png(&svg, self.config.raster(), path)
    }
}
