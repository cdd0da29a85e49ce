//! Error types for memviz operations.

use std::io;

use resvg::usvg;
use thiserror::Error;

/// The main error type for memviz operations.
#[derive(Debug, Error)]
pub enum MemvizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("unknown figure `{0}`")]
    UnknownFigure(String),

    #[error("style error: {0}")]
    Style(String),

    #[error("SVG error: {0}")]
    Svg(#[from] usvg::Error),

    #[error("raster error: {0}")]
    Raster(String),
}
