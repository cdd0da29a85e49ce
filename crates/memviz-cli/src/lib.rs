//! CLI logic for the memviz illustration tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;
use thiserror::Error;

use memviz::{FigureKind, FigureRenderer, MemvizError};

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Render(#[from] MemvizError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Run the memviz CLI application.
///
/// Renders the selected figure (or all of them) in the requested format and
/// writes the output files.
///
/// # Errors
///
/// Returns `CliError` for configuration loading, rendering, and file I/O
/// failures.
pub fn run(args: &Args) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let renderer = FigureRenderer::new(app_config);

    if args.all {
        let dir = args
            .output
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&dir)?;

        for kind in FigureKind::all() {
            let path = dir.join(format!("{}.{}", kind.stem(), args.format.extension()));
            write_figure(&renderer, kind, args.format, &path)?;
        }
    } else {
        for kind in args.figure {
            let path = args
                .output
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| {
                    PathBuf::from(format!("{}.{}", kind.stem(), args.format.extension()))
                });
            write_figure(&renderer, kind, args.format, &path)?;
        }
    }

    Ok(())
}

fn write_figure(
    renderer: &FigureRenderer,
    kind: FigureKind,
    format: OutputFormat,
    path: &Path,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Svg => renderer.write_svg(kind, path)?,
        OutputFormat::Png => renderer.write_png(kind, path)?,
    }

    info!(
        figure = kind.name(),
        path = path.display().to_string();
        "Figure exported"
    );

    Ok(())
}
