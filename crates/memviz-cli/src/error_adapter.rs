//! Error adapter for rendering CLI errors through miette.
//!
//! The library's error types are plain `std::error::Error` implementations;
//! this adapter attaches miette diagnostic codes and, for unknown figure
//! names, a help message listing the valid names.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use memviz::{FigureKind, MemvizError};

use crate::CliError;

/// Adapter implementing [`MietteDiagnostic`] for [`CliError`].
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Render(MemvizError::Io(_)) | CliError::Io(_) => "memviz::io",
            CliError::Render(MemvizError::UnknownFigure(_)) => "memviz::figure",
            CliError::Render(MemvizError::Style(_)) => "memviz::style",
            CliError::Render(MemvizError::Svg(_)) => "memviz::svg",
            CliError::Render(MemvizError::Raster(_)) => "memviz::raster",
            CliError::Config(_) => "memviz::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            CliError::Render(MemvizError::UnknownFigure(_)) => {
                let names: Vec<&str> = FigureKind::all().iter().map(|k| k.name()).collect();
                Some(Box::new(format!("valid figures: {}", names.join(", "))))
            }
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_figure_gets_help() {
        let err = CliError::Render(MemvizError::UnknownFigure("flow-chart".to_string()));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "memviz::figure");
        let help = adapter.help().unwrap().to_string();
        assert!(help.contains("memory-layout"));
        assert!(help.contains("value-category"));
    }

    #[test]
    fn test_other_errors_have_code_but_no_help() {
        let err = CliError::Render(MemvizError::Raster("pixmap".to_string()));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "memviz::raster");
        assert!(adapter.help().is_none());
    }
}
