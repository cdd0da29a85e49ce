//! Command-line argument definitions for the memviz CLI.

use clap::{ArgGroup, Parser, ValueEnum};

use memviz::FigureKind;

/// Command-line arguments for the memviz illustration tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("selection").required(true).args(["figure", "all"])))]
pub struct Args {
    /// Figure to render (memory-layout, stack-frame, circular-reference,
    /// move-semantics, value-category)
    #[arg(help = "Figure to render")]
    pub figure: Option<FigureKind>,

    /// Render every figure
    #[arg(long)]
    pub all: bool,

    /// Output path: a file for a single figure, a directory with --all
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Supported output image formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    /// The file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}
