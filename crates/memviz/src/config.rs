//! Configuration types for figure rendering.
//!
//! All types implement [`serde::Deserialize`] so the CLI can load them from
//! a TOML file; every field is optional and defaults reproduce the article
//! styling.
//!
//! # Example
//!
//! ```
//! # use memviz::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.raster().scale(), 1.5);
//! ```

use serde::Deserialize;

use memviz_core::color::Color;

use crate::font;

/// Top-level configuration combining style, font, and raster settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Font configuration section.
    #[serde(default)]
    font: FontConfig,

    /// PNG rasterization section.
    #[serde(default)]
    raster: RasterConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, font: FontConfig, raster: RasterConfig) -> Self {
        Self {
            style,
            font,
            raster,
        }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the font configuration.
    pub fn font(&self) -> &FontConfig {
        &self.font
    }

    /// Returns the raster configuration.
    pub fn raster(&self) -> &RasterConfig {
        &self.raster
    }
}

/// Visual styling options for rendered figures.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Canvas background color as a CSS color string. Unset means white.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// The parsed background [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid CSS color.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("invalid background color in config: {err}"))
    }
}

/// Font selection for figure text.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FontConfig {
    /// Font families in preference order. Unset picks an OS-appropriate
    /// CJK-capable stack.
    #[serde(default)]
    families: Option<Vec<String>>,
}

impl FontConfig {
    /// The SVG `font-family` stack to put on every text element.
    pub fn family_stack(&self) -> String {
        match &self.families {
            Some(families) => font::family_stack(families),
            None => font::default_family_stack(),
        }
    }
}

/// PNG rasterization options.
#[derive(Debug, Clone, Deserialize)]
pub struct RasterConfig {
    /// Scale factor applied when rasterizing the SVG canvas to pixels.
    #[serde(default = "default_scale")]
    scale: f32,
}

impl RasterConfig {
    /// The raster scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

fn default_scale() -> f32 {
    1.5
}
