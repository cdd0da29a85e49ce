//! The five illustrations.
//!
//! Each submodule builds one complete scene from literal coordinates, the
//! way the figures were originally laid out by hand. Shared here: scene
//! setup with the configured background and text-style construction from
//! the configured font stack.

pub(crate) mod circular_reference;
pub(crate) mod memory_layout;
pub(crate) mod move_semantics;
pub(crate) mod stack_frame;
pub(crate) mod value_category;

use memviz_core::{color::Color, draw::TextDefinition, geometry::Size};

use crate::{config::AppConfig, error::MemvizError, scene::Scene};

/// Parses a palette color literal.
pub(crate) fn rgb(spec: &str) -> Result<Color, MemvizError> {
    Color::new(spec).map_err(MemvizError::Style)
}

/// Creates a scene with the configured background (white when unset).
pub(crate) fn new_scene(config: &AppConfig, width: f32, height: f32) -> Result<Scene, MemvizError> {
    let mut scene = Scene::new(Size::new(width, height));
    let background = match config.style().background_color().map_err(MemvizError::Style)? {
        Some(color) => color,
        None => rgb("white")?,
    };
    scene.set_background(Some(background));
    Ok(scene)
}

/// Base text style: the configured font stack at the given pixel size.
pub(crate) fn text_def(config: &AppConfig, size: u16) -> TextDefinition {
    let mut definition = TextDefinition::new();
    definition.set_font_family(&config.font().family_stack());
    definition.set_font_size(size);
    definition
}
