//! Text rendering for illustration labels.
//!
//! - [`TextDefinition`] - reusable text style (family stack, size, weight,
//!   slant, anchor, color)
//! - [`Text`] - a renderable text element combining content with a
//!   [`TextDefinition`]
//!
//! Sizes are measured with cosmic-text so caption bubbles and stacked labels
//! can be laid out from real font metrics. Rendering produces an SVG
//! `<text>` element with one `<tspan>` per line.
//!
//! The font family is a comma-separated stack (the illustrations mix Latin
//! and CJK glyphs, so the stack usually names a CJK-capable face); the first
//! entry is used for measurement.

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use log::info;
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Horizontal alignment of text relative to its position.
///
/// Maps to the SVG `text-anchor` attribute. With `Start` the position is the
/// left edge of the text, with `End` the right edge; vertical centering is
/// unaffected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    /// The SVG text-anchor value.
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Font weight, mapping to the SVG `font-weight` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Font slant, mapping to the SVG `font-style` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

impl FontSlant {
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Defines the visual style for text elements.
///
/// Multiple [`Text`] elements can share one definition for consistent
/// styling.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `15` |
/// | Weight | `Normal` |
/// | Slant | `Normal` |
/// | Anchor | `Middle` |
/// | Color | `None` (SVG default, typically black) |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    weight: FontWeight,
    slant: FontSlant,
    anchor: TextAnchor,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family stack, e.g. `"PingFang SC, sans-serif"`.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font weight.
    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    /// Sets the font slant.
    pub fn set_slant(&mut self, slant: FontSlant) {
        self.slant = slant;
    }

    /// Sets the horizontal anchor.
    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    /// Sets the text color; `None` falls back to the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    fn font_size(&self) -> u16 {
        self.font_size
    }

    fn font_family(&self) -> &str {
        &self.font_family
    }

    /// The first family in the stack, used for measurement.
    fn primary_family(&self) -> &str {
        self.font_family
            .split(',')
            .next()
            .unwrap_or(&self.font_family)
            .trim()
    }

    fn weight(&self) -> FontWeight {
        self.weight
    }

    fn slant(&self) -> FontSlant {
        self.slant
    }

    fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 15,
            weight: FontWeight::default(),
            slant: FontSlant::default(),
            anchor: TextAnchor::default(),
            color: None,
        }
    }
}

/// A renderable text element combining content with styling.
///
/// # Examples
///
/// ```
/// # use memviz_core::draw::{TextDefinition, Text};
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "引用计数=2");
///
/// let size = text.calculate_size();
/// assert!(size.width() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    ///
    /// Newlines in `content` produce stacked lines centered on the render
    /// position.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Calculates the size required to display this text.
    pub fn calculate_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

impl<'a> Drawable for Text<'a> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let lines: Vec<&str> = self.content.lines().collect();

        // Uniform line height: total measured height over the line count.
        let text_size = self.calculate_size();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            text_size.height() / lines.len() as f32
        };

        let y_offset = -(text_size.height() + line_height) / 2.0;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y() + y_offset)
            .set("text-anchor", self.definition.anchor().to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.weight() != FontWeight::Normal {
            rendered_text =
                rendered_text.set("font-weight", self.definition.weight().to_svg_value());
        }

        if self.definition.slant() != FontSlant::Normal {
            rendered_text = rendered_text.set("font-style", self.definition.slant().to_svg_value());
        }

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Owns the process-wide cosmic-text `FontSystem` used for measurement.
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Measures `text` under `text_def` using real font metrics and shaping.
    ///
    /// Falls back to a width heuristic when no font in the stack can shape
    /// the content (e.g. no CJK-capable face installed), so layout stays
    /// usable on minimal systems.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let font_size_px = text_def.font_size() as f32;
        let line_height = font_size_px * 1.3;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let mut attrs = Attrs::new().family(Family::Name(text_def.primary_family()));
        if text_def.weight() == FontWeight::Bold {
            attrs = attrs.weight(Weight::BOLD);
        }
        if text_def.slant() == FontSlant::Italic {
            attrs = attrs.style(Style::Italic);
        }

        // Unbounded buffer so text flows to its natural width.
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    let run_width = last.x + last.w;
                    max_width = max_width.max(run_width);
                }
                total_height += metrics.line_height;
            }
        } else {
            // No shapeable font found: approximate from character count.
            let line_count = text.lines().count().max(1);
            let longest_line = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            max_width = longest_line as f32 * (font_size_px * 0.6);
            total_height = metrics.line_height * line_count as f32;
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_size(), 15);
        assert_eq!(def.font_family(), "sans-serif");
        assert_eq!(def.weight(), FontWeight::Normal);
        assert_eq!(def.slant(), FontSlant::Normal);
        assert_eq!(def.anchor(), TextAnchor::Middle);
        assert!(def.color().is_none());
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_size(24);
        def.set_font_family("SimHei, Microsoft YaHei");
        def.set_weight(FontWeight::Bold);
        def.set_slant(FontSlant::Italic);
        def.set_anchor(TextAnchor::Start);
        def.set_color(Some(Color::new("#1976D2").unwrap()));

        assert_eq!(def.font_size(), 24);
        assert_eq!(def.font_family(), "SimHei, Microsoft YaHei");
        assert_eq!(def.primary_family(), "SimHei");
        assert_eq!(def.weight(), FontWeight::Bold);
        assert_eq!(def.slant(), FontSlant::Italic);
        assert_eq!(def.anchor(), TextAnchor::Start);
        assert!(def.color().is_some());
    }

    #[test]
    fn test_anchor_svg_values() {
        assert_eq!(TextAnchor::Start.to_svg_value(), "start");
        assert_eq!(TextAnchor::Middle.to_svg_value(), "middle");
        assert_eq!(TextAnchor::End.to_svg_value(), "end");
    }

    #[test]
    fn test_text_calculate_size_empty() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "").calculate_size();
        assert_approx_eq!(f32, size.width(), 0.0);
        assert_approx_eq!(f32, size.height(), 0.0);
    }

    #[test]
    fn test_text_calculate_size_single_line() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "Stack").calculate_size();
        assert!(size.width() > 0.0, "width should be positive");
        assert!(size.height() > 0.0, "height should be positive");
    }

    #[test]
    fn test_text_calculate_size_multiline_taller() {
        let def = TextDefinition::new();
        let single = Text::new(&def, "调用方压入").calculate_size();
        let multi = Text::new(&def, "调用方压入\n(调用前)").calculate_size();
        assert!(
            multi.height() > single.height(),
            "two lines ({}) should be taller than one ({})",
            multi.height(),
            single.height()
        );
    }

    #[test]
    fn test_text_calculate_size_larger_font() {
        let mut small = TextDefinition::new();
        small.set_font_size(12);
        let mut large = TextDefinition::new();
        large.set_font_size(24);

        let small_size = Text::new(&small, "heap").calculate_size();
        let large_size = Text::new(&large, "heap").calculate_size();

        assert!(large_size.height() > small_size.height());
        assert!(large_size.width() > small_size.width());
    }

    #[test]
    fn test_text_render_has_content() {
        let def = TextDefinition::new();
        let output = Text::new(&def, "局部变量").render_to_layers(Point::new(100.0, 100.0));
        assert!(!output.is_empty());
    }

    #[test]
    fn test_text_render_emits_one_group() {
        let def = TextDefinition::new();
        let output = Text::new(&def, "line1\nline2").render_to_layers(Point::new(0.0, 0.0));
        let nodes = output.render();
        assert_eq!(nodes.len(), 1);
    }
}
