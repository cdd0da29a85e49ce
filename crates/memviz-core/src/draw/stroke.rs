//! Stroke and line-style definitions.
//!
//! A [`StrokeDefinition`] carries the color, width, and dash pattern shared
//! by box borders, separator lines, and arrow shafts. The
//! [`apply_stroke!`](crate::apply_stroke!) macro writes the corresponding
//! SVG attributes onto any element.

use std::str::FromStr;

use crate::color::Color;

/// The dash pattern of a stroke.
///
/// Maps to the SVG `stroke-dasharray` attribute; `Solid` omits it.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Continuous line (default)
    #[default]
    Solid,
    /// 5px dash, 5px gap
    Dashed,
    /// 2px dot, 3px gap
    Dotted,
    /// An explicit SVG dasharray pattern, e.g. `"10,5,2,5"`
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            // Any other value is treated as a custom dasharray pattern
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// The SVG dasharray value for this style, or `None` for solid lines.
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use memviz_core::color::Color;
/// use memviz_core::draw::{StrokeDefinition, StrokeStyle};
///
/// // Solid 2px border
/// let border = StrokeDefinition::solid(Color::new("#C62828").unwrap(), 2.0);
///
/// // Dashed weak-reference line
/// let weak = StrokeDefinition::dashed(Color::new("#888888").unwrap(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (alias for [`StrokeDefinition::new`]).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke.
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Creates a dotted stroke.
    pub fn dotted(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dotted);
        stroke
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
        }
    }
}

/// Applies all stroke attributes of a [`StrokeDefinition`] to an SVG element.
///
/// Sets `stroke`, `stroke-opacity`, `stroke-width`, and, for non-solid
/// styles, `stroke-dasharray`.
///
/// # Examples
///
/// ```
/// use memviz_core::color::Color;
/// use memviz_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::dashed(Color::new("#1565C0").unwrap(), 2.0);
/// let rect = svg_element::Rectangle::new().set("width", 100).set("height", 50);
/// let rect = memviz_core::apply_stroke!(rect, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
