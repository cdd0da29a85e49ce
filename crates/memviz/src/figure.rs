//! The catalogue of illustrations.

use std::{fmt, str::FromStr};

use crate::{config::AppConfig, error::MemvizError, figures, scene::Scene};

/// One of the article's illustrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// Process address-space layout: stack, heap, and the data/code segments.
    MemoryLayout,
    /// Anatomy of a single call frame.
    StackFrame,
    /// `shared_ptr` cycles and the `weak_ptr` fix.
    CircularReference,
    /// Buffer state before and after a move.
    MoveSemantics,
    /// The C++11 value-category taxonomy.
    ValueCategory,
}

impl FigureKind {
    /// Every figure, in article order.
    pub const fn all() -> [FigureKind; 5] {
        [
            Self::MemoryLayout,
            Self::StackFrame,
            Self::CircularReference,
            Self::MoveSemantics,
            Self::ValueCategory,
        ]
    }

    /// The canonical kebab-case name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MemoryLayout => "memory-layout",
            Self::StackFrame => "stack-frame",
            Self::CircularReference => "circular-reference",
            Self::MoveSemantics => "move-semantics",
            Self::ValueCategory => "value-category",
        }
    }

    /// The default output file stem.
    pub fn stem(&self) -> &'static str {
        match self {
            Self::MemoryLayout => "memory_layout",
            Self::StackFrame => "stack_frame",
            Self::CircularReference => "circular_reference",
            Self::MoveSemantics => "move_semantics",
            Self::ValueCategory => "value_category",
        }
    }

    /// Builds the figure's scene under the given configuration.
    pub fn build_scene(&self, config: &AppConfig) -> Result<Scene, MemvizError> {
        match self {
            Self::MemoryLayout => figures::memory_layout::scene(config),
            Self::StackFrame => figures::stack_frame::scene(config),
            Self::CircularReference => figures::circular_reference::scene(config),
            Self::MoveSemantics => figures::move_semantics::scene(config),
            Self::ValueCategory => figures::value_category::scene(config),
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FigureKind {
    type Err = MemvizError;

    /// Accepts both kebab-case and snake_case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('_', "-").as_str() {
            "memory-layout" => Ok(Self::MemoryLayout),
            "stack-frame" => Ok(Self::StackFrame),
            "circular-reference" => Ok(Self::CircularReference),
            "move-semantics" => Ok(Self::MoveSemantics),
            "value-category" => Ok(Self::ValueCategory),
            _ => Err(MemvizError::UnknownFigure(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_both_spellings() {
        assert_eq!(
            "memory-layout".parse::<FigureKind>().unwrap(),
            FigureKind::MemoryLayout
        );
        assert_eq!(
            "memory_layout".parse::<FigureKind>().unwrap(),
            FigureKind::MemoryLayout
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "flow-chart".parse::<FigureKind>().unwrap_err();
        assert!(matches!(err, MemvizError::UnknownFigure(name) if name == "flow-chart"));
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for kind in FigureKind::all() {
            assert_eq!(kind.to_string().parse::<FigureKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_stems_are_unique() {
        let stems: std::collections::HashSet<_> =
            FigureKind::all().iter().map(|k| k.stem()).collect();
        assert_eq!(stems.len(), FigureKind::all().len());
    }
}
