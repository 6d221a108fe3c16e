//! Shape mode selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which brush the pointer drives while dragging.
///
/// The mode is a closed set; the dispatcher matches on it to pick exactly one
/// brush per pointer-move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    /// Ribbon of rotated squares following the drag (default)
    #[default]
    Squares,
    /// Faint concentric circle bursts snapped to a 100px grid
    Circles,
    /// Clouds of looping quadratic curves around grid intersections
    Grid,
    /// Letters of a phrase laid out along the drag direction
    Text,
}

impl ShapeMode {
    /// All modes in selector order (keys 1-4).
    pub const ALL: [ShapeMode; 4] = [
        ShapeMode::Squares,
        ShapeMode::Circles,
        ShapeMode::Grid,
        ShapeMode::Text,
    ];

    /// Human-readable label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Squares => "Squares",
            Self::Circles => "Circles",
            Self::Grid => "Grid",
            Self::Text => "Text",
        }
    }

    /// Returns the mode bound to a selector digit (`'1'`..=`'4'`).
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }
}

impl std::str::FromStr for ShapeMode {
    type Err = ();

    /// Accepts mode names (case-insensitive) and the selector values `0`-`3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "squares" | "0" => Ok(Self::Squares),
            "circles" | "1" => Ok(Self::Circles),
            "grid" | "2" => Ok(Self::Grid),
            "text" | "3" => Ok(Self::Text),
            _ => Err(()),
        }
    }
}
