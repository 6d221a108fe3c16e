//! Utility functions for color names and palette keys.
//!
//! This module provides:
//! - Key-to-color mapping for keyboard shortcuts (constants live in draw::color)
//! - Color names accepted wherever a hex color is expected (config, CLI, replay)

use crate::draw::{Color, ColorParseError, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps keyboard characters to colors for quick color switching.
///
/// # Supported Keys (case-insensitive)
/// - `R` → Red
/// - `G` → Green
/// - `B` → Blue
/// - `Y` → Yellow
/// - `O` → Orange
/// - `P` → Pink
/// - `W` → White
/// - `K` → Black (K for blacK, since B is blue)
///
/// Case is decided by the caller: lowercase sets the fill color, uppercase the
/// background.
pub fn key_to_color(c: char) -> Option<Color> {
    match c.to_ascii_uppercase() {
        'R' => Some(RED),
        'G' => Some(GREEN),
        'B' => Some(BLUE),
        'Y' => Some(YELLOW),
        'O' => Some(ORANGE),
        'P' => Some(PINK),
        'W' => Some(WHITE),
        'K' => Some(BLACK), // K for blacK
        _ => None,
    }
}

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Used by the status bar next to the hex value.
pub fn color_to_name(color: &Color) -> &'static str {
    // Match colors approximately with 0.1 tolerance
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

/// Normalizes a user-supplied color to a `#rrggbb` string.
///
/// Accepts either a hex string (validated, returned as written) or one of the
/// palette names understood by [`name_to_color`].
pub fn resolve_color_spec(spec: &str) -> Result<String, ColorParseError> {
    let spec = spec.trim();
    if !spec.starts_with('#') {
        if let Some(color) = name_to_color(spec) {
            return Ok(color.to_hex());
        }
    }
    parse_hex_channels(spec)?;
    Ok(spec.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_and_name_color_mappings() {
        assert_eq!(key_to_color('r').unwrap(), RED);
        assert_eq!(key_to_color('K').unwrap(), BLACK);
        assert!(key_to_color('x').is_none());
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn color_to_name_matches_known_colors() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(color_to_name(&Color::new(0.42, 0.42, 0.42, 1.0)), "Custom");
    }

    #[test]
    fn color_spec_accepts_names_and_hex() {
        assert_eq!(resolve_color_spec("Orange").unwrap(), "#ff8000");
        assert_eq!(resolve_color_spec(" #AABBCC ").unwrap(), "#AABBCC");
        assert!(resolve_color_spec("#abc").is_err());
        assert!(resolve_color_spec("mauve").is_err());
    }
}
