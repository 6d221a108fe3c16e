//! Font descriptor for glyph rendering.

use serde::{Deserialize, Serialize};

/// Font configuration for text-mode glyphs.
///
/// Describes which font to use, including family name, weight, and style.
/// The size is not part of the descriptor: text mode derives a new size for
/// every glyph from the drag distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Georgia", "Serif", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light")
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Georgia".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Converts this descriptor to a size-less Pango font description string.
    ///
    /// Format: "Family Style Weight"
    /// Example: "Georgia" or "Serif Italic Bold"
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.join(" ")
    }

    /// Slant for Cairo's toy text API (used by the legacy measurement path).
    pub fn cairo_slant(&self) -> cairo::FontSlant {
        match self.style.to_lowercase().as_str() {
            "italic" => cairo::FontSlant::Italic,
            "oblique" => cairo::FontSlant::Oblique,
            _ => cairo::FontSlant::Normal,
        }
    }

    /// Weight for Cairo's toy text API. Only normal and bold exist there.
    pub fn cairo_weight(&self) -> cairo::FontWeight {
        match self.weight.to_lowercase().as_str() {
            "bold" | "ultrabold" | "heavy" => cairo::FontWeight::Bold,
            numeric => match numeric.parse::<u32>() {
                Ok(w) if w >= 600 => cairo::FontWeight::Bold,
                _ => cairo::FontWeight::Normal,
            },
        }
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
