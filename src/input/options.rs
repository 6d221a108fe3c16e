//! Option state: background color, fill color and shape mode.

use crate::draw::{Color, ColorParseError, color::parse_hex_channels};

use super::shape_mode::ShapeMode;

/// A color as entered by the user, kept together with its decoded channels.
///
/// The channels are only ever derived from the hex string, so the two can
/// never drift apart; there is no way to set them independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor {
    hex: String,
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Parses a `#rrggbb` string.
    pub fn parse(hex: &str) -> Result<Self, ColorParseError> {
        let (r, g, b) = parse_hex_channels(hex)?;
        Ok(Self {
            hex: hex.to_string(),
            r,
            g,
            b,
        })
    }

    /// The hex string exactly as it was entered.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The decoded `(r, g, b)` channels, 0-255.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The opaque color.
    pub fn color(&self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }

    /// The color at the given alpha, as `rgba(r, g, b, alpha)` would give.
    pub fn rgba(&self, alpha: f64) -> Color {
        self.color().with_alpha(alpha)
    }
}

/// User-selected drawing options.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Page color behind the canvas; also fills the square brush
    pub background: HexColor,
    /// Stroke/fill color for every brush
    pub fill: HexColor,
    /// Active brush
    pub shape: ShapeMode,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            background: HexColor {
                hex: "#ffffff".to_string(),
                r: 255,
                g: 255,
                b: 255,
            },
            fill: HexColor {
                hex: "#000000".to_string(),
                r: 0,
                g: 0,
                b: 0,
            },
            shape: ShapeMode::Squares,
        }
    }
}

impl Options {
    /// Replaces the background color. On error the previous color is kept.
    pub fn set_background(&mut self, hex: &str) -> Result<(), ColorParseError> {
        self.background = HexColor::parse(hex)?;
        Ok(())
    }

    /// Replaces the fill color and re-derives its channels. On error the
    /// previous color is kept.
    pub fn set_fill(&mut self, hex: &str) -> Result<(), ColorParseError> {
        self.fill = HexColor::parse(hex)?;
        Ok(())
    }
}
