//! Configuration type definitions.

use super::enums::{ClipboardMode, StatusPosition};
use crate::input::ShapeMode;
use crate::input::state::{DEFAULT_MIN_FONT_SIZE, DEFAULT_PHRASE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Starting drawing options.
///
/// Colors accept `#rrggbb` or a palette name (red, green, blue, yellow,
/// orange, pink, white, black). All three can be changed at runtime from the
/// keyboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OptionsConfig {
    /// Page color shown behind the drawing; also fills the square brush
    #[serde(default = "default_background_color")]
    pub background_color: String,

    /// Color every brush strokes with
    #[serde(default = "default_fill_color")]
    pub fill_color: String,

    /// Brush active at startup (squares, circles, grid, text)
    #[serde(default)]
    pub shape: ShapeMode,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            fill_color: default_fill_color(),
            shape: ShapeMode::default(),
        }
    }
}

/// Text brush settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Phrase laid out letter by letter; wraps around at the end
    #[serde(default = "default_phrase")]
    pub phrase: String,

    /// Font size in pixels for a zero-length drag (valid range: 1.0 - 200.0)
    #[serde(default = "default_min_font_size")]
    pub min_font_size: f64,

    /// Font family name (e.g., "Georgia", "Serif", "DejaVu Sans")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            phrase: default_phrase(),
            min_font_size: default_min_font_size(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exports are written to (supports `~/`)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// File name without extension; chrono format specifiers are expanded
    /// (e.g. "canvas_%Y-%m-%d_%H%M%S")
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Also put the export on the clipboard: "off", "png" or "data-url"
    #[serde(default)]
    pub clipboard: ClipboardMode,

    /// Flatten the image over the background color instead of keeping
    /// unpainted pixels transparent
    #[serde(default)]
    pub include_background: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: default_filename_template(),
            clipboard: ClipboardMode::Off,
            include_background: false,
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show the status bar with mode, colors and next letter
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar screen position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_bar_position: StatusPosition,

    /// Font size for status bar and help text (valid range: 8.0 - 48.0)
    #[serde(default = "default_status_font_size")]
    pub status_bar_font_size: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_bar_position: default_status_position(),
            status_bar_font_size: default_status_font_size(),
        }
    }
}

/// Performance tuning options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of shared-memory buffers (valid range: 2 - 4)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Wait for frame callbacks before rendering the next frame
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_background_color() -> String {
    "#ffffff".to_string()
}

fn default_fill_color() -> String {
    "#000000".to_string()
}

fn default_phrase() -> String {
    DEFAULT_PHRASE.to_string()
}

fn default_min_font_size() -> f64 {
    DEFAULT_MIN_FONT_SIZE
}

fn default_font_family() -> String {
    "Georgia".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_export_directory() -> String {
    "~/Pictures".to_string()
}

fn default_filename_template() -> String {
    "my-canvas".to_string()
}

fn default_show_status() -> bool {
    true
}

fn default_status_position() -> StatusPosition {
    StatusPosition::BottomLeft
}

fn default_status_font_size() -> f64 {
    16.0
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}
