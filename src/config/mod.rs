//! Configuration file support for doodlepad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/doodlepad/config.toml`. Settings include the starting options,
//! the text brush phrase and font, export destination, and UI preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ClipboardMode, StatusPosition};
pub use types::{ExportConfig, OptionsConfig, PerformanceConfig, TextConfig, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::draw::FontDescriptor;
use crate::input::{Options, SketchState};
use crate::util::resolve_color_spec;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [options]
/// background_color = "#fdf6e3"
/// fill_color = "blue"
/// shape = "circles"
///
/// [text]
/// phrase = "sail to distant shores"
/// min_font_size = 5.0
///
/// [export]
/// directory = "~/Pictures/doodles"
/// filename_template = "canvas_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting background, fill color and shape mode
    #[serde(default)]
    pub options: OptionsConfig,

    /// Text brush phrase and font
    #[serde(default)]
    pub text: TextConfig,

    /// Image export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value, or replaced by
    /// their default, and a warning is logged.
    ///
    /// Validated ranges:
    /// - `background_color`, `fill_color`: `#rrggbb` or palette name
    /// - `min_font_size`: 1.0 - 200.0
    /// - `status_bar_font_size`: 8.0 - 48.0
    /// - `buffer_count`: 2 - 4
    pub fn validate_and_clamp(&mut self) {
        let defaults = OptionsConfig::default();

        match resolve_color_spec(&self.options.background_color) {
            Ok(hex) => self.options.background_color = hex,
            Err(err) => {
                warn!(
                    "Invalid background_color '{}' ({err}), falling back to {}",
                    self.options.background_color, defaults.background_color
                );
                self.options.background_color = defaults.background_color;
            }
        }

        match resolve_color_spec(&self.options.fill_color) {
            Ok(hex) => self.options.fill_color = hex,
            Err(err) => {
                warn!(
                    "Invalid fill_color '{}' ({err}), falling back to {}",
                    self.options.fill_color, defaults.fill_color
                );
                self.options.fill_color = defaults.fill_color;
            }
        }

        // Min font size: 1.0 - 200.0
        if !(1.0..=200.0).contains(&self.text.min_font_size) {
            warn!(
                "Invalid min_font_size {:.1}, clamping to 1.0-200.0 range",
                self.text.min_font_size
            );
            self.text.min_font_size = if self.text.min_font_size.is_nan() {
                1.0
            } else {
                self.text.min_font_size.clamp(1.0, 200.0)
            };
        }

        if self.text.phrase.is_empty() {
            warn!("Empty text phrase, using the default phrase");
            self.text.phrase = TextConfig::default().phrase;
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.text.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .text
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.text.font_weight
            );
            self.text.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.text.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty export filename_template, falling back to 'my-canvas'");
            self.export.filename_template = ExportConfig::default().filename_template;
        }

        // Status bar font size: 8.0 - 48.0
        if !(8.0..=48.0).contains(&self.ui.status_bar_font_size) {
            warn!(
                "Invalid status_bar_font_size {:.1}, clamping to 8.0-48.0 range",
                self.ui.status_bar_font_size
            );
            self.ui.status_bar_font_size = if self.ui.status_bar_font_size.is_nan() {
                UiConfig::default().status_bar_font_size
            } else {
                self.ui.status_bar_font_size.clamp(8.0, 48.0)
            };
        }

        // Buffer count: 2 - 4
        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/doodlepad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("doodlepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from a specific file, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Font descriptor for the text brush.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.text.font_family.clone(),
            self.text.font_weight.clone(),
            self.text.font_style.clone(),
        )
    }

    /// Builds the starting drawing options.
    ///
    /// Colors that fail to parse (only possible when `validate_and_clamp` was
    /// skipped) keep the built-in defaults.
    pub fn initial_options(&self) -> Options {
        let mut options = Options::default();
        if let Err(err) = options.set_background(&self.options.background_color) {
            warn!("Keeping default background: {err}");
        }
        if let Err(err) = options.set_fill(&self.options.fill_color) {
            warn!("Keeping default fill: {err}");
        }
        options.shape = self.options.shape;
        options
    }

    /// Builds the initial sketch state from these settings.
    pub fn sketch_state(&self) -> SketchState {
        SketchState::new(
            self.initial_options(),
            &self.text.phrase,
            self.text.min_font_size,
            self.font(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ShapeMode;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.options.background_color, "#ffffff");
        assert_eq!(config.options.fill_color, "#000000");
        assert_eq!(config.options.shape, ShapeMode::Squares);
        assert_eq!(config.export.filename_template, "my-canvas");
        assert_eq!(config.text.font_family, "Georgia");
        assert_eq!(config.text.min_font_size, 5.0);
    }

    #[test]
    fn validate_resolves_names_and_rejects_bad_colors() {
        let mut config: Config = toml::from_str(
            r##"
            [options]
            background_color = "yellow"
            fill_color = "#12345"
            shape = "grid"
            "##,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.options.background_color, "#ffff00");
        assert_eq!(config.options.fill_color, "#000000");
        assert_eq!(config.options.shape, ShapeMode::Grid);
    }

    #[test]
    fn validate_clamps_numeric_ranges() {
        let mut config = Config::default();
        config.text.min_font_size = 0.0;
        config.ui.status_bar_font_size = 400.0;
        config.performance.buffer_count = 9;
        config.text.font_weight = "chunky".to_string();
        config.text.font_style = "wavy".to_string();
        config.validate_and_clamp();

        assert_eq!(config.text.min_font_size, 1.0);
        assert_eq!(config.ui.status_bar_font_size, 48.0);
        assert_eq!(config.performance.buffer_count, 4);
        assert_eq!(config.text.font_weight, "normal");
        assert_eq!(config.text.font_style, "normal");
    }

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.options.shape, ShapeMode::Squares);
    }

    #[test]
    fn load_from_reads_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[options]\nfill_color = \"red\"\nshape = \"text\"\n\n[text]\nphrase = \"hi\"\nmin_font_size = 999.0"
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.options.fill_color, "#ff0000");
        assert_eq!(config.text.min_font_size, 200.0);

        let sketch = config.sketch_state();
        assert_eq!(sketch.options.shape, ShapeMode::Text);
        assert_eq!(sketch.options.fill.rgb(), (255, 0, 0));
        assert_eq!(sketch.phrase_len(), 2);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[options\nshape = 1").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
