//! Canvas export for doodlepad.
//!
//! This module turns the canvas into a PNG and delivers it:
//! - File saving with a chrono filename template (default `my-canvas.png`)
//! - Clipboard integration
//! - `data:` URLs for scripting

pub mod clipboard;
pub mod file;

use std::path::PathBuf;

use log::{info, warn};
use thiserror::Error;

use crate::config::{ClipboardMode, ExportConfig};
use crate::draw::{Canvas, CanvasError, Color, png_data_url};

use clipboard::ClipboardPayload;

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode canvas: {0}")]
    Encode(#[from] CanvasError),

    #[error("Failed to save image: {0}")]
    Save(#[from] std::io::Error),

    #[error("Clipboard operation failed: {0}")]
    Clipboard(String),
}

/// Where and how exports are written.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Directory to save images to.
    pub directory: PathBuf,
    /// Filename template (supports chrono format specifiers), no extension.
    pub filename_template: String,
    /// What, if anything, to put on the clipboard.
    pub clipboard: ClipboardMode,
    /// Flatten over the background color before encoding.
    pub include_background: bool,
}

impl ExportSettings {
    /// Builds settings from the config section, expanding `~`.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            directory: file::expand_tilde(&config.directory),
            filename_template: config.filename_template.clone(),
            clipboard: config.clipboard,
            include_background: config.include_background,
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Path the PNG was written to.
    pub saved_path: PathBuf,
    /// Whether the image was copied to the clipboard.
    pub copied_to_clipboard: bool,
}

/// Encodes the canvas and writes it according to `settings`.
///
/// `background` is the current page color; it is only painted into the image
/// when `include_background` is set. A failed clipboard copy is logged and
/// reported through [`ExportResult::copied_to_clipboard`] without failing the
/// export.
pub fn export_canvas(
    canvas: &Canvas,
    background: Color,
    settings: &ExportSettings,
) -> Result<ExportResult, ExportError> {
    let flatten = settings.include_background.then_some(background);
    let png = canvas.encode_png(flatten)?;

    let saved_path = file::save_image(&png, &settings.directory, &settings.filename_template)?;

    let copied_to_clipboard = match clipboard_payload(settings.clipboard, png) {
        None => false,
        Some(payload) => match clipboard::copy_to_clipboard(&payload) {
            Ok(()) => true,
            Err(err) => {
                warn!("Export saved but clipboard copy failed: {}", err);
                false
            }
        },
    };

    info!(
        "Exported canvas to {}{}",
        saved_path.display(),
        if copied_to_clipboard {
            " (copied to clipboard)"
        } else {
            ""
        }
    );

    Ok(ExportResult {
        saved_path,
        copied_to_clipboard,
    })
}

/// Builds the clipboard payload for an encoded export, if the mode wants one.
pub fn clipboard_payload(mode: ClipboardMode, png: Vec<u8>) -> Option<ClipboardPayload> {
    match mode {
        ClipboardMode::Off => None,
        ClipboardMode::Png => Some(ClipboardPayload::Png(png)),
        ClipboardMode::DataUrl => Some(ClipboardPayload::DataUrl(png_data_url(&png))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawCommand, PathSegment, Point};

    fn settings(dir: &std::path::Path, include_background: bool) -> ExportSettings {
        ExportSettings {
            directory: dir.to_path_buf(),
            filename_template: "my-canvas".to_string(),
            clipboard: ClipboardMode::Off,
            include_background,
        }
    }

    #[test]
    fn export_writes_named_png() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = Canvas::new(16, 16).unwrap();
        let result = export_canvas(&canvas, Color::new(1.0, 1.0, 1.0, 1.0), &settings(dir.path(), false))
            .unwrap();

        assert_eq!(result.saved_path.file_name().unwrap(), "my-canvas.png");
        assert!(!result.copied_to_clipboard);
        let bytes = std::fs::read(&result.saved_path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn clipboard_payload_follows_mode() {
        let canvas = Canvas::new(4, 4).unwrap();
        let png = canvas.encode_png(None).unwrap();

        assert_eq!(clipboard_payload(ClipboardMode::Off, png.clone()), None);
        assert_eq!(
            clipboard_payload(ClipboardMode::Png, png.clone()),
            Some(ClipboardPayload::Png(png.clone()))
        );
        assert_eq!(
            clipboard_payload(ClipboardMode::DataUrl, png),
            Some(ClipboardPayload::DataUrl(canvas.to_data_url(None).unwrap()))
        );
    }

    #[test]
    fn include_background_flattens_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas
            .draw(&[DrawCommand::Path {
                segments: vec![
                    PathSegment::MoveTo(Point::new(0.0, 0.0)),
                    PathSegment::LineTo(Point::new(2.0, 0.0)),
                    PathSegment::LineTo(Point::new(2.0, 2.0)),
                ],
                stroke: None,
                fill: Some(Color::new(0.0, 0.0, 0.0, 1.0)),
            }])
            .unwrap();
        let background = Color::new(0.0, 0.0, 1.0, 1.0);

        let transparent = export_canvas(&canvas, background, &settings(dir.path(), false)).unwrap();
        let transparent_bytes = std::fs::read(&transparent.saved_path).unwrap();

        let flattened = export_canvas(&canvas, background, &settings(dir.path(), true)).unwrap();
        let flattened_bytes = std::fs::read(&flattened.saved_path).unwrap();

        assert_ne!(transparent_bytes, flattened_bytes);
        assert_eq!(transparent_bytes, canvas.encode_png(None).unwrap());
    }
}
