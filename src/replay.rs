//! Headless replay of scripted pointer and option events.
//!
//! A replay script is a TOML file describing a canvas size and a list of
//! events. The events drive the same [`InputState`] and [`Canvas`] the
//! interactive backend uses, so a script reproduces a drawing exactly when a
//! seed is given.
//!
//! ```toml
//! width = 400
//! height = 300
//! seed = 7
//!
//! [[events]]
//! kind = "shape"
//! mode = "circles"
//!
//! [[events]]
//! kind = "down"
//! x = 20
//! y = 20
//!
//! [[events]]
//! kind = "move"
//! x = 140
//! y = 90
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::draw::{Canvas, CanvasError};
use crate::export::{self, ExportError, ExportSettings};
use crate::input::{CanvasAction, InputState, MouseButton, ShapeMode, SketchState};

/// Errors raised while loading or running a replay script.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read replay script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid replay script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Canvas size must be non-zero, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Event {index} resizes the canvas to {width}x{height}; sizes must be non-zero")]
    InvalidResize { index: usize, width: u32, height: u32 },

    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// One scripted event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReplayEvent {
    /// Left button pressed at a position
    Down { x: f64, y: f64 },
    /// Pointer moved to a position
    Move { x: f64, y: f64 },
    /// Left button released
    Up,
    /// Pointer left the surface
    Leave,
    /// Shape mode changed
    Shape { mode: ShapeMode },
    /// Fill color changed (hex or palette name)
    Fill { color: String },
    /// Background color changed (hex or palette name)
    Background { color: String },
    /// Canvas cleared
    Clear,
    /// Surface resized (clears the canvas)
    Resize { width: u32, height: u32 },
    /// Canvas exported
    Export,
}

/// A parsed replay script.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    pub width: u32,
    pub height: u32,
    /// Seed for the brushes' random choices
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

impl ReplayScript {
    /// Parses a script from TOML text.
    ///
    /// The initial size and every `resize` event must be non-zero.
    pub fn parse(source: &str) -> Result<Self, ReplayError> {
        let script: ReplayScript = toml::from_str(source)?;
        if script.width == 0 || script.height == 0 {
            return Err(ReplayError::InvalidSize {
                width: script.width,
                height: script.height,
            });
        }
        for (index, event) in script.events.iter().enumerate() {
            if let ReplayEvent::Resize { width, height } = *event
                && (width == 0 || height == 0)
            {
                return Err(ReplayError::InvalidResize {
                    index,
                    width,
                    height,
                });
            }
        }
        Ok(script)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let source = fs::read_to_string(path).map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }
}

/// What a finished replay leaves behind.
#[derive(Debug)]
pub struct ReplayOutcome {
    /// The canvas as it stood after the last event
    pub canvas: Canvas,
    /// Final input state (options, anchor, text cursor)
    pub sketch: SketchState,
    /// Every file written, in order
    pub exports: Vec<PathBuf>,
}

/// Runs a script against a fresh canvas.
///
/// `seed` overrides the script's own seed. The canvas is exported once more
/// after the last event unless that event was itself an export.
pub fn run(
    script: &ReplayScript,
    sketch: SketchState,
    seed: Option<u64>,
    settings: &ExportSettings,
) -> Result<ReplayOutcome, ReplayError> {
    let mut canvas = Canvas::new(script.width, script.height)?;
    let mut input = InputState::new(sketch, seed.or(script.seed), false);
    let mut exports = Vec::new();

    info!(
        "Replaying {} events on a {}x{} canvas",
        script.events.len(),
        script.width,
        script.height
    );

    for event in &script.events {
        debug!("Replay event: {:?}", event);
        match event {
            ReplayEvent::Down { x, y } => input.on_mouse_press(MouseButton::Left, *x, *y),
            ReplayEvent::Move { x, y } => input.on_mouse_motion(*x, *y, &canvas),
            ReplayEvent::Up => input.on_mouse_release(MouseButton::Left),
            ReplayEvent::Leave => input.on_pointer_leave(),
            ReplayEvent::Shape { mode } => input.set_shape_mode(*mode),
            ReplayEvent::Fill { color } => input.set_fill_color(color),
            ReplayEvent::Background { color } => input.set_background_color(color),
            ReplayEvent::Clear => input.request_canvas_action(CanvasAction::Clear),
            ReplayEvent::Resize { width, height } => {
                canvas.resize(*width, *height)?;
            }
            ReplayEvent::Export => input.request_canvas_action(CanvasAction::Export),
        }

        canvas.draw(&input.take_pending_commands())?;

        match input.take_pending_canvas_action() {
            Some(CanvasAction::Clear) => canvas.clear()?,
            Some(CanvasAction::Export) => {
                let background = input.sketch.options.background.color();
                exports.push(export::export_canvas(&canvas, background, settings)?.saved_path);
            }
            None => {}
        }
    }

    if !matches!(script.events.last(), Some(ReplayEvent::Export)) {
        let background = input.sketch.options.background.color();
        exports.push(export::export_canvas(&canvas, background, settings)?.saved_path);
    }

    Ok(ReplayOutcome {
        canvas,
        sketch: input.sketch,
        exports,
    })
}
