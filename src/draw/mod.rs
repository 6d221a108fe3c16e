//! Rendering primitives and the raster canvas (Cairo-based).
//!
//! This module defines the drawing side of the application:
//! - [`Color`]: RGBA color representation, hex parsing and palette constants
//! - [`DrawCommand`]: paint operations produced by the brushes
//! - [`Canvas`]: the persistent off-screen surface strokes accumulate on
//! - Rendering functions that execute commands on a Cairo context

pub mod canvas;
pub mod color;
pub mod command;
pub mod font;
pub mod render;

// Re-export commonly used types at module level
pub use canvas::{Canvas, CanvasError, png_data_url};
pub use color::{Color, ColorParseError};
pub use command::{DrawCommand, PathSegment, Point, Stroke};
pub use font::FontDescriptor;
pub use render::{render_background, render_commands};
