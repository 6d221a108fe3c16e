//! Input handling and sketch state.
//!
//! This module translates backend keyboard and mouse events into brush calls.
//! It owns the drawing options, the pointer/anchor state the brushes advance,
//! and the UI flags toggled from the keyboard.

pub mod events;
pub mod options;
pub mod shape_mode;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use options::{HexColor, Options};
pub use shape_mode::ShapeMode;
pub use state::{CanvasAction, InputState, SketchState};
