mod actions;
mod core;
mod mouse;
mod sketch;
#[cfg(test)]
mod tests;

pub use core::{CanvasAction, InputState};
pub use sketch::{
    DEFAULT_MIN_FONT_SIZE, DEFAULT_PHRASE, PointerState, SketchState, TextCursor,
};
