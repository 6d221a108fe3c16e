use log::info;

use crate::input::{ShapeMode, events::Key};
use crate::util;

use super::{CanvasAction, InputState};

impl InputState {
    /// Processes a key press event.
    ///
    /// - `1`-`4` select squares, circles, grid, text
    /// - palette letters (`r g b y o p w k`) set the fill color; the same
    ///   letters in uppercase set the background
    /// - `e`/`E` clears the canvas, `s`/`S` exports it
    /// - F10 toggles help, F12 the status bar, Escape exits
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Escape => {
                info!("Exit requested");
                self.should_exit = true;
            }
            Key::F10 => self.toggle_help(),
            Key::F12 => self.toggle_status_bar(),
            Key::Char(c) => self.on_char(c),
            Key::Unknown => {}
        }
    }

    fn on_char(&mut self, c: char) {
        if let Some(mode) = ShapeMode::from_digit(c) {
            self.set_shape_mode(mode);
            return;
        }

        match c {
            'e' | 'E' => {
                self.request_canvas_action(CanvasAction::Clear);
                return;
            }
            's' | 'S' => {
                self.request_canvas_action(CanvasAction::Export);
                return;
            }
            _ => {}
        }

        if let Some(color) = util::key_to_color(c) {
            let hex = color.to_hex();
            if c.is_ascii_uppercase() {
                self.set_background_color(&hex);
            } else {
                self.set_fill_color(&hex);
            }
        }
    }
}
