use crate::brush::{self, TextMeasure};
use crate::draw::Point;
use crate::input::events::MouseButton;

use super::InputState;

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// A left press starts a drag: the anchor is set to the press position and
    /// the pointer is marked down. Other buttons are ignored.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }
        let sketch = &mut self.sketch;
        sketch.anchor = Point::new(x, y);
        sketch.pointer.x = x;
        sketch.pointer.y = y;
        sketch.pointer.is_down = true;
    }

    /// Processes pointer motion.
    ///
    /// Runs the active brush and queues whatever it draws. `measure` is the
    /// surface the text brush measures glyphs against.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64, measure: &dyn TextMeasure) {
        let commands =
            brush::on_pointer_move(&mut self.sketch, Point::new(x, y), measure, &mut self.rng);
        self.queue_commands(commands);
    }

    /// Processes mouse button release events; a left release ends the drag.
    pub fn on_mouse_release(&mut self, button: MouseButton) {
        if button == MouseButton::Left {
            self.sketch.pointer.is_down = false;
        }
    }

    /// The pointer left the surface; ends any drag in progress.
    pub fn on_pointer_leave(&mut self) {
        self.sketch.pointer.is_down = false;
    }
}
