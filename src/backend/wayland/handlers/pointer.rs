// Feeds pointer events into the input state and paints whatever the brush produced.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::MouseButton;

use super::super::state::WaylandState;

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let (x, y) = event.position;
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({}, {})", x, y);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                    self.input_state.on_pointer_leave();
                }
                PointerEventKind::Motion { .. } => {
                    // Brushes measure text against the canvas; nothing to draw on before configure
                    if let Some(canvas) = self.canvas.as_ref() {
                        self.input_state.on_mouse_motion(x, y, canvas);
                    }
                }
                PointerEventKind::Press { button, .. } => {
                    debug!("Button {} pressed at ({}, {})", button, x, y);
                    if let Some(mb) = map_button(button) {
                        self.input_state.on_mouse_press(mb, x, y);
                    }
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);
                    if let Some(mb) = map_button(button) {
                        self.input_state.on_mouse_release(mb);
                    }
                }
                _ => {}
            }
        }

        self.flush_pending_commands();
    }
}
