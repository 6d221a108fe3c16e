// Requests keyboard and pointer devices as the seat advertises them.
use log::{debug, info, warn};
use smithay_client_toolkit::seat::{Capability, SeatHandler, SeatState};
use wayland_client::{Connection, QueueHandle, protocol::wl_seat};

use super::super::state::WaylandState;

impl SeatHandler for WaylandState {
    fn seat_state(&mut self) -> &mut SeatState {
        &mut self.seat_state
    }

    fn new_seat(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _seat: wl_seat::WlSeat) {
        debug!("New seat available");
    }

    fn new_capability(
        &mut self,
        _conn: &Connection,
        qh: &QueueHandle<Self>,
        seat: wl_seat::WlSeat,
        capability: Capability,
    ) {
        match capability {
            Capability::Keyboard => match self.seat_state.get_keyboard(qh, &seat, None) {
                Ok(_) => info!("Keyboard attached"),
                Err(err) => warn!("Failed to get keyboard: {}", err),
            },
            Capability::Pointer => match self.seat_state.get_pointer(qh, &seat) {
                Ok(_) => info!("Pointer attached"),
                Err(err) => warn!("Failed to get pointer: {}", err),
            },
            _ => debug!("Ignoring seat capability {:?}", capability),
        }
    }

    fn remove_capability(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _seat: wl_seat::WlSeat,
        capability: Capability,
    ) {
        if capability == Capability::Pointer {
            info!("Pointer removed; ending any drag");
            self.input_state.on_pointer_leave();
        } else {
            info!("Seat capability removed: {:?}", capability);
        }
    }

    fn remove_seat(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _seat: wl_seat::WlSeat) {
        debug!("Seat removed");
    }
}
