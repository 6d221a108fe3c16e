mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
