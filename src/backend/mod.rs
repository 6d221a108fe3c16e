use anyhow::Result;

pub mod wayland;

use crate::config::Config;
use crate::export::ExportSettings;
use crate::input::InputState;

/// Run the Wayland backend with its full event loop.
///
/// # Arguments
/// * `config` - Validated configuration (CLI overrides already applied)
/// * `input_state` - Starting sketch options and RNG
/// * `export_settings` - Where `s` writes the canvas
pub fn run_wayland(
    config: Config,
    input_state: InputState,
    export_settings: ExportSettings,
) -> Result<()> {
    wayland::WaylandBackend::new(config, input_state, export_settings).run()
}
