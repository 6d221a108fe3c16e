//! Input state: the sketch plus UI flags and work queued for the backend.

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::draw::DrawCommand;
use crate::input::ShapeMode;

use super::sketch::SketchState;

/// Canvas-level operations requested from the keyboard.
///
/// The input state cannot touch the canvas itself; the backend (or the replay
/// runner) drains these with [`InputState::take_pending_canvas_action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasAction {
    /// Reset the canvas to blank
    Clear,
    /// Save the canvas as an image
    Export,
}

/// Main input state for a drawing session.
///
/// Holds the [`SketchState`] the brushes read, the random source they draw
/// from and the UI flags toggled from the keyboard. Commands produced by the
/// brushes are queued until the backend paints them onto the canvas.
pub struct InputState {
    /// Options, pointer, anchor and text cursor
    pub sketch: SketchState,
    /// Whether user requested to exit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible (toggled with F10)
    pub show_help: bool,
    /// Whether the status bar is currently visible (toggled with F12)
    pub show_status_bar: bool,
    pub(super) rng: StdRng,
    /// Brush output not yet painted onto the canvas
    pending_commands: Vec<DrawCommand>,
    /// Pending canvas action (to be handled by the backend)
    pending_canvas_action: Option<CanvasAction>,
}

impl InputState {
    /// Creates a new InputState around an initial sketch.
    ///
    /// With a `seed` the brushes' random choices are reproducible; otherwise
    /// the generator is seeded from the OS.
    pub fn new(sketch: SketchState, seed: Option<u64>, show_status_bar: bool) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            sketch,
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            show_status_bar,
            rng,
            pending_commands: Vec::new(),
            pending_canvas_action: None,
        }
    }

    /// Takes the commands produced since the last call.
    pub fn take_pending_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.pending_commands)
    }

    pub(super) fn queue_commands(&mut self, commands: Vec<DrawCommand>) {
        if commands.is_empty() {
            return;
        }
        self.pending_commands.extend(commands);
        self.needs_redraw = true;
    }

    /// Takes and clears any pending canvas action.
    pub fn take_pending_canvas_action(&mut self) -> Option<CanvasAction> {
        self.pending_canvas_action.take()
    }

    /// Stores a canvas action for retrieval by the backend.
    pub fn request_canvas_action(&mut self, action: CanvasAction) {
        if action == CanvasAction::Clear {
            // Anything queued before a clear would be wiped anyway
            self.pending_commands.clear();
        }
        self.pending_canvas_action = Some(action);
        self.needs_redraw = true;
    }

    /// Switches the active brush.
    pub fn set_shape_mode(&mut self, mode: ShapeMode) {
        if self.sketch.options.shape != mode {
            self.sketch.options.shape = mode;
            self.needs_redraw = true;
            info!("Shape mode set to {}", mode.label());
        }
    }

    /// Sets the fill color from a hex string or palette name.
    ///
    /// Invalid input is logged and the previous color kept.
    pub fn set_fill_color(&mut self, spec: &str) {
        match crate::util::resolve_color_spec(spec)
            .and_then(|hex| self.sketch.options.set_fill(&hex))
        {
            Ok(()) => {
                self.needs_redraw = true;
                info!("Fill color set to {}", self.sketch.options.fill.hex());
            }
            Err(err) => log::warn!("Ignoring fill color {spec:?}: {err}"),
        }
    }

    /// Sets the background color from a hex string or palette name.
    ///
    /// Invalid input is logged and the previous color kept.
    pub fn set_background_color(&mut self, spec: &str) {
        match crate::util::resolve_color_spec(spec)
            .and_then(|hex| self.sketch.options.set_background(&hex))
        {
            Ok(()) => {
                self.needs_redraw = true;
                info!(
                    "Background color set to {}",
                    self.sketch.options.background.hex()
                );
            }
            Err(err) => log::warn!("Ignoring background color {spec:?}: {err}"),
        }
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_redraw = true;
    }

    /// Toggles the status bar.
    pub fn toggle_status_bar(&mut self) {
        self.show_status_bar = !self.show_status_bar;
        self.needs_redraw = true;
    }
}
