// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; owns the persistent canvas and paints it into shm buffers.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell},
    shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{
    config::Config,
    draw::Canvas,
    export::{self, ExportSettings},
    input::{CanvasAction, InputState},
};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,
    pub(super) export_settings: ExportSettings,

    // Input state
    pub(super) input_state: InputState,

    // Created on the first configure, recreated whenever the size changes
    pub(super) canvas: Option<Canvas>,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
        export_settings: ExportSettings,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            export_settings,
            input_state,
            canvas: None,
        }
    }

    /// Matches the canvas to the configured surface size.
    ///
    /// A new size always yields a blank canvas. Returns true when the canvas
    /// was (re)created.
    pub(super) fn sync_canvas_size(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }

        let result = match self.canvas.as_mut() {
            Some(canvas) if canvas.width() == width && canvas.height() == height => return false,
            Some(canvas) => canvas.resize(width, height),
            None => Canvas::new(width, height).map(|canvas| {
                info!("Created {}x{} canvas", width, height);
                self.canvas = Some(canvas);
            }),
        };

        match result {
            Ok(()) => {
                self.input_state.needs_redraw = true;
                true
            }
            Err(err) => {
                warn!("Failed to size canvas to {}x{}: {}", width, height, err);
                false
            }
        }
    }

    /// Paints queued brush output onto the canvas.
    pub(super) fn flush_pending_commands(&mut self) {
        let commands = self.input_state.take_pending_commands();
        if commands.is_empty() {
            return;
        }
        let Some(canvas) = self.canvas.as_mut() else {
            debug!("Dropping {} commands; no canvas yet", commands.len());
            return;
        };
        if let Err(err) = canvas.draw(&commands) {
            warn!("Failed to paint brush output: {}", err);
        }
    }

    /// Runs a clear or export requested from the keyboard.
    pub(super) fn handle_canvas_action(&mut self) {
        let Some(action) = self.input_state.take_pending_canvas_action() else {
            return;
        };
        let Some(canvas) = self.canvas.as_mut() else {
            warn!("Canvas action {:?} requested before the surface was configured", action);
            return;
        };

        match action {
            CanvasAction::Clear => {
                if let Err(err) = canvas.clear() {
                    warn!("Failed to clear canvas: {}", err);
                } else {
                    info!("Canvas cleared");
                }
            }
            CanvasAction::Export => {
                let background = self.input_state.sketch.options.background.color();
                if let Err(err) = export::export_canvas(canvas, background, &self.export_settings)
                {
                    warn!("Export failed: {}", err);
                }
            }
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, pixels) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            debug!("Requesting buffer from pool");
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: `pixels` is the SlotPool slice backing `buffer`, sized for
        // (width * 4) * height bytes in Argb8888, which matches Cairo's ARgb32
        // layout and stride. `cairo_surface` and `ctx` are dropped before the
        // buffer is attached, so Cairo never touches the memory after the
        // compositor takes it, and nothing else aliases the slice meanwhile.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                pixels.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        debug!("Clearing background");
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint().context("Failed to clear background")?;
        ctx.set_operator(cairo::Operator::Over);

        // Page color, then everything drawn so far
        let background = self.input_state.sketch.options.background.color();
        match self.canvas.as_ref() {
            Some(canvas) => canvas
                .composite(&ctx, Some(background))
                .context("Failed to composite canvas")?,
            None => crate::draw::render_background(&ctx, background),
        }

        if self.input_state.show_status_bar {
            crate::ui::render_status_bar(
                &ctx,
                &self.input_state,
                self.config.ui.status_bar_position,
                self.config.ui.status_bar_font_size,
                width,
                height,
            );
        }

        if self.input_state.show_help {
            crate::ui::render_help_overlay(&ctx, self.config.ui.status_bar_font_size, width, height);
        }

        debug!("Flushing Cairo surface");
        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        debug!("Attaching buffer and committing surface");
        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(
            0,
            0,
            width.min(i32::MAX as u32) as i32,
            height.min(i32::MAX as u32) as i32,
        );

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        } else {
            debug!("Skipping frame callback (vsync disabled - allows back-to-back renders)");
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}
