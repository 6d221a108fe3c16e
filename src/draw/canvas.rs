//! The persistent raster canvas that brush strokes accumulate on.
//!
//! Drawing is immediate-mode: commands are painted once into an off-screen
//! ARGB32 surface and never replayed. The backend composites this surface over
//! the background color every frame, and exports encode it to PNG.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use log::{debug, info};
use thiserror::Error;

use super::color::Color;
use super::command::DrawCommand;
use super::font::FontDescriptor;
use super::render::{self, pango_font_description};
use crate::brush::TextMeasure;

/// Errors raised by canvas surface operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Canvas pixel data is still borrowed: {0}")]
    Borrowed(#[from] cairo::BorrowError),
}

/// Off-screen drawing surface plus its dimensions.
pub struct Canvas {
    surface: cairo::ImageSurface,
    width: u32,
    height: u32,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Canvas {
    /// Creates a blank (fully transparent) canvas.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let surface = create_surface(width, height)?;
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sets new dimensions. Like assigning a canvas element's size, this
    /// always discards the current pixels, even when the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        self.surface = create_surface(width, height)?;
        self.width = width;
        self.height = height;
        info!("Canvas reset to {}x{}", width, height);
        Ok(())
    }

    /// Resets the canvas to blank at its current size.
    pub fn clear(&mut self) -> Result<(), CanvasError> {
        self.resize(self.width, self.height)
    }

    /// Paints commands onto the canvas.
    pub fn draw(&mut self, commands: &[DrawCommand]) -> Result<(), CanvasError> {
        if commands.is_empty() {
            return Ok(());
        }

        debug!("Painting {} commands onto canvas", commands.len());
        let ctx = cairo::Context::new(&self.surface)?;
        render::render_commands(&ctx, commands);
        drop(ctx);
        self.surface.flush();
        Ok(())
    }

    /// Paints the canvas onto `ctx`, optionally over a solid background.
    pub fn composite(&self, ctx: &cairo::Context, background: Option<Color>) -> Result<(), CanvasError> {
        if let Some(color) = background {
            render::render_background(ctx, color);
        }
        ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
        ctx.paint()?;
        Ok(())
    }

    /// Encodes the canvas as PNG bytes.
    ///
    /// Without a background the PNG keeps transparent pixels wherever nothing
    /// was drawn; with one, the canvas is flattened over it first.
    pub fn encode_png(&self, background: Option<Color>) -> Result<Vec<u8>, CanvasError> {
        let mut bytes = Vec::new();
        match background {
            None => self.surface.write_to_png(&mut bytes)?,
            Some(color) => {
                let flattened = create_surface(self.width, self.height)?;
                let ctx = cairo::Context::new(&flattened)?;
                self.composite(&ctx, Some(color))?;
                drop(ctx);
                flattened.write_to_png(&mut bytes)?;
            }
        }
        Ok(bytes)
    }

    /// Encodes the canvas as a `data:image/png;base64,...` URL.
    pub fn to_data_url(&self, background: Option<Color>) -> Result<String, CanvasError> {
        Ok(png_data_url(&self.encode_png(background)?))
    }

    /// Returns true when every pixel is fully transparent black.
    pub fn is_blank(&mut self) -> Result<bool, CanvasError> {
        self.surface.flush();
        let data = self.surface.data()?;
        Ok(data.iter().all(|byte| *byte == 0))
    }

    /// Returns the premultiplied `(r, g, b, a)` of one pixel, or `None` when
    /// the coordinates fall outside the canvas.
    pub fn pixel(&mut self, x: u32, y: u32) -> Result<Option<(u8, u8, u8, u8)>, CanvasError> {
        if x >= self.width || y >= self.height {
            return Ok(None);
        }
        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes = [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]];
        // ARGB32 stores each pixel as a native-endian u32
        let argb = u32::from_ne_bytes(bytes);
        Ok(Some((
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )))
    }
}

impl TextMeasure for Canvas {
    /// Measures the logical advance of `text` through Pango.
    fn measure_text(&self, text: &str, size: f64, font: &FontDescriptor) -> Option<f64> {
        let ctx = cairo::Context::new(&self.surface).ok()?;
        let layout = pangocairo::functions::create_layout(&ctx);
        layout.set_font_description(Some(&pango_font_description(font, size)));
        layout.set_text(text);
        let (_ink, logical) = layout.extents();
        let width = f64::from(logical.width()) / f64::from(pango::SCALE);
        (width > 0.0).then_some(width)
    }

    /// Measures through Cairo's toy text API when Pango has no usable font.
    fn measure_text_legacy(&self, text: &str, size: f64, font: &FontDescriptor) -> Option<f64> {
        let ctx = cairo::Context::new(&self.surface).ok()?;
        ctx.select_font_face(&font.family, font.cairo_slant(), font.cairo_weight());
        ctx.set_font_size(size);
        ctx.text_extents(text).ok().map(|extents| extents.x_advance())
    }
}

/// Wraps encoded PNG bytes in a `data:image/png;base64,...` URL.
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

fn create_surface(width: u32, height: u32) -> Result<cairo::ImageSurface, CanvasError> {
    let width = width.min(i32::MAX as u32) as i32;
    let height = height.min(i32::MAX as u32) as i32;
    Ok(cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        width,
        height,
    )?)
}
