//! Text width measurement capability provided by the drawing surface.

use log::debug;

use crate::draw::FontDescriptor;

/// Measures rendered text width in pixels.
///
/// Surfaces provide a primary measurement and may provide a legacy one. Either
/// may be unavailable (`None`), e.g. when no usable font is installed.
pub trait TextMeasure {
    /// Width of `text` at `size` pixels through the primary text engine.
    fn measure_text(&self, text: &str, size: f64, font: &FontDescriptor) -> Option<f64>;

    /// Width of `text` through an older, simpler text API.
    fn measure_text_legacy(&self, _text: &str, _size: f64, _font: &FontDescriptor) -> Option<f64> {
        None
    }
}

/// Measures with the primary engine, falling back to the legacy one.
///
/// Returns `None` when neither is available; callers treat that as "draw
/// nothing" rather than an error.
pub fn measure_with_fallback(
    measure: &dyn TextMeasure,
    text: &str,
    size: f64,
    font: &FontDescriptor,
) -> Option<f64> {
    measure.measure_text(text, size, font).or_else(|| {
        debug!("Primary text measurement unavailable for {:?}, trying legacy", text);
        measure.measure_text_legacy(text, size, font)
    })
}
