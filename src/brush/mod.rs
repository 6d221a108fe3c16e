//! Brushes: per-mode geometry that turns pointer drags into drawing commands.
//!
//! Each brush reads the [`SketchState`], returns the commands to paint and
//! advances the anchor or text cursor as its mode requires. Brushes check
//! `pointer.is_down` themselves and return nothing while the pointer is up.

pub mod circles;
pub mod geometry;
pub mod grid;
pub mod measure;
pub mod squares;
pub mod text;

use rand::Rng;

use crate::draw::{DrawCommand, Point};
use crate::input::{SketchState, ShapeMode};

pub use measure::{TextMeasure, measure_with_fallback};

/// Runs the brush for the current shape mode.
pub fn render(
    sketch: &mut SketchState,
    measure: &dyn TextMeasure,
    rng: &mut impl Rng,
) -> Vec<DrawCommand> {
    match sketch.options.shape {
        ShapeMode::Squares => squares::render(sketch),
        ShapeMode::Circles => circles::render(sketch, rng),
        ShapeMode::Grid => grid::render(sketch, rng),
        ShapeMode::Text => text::render(sketch, measure),
    }
}

/// Records the new pointer position, then runs the active brush.
pub fn on_pointer_move(
    sketch: &mut SketchState,
    point: Point,
    measure: &dyn TextMeasure,
    rng: &mut impl Rng,
) -> Vec<DrawCommand> {
    sketch.pointer.x = point.x;
    sketch.pointer.y = point.y;
    render(sketch, measure, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::FontDescriptor;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct FixedWidth;

    impl TextMeasure for FixedWidth {
        fn measure_text(&self, _text: &str, _size: f64, _font: &FontDescriptor) -> Option<f64> {
            Some(4.0)
        }
    }

    #[test]
    fn idle_moves_never_draw_in_any_mode() {
        let mut rng = StdRng::seed_from_u64(11);
        for mode in ShapeMode::ALL {
            let mut sketch = SketchState::default();
            sketch.options.shape = mode;
            for i in 0..20 {
                let point = Point::new(f64::from(i) * 37.0, f64::from(i) * 11.0);
                let commands = on_pointer_move(&mut sketch, point, &FixedWidth, &mut rng);
                assert!(commands.is_empty(), "{mode:?} drew while idle");
            }
            assert_eq!(sketch.anchor, Point::default());
            assert_eq!(sketch.cursor.letter_index, 0);
        }
    }

    #[test]
    fn move_updates_pointer_before_rendering() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut sketch = SketchState::default();
        sketch.pointer.is_down = true;
        let commands = on_pointer_move(&mut sketch, Point::new(10.0, 0.0), &FixedWidth, &mut rng);
        assert_eq!(commands.len(), 1);
        assert_eq!(sketch.pointer.position(), Point::new(10.0, 0.0));
        assert_eq!(sketch.anchor, Point::new(10.0, 0.0));
    }

    #[test]
    fn dispatch_follows_shape_mode() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut sketch = SketchState::default();
        sketch.options.shape = ShapeMode::Grid;
        sketch.pointer.is_down = true;
        let commands = on_pointer_move(&mut sketch, Point::new(40.0, 60.0), &FixedWidth, &mut rng);
        assert_eq!(commands.len(), grid::CURVES_PER_MOVE);

        sketch.options.shape = ShapeMode::Text;
        let commands = on_pointer_move(&mut sketch, Point::new(40.0, 60.0), &FixedWidth, &mut rng);
        assert!(matches!(commands.as_slice(), [DrawCommand::Glyph { .. }]));
    }
}
