//! Letters of a phrase laid along the drag, sized by drag speed.

use log::debug;

use crate::draw::{DrawCommand, Point};
use crate::input::SketchState;

use super::measure::{TextMeasure, measure_with_fallback};

/// Places the next letter at the anchor once the drag is longer than the
/// letter is wide.
///
/// The font grows with the drag distance (`min_font_size + d / 2`). On
/// placement the letter is rotated to the drag direction, the cursor moves to
/// the next letter and the anchor advances by the letter's width along the
/// drag, not to the pointer.
pub fn render(sketch: &mut SketchState, measure: &dyn TextMeasure) -> Vec<DrawCommand> {
    if !sketch.pointer.is_down {
        return Vec::new();
    }

    let anchor = sketch.anchor;
    let pointer = sketch.pointer.position();
    let distance = anchor.distance_to(pointer);
    let size = sketch.cursor.min_font_size + distance / 2.0;

    let letter = sketch.current_letter();
    let mut buf = [0u8; 4];
    let text: &str = letter.encode_utf8(&mut buf);

    let Some(step) = measure_with_fallback(measure, text, size, &sketch.font) else {
        debug!("No text measurement available; skipping letter {:?}", letter);
        return Vec::new();
    };

    if distance <= step {
        return Vec::new();
    }

    let angle = (pointer.y - anchor.y).atan2(pointer.x - anchor.x);
    let glyph = DrawCommand::Glyph {
        text: text.to_string(),
        origin: anchor,
        angle,
        size,
        font: sketch.font.clone(),
        color: sketch.options.fill.color(),
    };

    sketch.advance_letter();
    sketch.anchor = Point::new(anchor.x + angle.cos() * step, anchor.y + angle.sin() * step);

    vec![glyph]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::FontDescriptor;
    use crate::input::options::Options;
    use crate::input::state::DEFAULT_MIN_FONT_SIZE;

    /// Every letter is `width` pixels wide regardless of size.
    struct FixedWidth(f64);

    impl TextMeasure for FixedWidth {
        fn measure_text(&self, _text: &str, _size: f64, _font: &FontDescriptor) -> Option<f64> {
            Some(self.0)
        }
    }

    /// Width proportional to size, available only through the legacy path.
    struct LegacyHalfSize;

    impl TextMeasure for LegacyHalfSize {
        fn measure_text(&self, _text: &str, _size: f64, _font: &FontDescriptor) -> Option<f64> {
            None
        }

        fn measure_text_legacy(&self, _text: &str, size: f64, _font: &FontDescriptor) -> Option<f64> {
            Some(size / 2.0)
        }
    }

    struct Unmeasurable;

    impl TextMeasure for Unmeasurable {
        fn measure_text(&self, _text: &str, _size: f64, _font: &FontDescriptor) -> Option<f64> {
            None
        }
    }

    fn drawing(phrase: &str, pointer: Point) -> SketchState {
        let mut sketch = SketchState::new(
            Options::default(),
            phrase,
            DEFAULT_MIN_FONT_SIZE,
            FontDescriptor::default(),
        );
        sketch.pointer.x = pointer.x;
        sketch.pointer.y = pointer.y;
        sketch.pointer.is_down = true;
        sketch
    }

    #[test]
    fn short_drag_places_nothing() {
        let mut sketch = drawing("ab", Point::new(8.0, 0.0));
        assert!(render(&mut sketch, &FixedWidth(8.0)).is_empty());
        assert_eq!(sketch.cursor.letter_index, 0);
        assert_eq!(sketch.anchor, Point::default());
    }

    #[test]
    fn long_drag_places_letter_and_advances_by_width() {
        let mut sketch = drawing("ab", Point::new(0.0, 20.0));
        let commands = render(&mut sketch, &FixedWidth(8.0));
        assert_eq!(commands.len(), 1);

        let DrawCommand::Glyph {
            text,
            origin,
            angle,
            size,
            font,
            ..
        } = &commands[0]
        else {
            panic!("expected a glyph");
        };
        assert_eq!(text, "a");
        assert_eq!(*origin, Point::default());
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(*size, DEFAULT_MIN_FONT_SIZE + 10.0);
        assert_eq!(font.family, "Georgia");

        assert_eq!(sketch.cursor.letter_index, 1);
        assert!(sketch.anchor.x.abs() < 1e-9);
        assert!((sketch.anchor.y - 8.0).abs() < 1e-9);
    }

    #[test]
    fn cursor_wraps_after_last_letter() {
        let mut sketch = drawing("ab", Point::new(100.0, 0.0));
        let measure = FixedWidth(1.0);
        let placed: Vec<String> = (0..5)
            .flat_map(|_| render(&mut sketch, &measure))
            .map(|command| match command {
                DrawCommand::Glyph { text, .. } => text,
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert_eq!(placed, vec!["a", "b", "a", "b", "a"]);
        assert_eq!(sketch.cursor.letter_index, 1);
    }

    #[test]
    fn legacy_measurement_is_used_as_fallback() {
        // d = 30, size = 5 + 15 = 20, legacy width = 10
        let mut sketch = drawing("x", Point::new(30.0, 0.0));
        let commands = render(&mut sketch, &LegacyHalfSize);
        assert_eq!(commands.len(), 1);
        assert!((sketch.anchor.x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn missing_measurement_is_a_no_op() {
        let mut sketch = drawing("x", Point::new(300.0, 0.0));
        assert!(render(&mut sketch, &Unmeasurable).is_empty());
        assert_eq!(sketch.cursor.letter_index, 0);
    }

    #[test]
    fn idle_pointer_draws_nothing() {
        let mut sketch = drawing("x", Point::new(300.0, 0.0));
        sketch.pointer.is_down = false;
        assert!(render(&mut sketch, &FixedWidth(1.0)).is_empty());
    }
}
