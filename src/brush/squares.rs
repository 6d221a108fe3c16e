//! Ribbon of rotated squares following the drag.

use crate::draw::{DrawCommand, PathSegment, Point, Stroke};
use crate::input::SketchState;

use super::geometry::rotate;

/// Rotation applied to the drag delta to get the ribbon's half-width vector.
pub const QUARTER_TURN: f64 = 1.57079633;

const LINE_WIDTH: f64 = 1.0;

/// Perpendicular half-width vector for a segment from `anchor` to `pointer`.
pub fn ribbon_offset(anchor: Point, pointer: Point) -> Point {
    rotate(pointer - anchor, QUARTER_TURN)
}

/// Corners of the quad for one segment, in drawing order.
pub fn quad_corners(anchor: Point, pointer: Point) -> [Point; 4] {
    let n = ribbon_offset(anchor, pointer);
    [anchor - n, anchor + n, pointer + n, pointer - n]
}

/// Draws one quad from the anchor to the pointer, then moves the anchor to the pointer.
pub fn render(sketch: &mut SketchState) -> Vec<DrawCommand> {
    if !sketch.pointer.is_down {
        return Vec::new();
    }

    let pointer = sketch.pointer.position();
    let [a, b, c, d] = quad_corners(sketch.anchor, pointer);

    let command = DrawCommand::Path {
        segments: vec![
            PathSegment::MoveTo(a),
            PathSegment::LineTo(b),
            PathSegment::LineTo(c),
            PathSegment::LineTo(d),
            PathSegment::LineTo(a),
        ],
        stroke: Some(Stroke {
            color: sketch.options.fill.color(),
            width: LINE_WIDTH,
        }),
        fill: Some(sketch.options.background.color()),
    };

    sketch.anchor = pointer;
    vec![command]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    fn drawing_from(anchor: Point) -> SketchState {
        let mut sketch = SketchState::default();
        sketch.anchor = anchor;
        sketch.pointer.is_down = true;
        sketch
    }

    #[test]
    fn offset_is_quarter_turn_of_delta() {
        let n = ribbon_offset(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!(close(n, Point::new(0.0, 10.0)), "got {n:?}");
    }

    #[test]
    fn quad_spans_the_drag() {
        let corners = quad_corners(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let expected = [
            Point::new(0.0, -10.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, -10.0),
        ];
        for (got, want) in corners.iter().zip(expected.iter()) {
            assert!(close(*got, *want), "got {got:?}, want {want:?}");
        }
    }

    #[test]
    fn strokes_with_fill_and_fills_with_background() {
        let mut sketch = drawing_from(Point::new(0.0, 0.0));
        sketch.options.set_fill("#ff0000").unwrap();
        sketch.options.set_background("#00ff00").unwrap();
        sketch.pointer.x = 10.0;

        let commands = render(&mut sketch);
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            DrawCommand::Path {
                segments,
                stroke,
                fill,
            } => {
                assert_eq!(segments.len(), 5);
                let PathSegment::MoveTo(start) = segments[0] else {
                    panic!("path should start with a move");
                };
                assert_eq!(segments[4], PathSegment::LineTo(start));
                let stroke = stroke.expect("stroke");
                assert_eq!(stroke.color, Color::from_rgb8(255, 0, 0));
                assert_eq!(stroke.width, 1.0);
                assert_eq!(*fill, Some(Color::from_rgb8(0, 255, 0)));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn anchor_follows_pointer() {
        let mut sketch = drawing_from(Point::new(5.0, 5.0));
        sketch.pointer.x = 20.0;
        sketch.pointer.y = 30.0;
        render(&mut sketch);
        assert_eq!(sketch.anchor, Point::new(20.0, 30.0));
    }

    #[test]
    fn idle_pointer_draws_nothing() {
        let mut sketch = SketchState::default();
        sketch.pointer.x = 50.0;
        assert!(render(&mut sketch).is_empty());
        assert_eq!(sketch.anchor, Point::default());
    }
}
