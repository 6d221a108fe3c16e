//! Dense loops of quadratic curves anchored on grid intersections.

use rand::Rng;

use crate::draw::{DrawCommand, PathSegment, Point, Stroke};
use crate::input::SketchState;

use super::geometry::{CELL_SIZE, nearest_intersection};

/// Curves drawn per pointer move.
pub const CURVES_PER_MOVE: usize = 50;

const ALPHA: f64 = 0.01;
const LINE_WIDTH: f64 = 1.0;
const JITTER_SCALE: f64 = 10.0;

/// Draws [`CURVES_PER_MOVE`] closed quadratic loops from the nearest
/// intersection back to itself, each through a randomly jittered control point.
///
/// The anchor is left untouched.
pub fn render(sketch: &SketchState, rng: &mut impl Rng) -> Vec<DrawCommand> {
    if !sketch.pointer.is_down {
        return Vec::new();
    }

    let pointer = sketch.pointer.position();
    let corner = nearest_intersection(pointer, CELL_SIZE);
    let dx = (corner.x - pointer.x) * JITTER_SCALE;
    let dy = (corner.y - pointer.y) * JITTER_SCALE;
    let stroke = Stroke {
        color: sketch.options.fill.rgba(ALPHA),
        width: LINE_WIDTH,
    };

    (0..CURVES_PER_MOVE)
        .map(|_| {
            let ctrl_x = pointer.x + rng.random::<f64>() * dx;
            let ctrl_y = pointer.y + rng.random::<f64>() * dy;
            DrawCommand::stroked(
                vec![
                    PathSegment::MoveTo(corner),
                    PathSegment::QuadTo {
                        ctrl: Point::new(ctrl_x, ctrl_y),
                        to: corner,
                    },
                ],
                stroke,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn drawing_at(pointer: Point) -> SketchState {
        let mut sketch = SketchState::default();
        sketch.pointer.x = pointer.x;
        sketch.pointer.y = pointer.y;
        sketch.pointer.is_down = true;
        sketch
    }

    #[test]
    fn fifty_loops_on_the_snapped_corner() {
        let sketch = drawing_at(Point::new(130.0, 260.0));
        let mut rng = StdRng::seed_from_u64(1);
        let commands = render(&sketch, &mut rng);
        assert_eq!(commands.len(), CURVES_PER_MOVE);

        let corner = Point::new(100.0, 300.0);
        for command in &commands {
            let DrawCommand::Path {
                segments,
                stroke: Some(_),
                fill: None,
            } = command
            else {
                panic!("expected a stroked path");
            };
            assert_eq!(segments[0], PathSegment::MoveTo(corner));
            let PathSegment::QuadTo { ctrl, to } = segments[1] else {
                panic!("expected a quadratic curve");
            };
            assert_eq!(to, corner);
            // dx = -300, dy = 400: control points stay between the pointer and the jitter bound
            assert!(ctrl.x <= 130.0 && ctrl.x >= 130.0 - 300.0);
            assert!(ctrl.y >= 260.0 && ctrl.y <= 260.0 + 400.0);
        }
    }

    #[test]
    fn anchor_is_not_moved() {
        let mut sketch = drawing_at(Point::new(10.0, 10.0));
        sketch.anchor = Point::new(3.0, 4.0);
        let mut rng = StdRng::seed_from_u64(2);
        render(&sketch, &mut rng);
        assert_eq!(sketch.anchor, Point::new(3.0, 4.0));
    }

    #[test]
    fn pointer_on_intersection_collapses_control_points() {
        let sketch = drawing_at(Point::new(200.0, 100.0));
        let mut rng = StdRng::seed_from_u64(3);
        for command in render(&sketch, &mut rng) {
            let DrawCommand::Path { segments, .. } = command else {
                panic!("expected a path");
            };
            assert_eq!(
                segments[1],
                PathSegment::QuadTo {
                    ctrl: Point::new(200.0, 100.0),
                    to: Point::new(200.0, 100.0),
                }
            );
        }
    }

    #[test]
    fn idle_pointer_draws_nothing() {
        let mut sketch = drawing_at(Point::new(10.0, 10.0));
        sketch.pointer.is_down = false;
        let mut rng = StdRng::seed_from_u64(4);
        assert!(render(&sketch, &mut rng).is_empty());
    }
}
