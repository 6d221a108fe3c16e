//! Bursts of circles centered on the grid cell under the pointer.

use std::f64::consts::TAU;

use rand::Rng;

use crate::draw::{DrawCommand, PathSegment, Stroke};
use crate::input::SketchState;

use super::geometry::{CELL_SIZE, cell_center};

/// Exclusive upper bound of the random step count.
pub const MAX_STEPS: u32 = 10;

const ALPHA: f64 = 0.1;
const LINE_WIDTH: f64 = 1.0;

/// Draws a burst with a random step count in `0..MAX_STEPS`.
pub fn render(sketch: &mut SketchState, rng: &mut impl Rng) -> Vec<DrawCommand> {
    if !sketch.pointer.is_down {
        return Vec::new();
    }
    let steps = rng.random_range(0..MAX_STEPS);
    burst(sketch, steps)
}

/// Draws `steps` circles around the cell center and moves the anchor to the pointer.
///
/// Every circle uses the same radius, `(steps - 1) * d / steps` where `d` is
/// twice the drag distance, so the strokes stack on one ring. Zero steps draws
/// nothing but still moves the anchor.
pub fn burst(sketch: &mut SketchState, steps: u32) -> Vec<DrawCommand> {
    if !sketch.pointer.is_down {
        return Vec::new();
    }

    let pointer = sketch.pointer.position();
    let d = sketch.anchor.distance_to(pointer) * 2.0;
    let center = cell_center(pointer, CELL_SIZE);
    let stroke = Stroke {
        color: sketch.options.fill.rgba(ALPHA),
        width: LINE_WIDTH,
    };

    let commands = if steps == 0 {
        Vec::new()
    } else {
        let step = d / f64::from(steps);
        let radius = f64::from(steps - 1) * step;
        (0..steps)
            .map(|_| {
                DrawCommand::stroked(
                    vec![PathSegment::Arc {
                        center,
                        radius,
                        start_angle: 0.0,
                        end_angle: TAU,
                    }],
                    stroke,
                )
            })
            .collect()
    };

    sketch.anchor = pointer;
    commands
}
