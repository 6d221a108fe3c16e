//! Shared geometry for the brushes.

use crate::draw::Point;

/// Side of the square cells the circle and grid brushes snap to.
pub const CELL_SIZE: f64 = 100.0;

/// Rotates a vector counter-clockwise (in y-up terms) by `angle` radians.
pub fn rotate(v: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

/// Center of the `cell`-sized cell containing `p`.
pub fn cell_center(p: Point, cell: f64) -> Point {
    Point::new(
        (p.x / cell).floor() * cell + cell / 2.0,
        (p.y / cell).floor() * cell + cell / 2.0,
    )
}

/// Grid intersection (multiple of `cell`) nearest to `p`.
///
/// Halves round away from zero on both axes.
pub fn nearest_intersection(p: Point, cell: f64) -> Point {
    Point::new((p.x / cell).round() * cell, (p.y / cell).round() * cell)
}
