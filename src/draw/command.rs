//! Drawing commands produced by the brushes and executed against a surface.
//!
//! Brushes never touch Cairo directly. They describe what to paint as a list
//! of [`DrawCommand`]s, which keeps their geometry testable without a real
//! surface; [`crate::draw::render`] replays the list on a Cairo context.

use super::color::Color;
use super::font::FontDescriptor;

/// A point in surface coordinates (pixels, y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// One element of a path under construction.
#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment {
    /// Start a new sub-path without drawing
    MoveTo(Point),
    /// Straight line from the current point
    LineTo(Point),
    /// Quadratic Bézier from the current point through `ctrl` to `to`
    QuadTo { ctrl: Point, to: Point },
    /// Circular arc around `center`, angles in radians
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

/// Stroke styling for a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// A single paint operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Build `segments` into a path, then stroke it and/or fill it.
    ///
    /// When both are present the stroke is painted first and the fill second,
    /// so the fill covers the inner half of the outline.
    Path {
        segments: Vec<PathSegment>,
        stroke: Option<Stroke>,
        fill: Option<Color>,
    },
    /// A run of text whose baseline starts at `origin`, rotated by `angle`
    /// radians around that origin.
    Glyph {
        text: String,
        origin: Point,
        angle: f64,
        size: f64,
        font: FontDescriptor,
        color: Color,
    },
}

impl DrawCommand {
    /// Convenience constructor for a stroke-only path.
    pub fn stroked(segments: Vec<PathSegment>, stroke: Stroke) -> Self {
        Self::Path {
            segments,
            stroke: Some(stroke),
            fill: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn point_arithmetic() {
        let p = Point::new(1.0, 2.0) + Point::new(3.0, 4.0);
        assert_eq!(p, Point::new(4.0, 6.0));
        assert_eq!(p - Point::new(4.0, 6.0), Point::default());
    }
}
