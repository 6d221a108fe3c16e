//! Cairo-based execution of drawing commands.

use super::color::Color;
use super::command::{DrawCommand, PathSegment, Point, Stroke};
use super::font::FontDescriptor;

/// Paints the whole target with a solid background color.
///
/// Used when compositing the canvas for display (and for exports that ask to
/// include the background), never on the canvas itself: the canvas keeps
/// transparent pixels wherever nothing has been drawn.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the target as it was
}

/// Executes a list of drawing commands in order.
pub fn render_commands(ctx: &cairo::Context, commands: &[DrawCommand]) {
    for command in commands {
        render_command(ctx, command);
    }
}

/// Executes a single drawing command.
pub fn render_command(ctx: &cairo::Context, command: &DrawCommand) {
    match command {
        DrawCommand::Path {
            segments,
            stroke,
            fill,
        } => render_path(ctx, segments, *stroke, *fill),
        DrawCommand::Glyph {
            text,
            origin,
            angle,
            size,
            font,
            color,
        } => render_glyph(ctx, text, *origin, *angle, *size, font, *color),
    }
}

/// Builds a path from segments, then strokes and/or fills it.
fn render_path(
    ctx: &cairo::Context,
    segments: &[PathSegment],
    stroke: Option<Stroke>,
    fill: Option<Color>,
) {
    ctx.new_path();
    trace_segments(ctx, segments);

    match (stroke, fill) {
        (Some(stroke), Some(fill)) => {
            apply_stroke(ctx, stroke);
            let _ = ctx.stroke_preserve();
            ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
            let _ = ctx.fill();
        }
        (Some(stroke), None) => {
            apply_stroke(ctx, stroke);
            let _ = ctx.stroke();
        }
        (None, Some(fill)) => {
            ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
            let _ = ctx.fill();
        }
        (None, None) => ctx.new_path(),
    }
}

fn apply_stroke(ctx: &cairo::Context, stroke: Stroke) {
    let color = stroke.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(stroke.width);
}

/// Appends segments to the current Cairo path.
///
/// Cairo has no quadratic curves, so each one is raised to the equivalent
/// cubic: both cubic control points sit two thirds of the way from an end
/// point towards the quadratic control point.
fn trace_segments(ctx: &cairo::Context, segments: &[PathSegment]) {
    let mut current: Option<Point> = None;

    for segment in segments {
        match *segment {
            PathSegment::MoveTo(p) => {
                ctx.move_to(p.x, p.y);
                current = Some(p);
            }
            PathSegment::LineTo(p) => {
                ctx.line_to(p.x, p.y);
                current = Some(p);
            }
            PathSegment::QuadTo { ctrl, to } => {
                let start = match current {
                    Some(start) => start,
                    None => {
                        ctx.move_to(ctrl.x, ctrl.y);
                        ctrl
                    }
                };
                let (c1, c2) = quad_to_cubic(start, ctrl, to);
                ctx.curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
                current = Some(to);
            }
            PathSegment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                ctx.arc(center.x, center.y, radius, start_angle, end_angle);
                current = Some(Point::new(
                    center.x + radius * end_angle.cos(),
                    center.y + radius * end_angle.sin(),
                ));
            }
        }
    }
}

/// Returns the two cubic control points equivalent to a quadratic curve.
pub(crate) fn quad_to_cubic(start: Point, ctrl: Point, end: Point) -> (Point, Point) {
    let c1 = Point::new(
        start.x + 2.0 / 3.0 * (ctrl.x - start.x),
        start.y + 2.0 / 3.0 * (ctrl.y - start.y),
    );
    let c2 = Point::new(
        end.x + 2.0 / 3.0 * (ctrl.x - end.x),
        end.y + 2.0 / 3.0 * (ctrl.y - end.y),
    );
    (c1, c2)
}

/// Builds a Pango font description with an absolute pixel size.
pub(crate) fn pango_font_description(font: &FontDescriptor, size: f64) -> pango::FontDescription {
    let mut description = pango::FontDescription::from_string(&font.to_pango_string());
    description.set_absolute_size(size * f64::from(pango::SCALE));
    description
}

/// Renders text with its baseline starting at `origin`, rotated by `angle`.
///
/// The transform is pushed with save/translate/rotate and popped afterwards so
/// it never leaks into later commands.
fn render_glyph(
    ctx: &cairo::Context,
    text: &str,
    origin: Point,
    angle: f64,
    size: f64,
    font: &FontDescriptor,
    color: Color,
) {
    if ctx.save().is_err() {
        return;
    }

    ctx.translate(origin.x, origin.y);
    ctx.rotate(angle);

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&pango_font_description(font, size)));
    layout.set_text(text);

    // Pango positions layouts by their top-left corner; shift up to the baseline.
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
    ctx.move_to(0.0, -baseline);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}
