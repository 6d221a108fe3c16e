/// UI rendering: status bar and help overlay drawn over the canvas
use crate::config::StatusPosition;
use crate::input::{InputState, ShapeMode};

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Gap between the status bar and the screen edge
const STATUS_PADDING: f64 = 12.0;
/// Background rectangle X offset
const STATUS_BG_OFFSET_X: f64 = 5.0;
/// Background rectangle Y offset
const STATUS_BG_OFFSET_Y: f64 = 3.0;
/// Background rectangle width padding
const STATUS_BG_WIDTH_PAD: f64 = 10.0;
/// Background rectangle height padding
const STATUS_BG_HEIGHT_PAD: f64 = 8.0;
/// Space reserved on the left for the fill swatch
const STATUS_SWATCH_SPACE: f64 = 18.0;
const STATUS_BG_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.7];
const STATUS_TEXT_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];

/// Fallback character width for monospace font estimation
const HELP_CHAR_WIDTH_ESTIMATE: f64 = 9.0;
const HELP_PADDING: f64 = 24.0;
const HELP_BG_COLOR: [f64; 4] = [0.05, 0.05, 0.08, 0.9];
const HELP_BORDER_COLOR: [f64; 4] = [0.4, 0.6, 1.0, 0.9];
const HELP_TEXT_COLOR: [f64; 4] = [0.95, 0.95, 0.95, 1.0];

/// Builds the one-line status text for the current sketch.
pub fn status_text(input_state: &InputState) -> String {
    let options = &input_state.sketch.options;
    let fill_name = crate::util::color_to_name(&options.fill.color());

    let mut text = format!(
        "[{}] [Fill {} {}] [Page {}]",
        options.shape.label(),
        options.fill.hex(),
        fill_name,
        options.background.hex()
    );
    if options.shape == ShapeMode::Text {
        text.push_str(&format!(" [Next '{}']", input_state.sketch.current_letter()));
    }
    text.push_str("  F10=Help");
    text
}

/// Render status bar showing shape mode, colors and the next text letter
pub fn render_status_bar(
    ctx: &cairo::Context,
    input_state: &InputState,
    position: StatusPosition,
    font_size: f64,
    screen_width: u32,
    screen_height: u32,
) {
    let status_text = status_text(input_state);

    ctx.set_font_size(font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    let extents = match ctx.text_extents(&status_text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!(
                "Failed to measure status bar text: {}, skipping status bar",
                e
            );
            return;
        }
    };
    let text_width = extents.width() + STATUS_SWATCH_SPACE;
    let text_height = extents.height().max(font_size * 0.7);

    let (x, y) = match position {
        StatusPosition::TopLeft => (STATUS_PADDING, STATUS_PADDING + text_height),
        StatusPosition::TopRight => (
            screen_width as f64 - text_width - STATUS_PADDING,
            STATUS_PADDING + text_height,
        ),
        StatusPosition::BottomLeft => (STATUS_PADDING, screen_height as f64 - STATUS_PADDING),
        StatusPosition::BottomRight => (
            screen_width as f64 - text_width - STATUS_PADDING,
            screen_height as f64 - STATUS_PADDING,
        ),
    };

    let [r, g, b, a] = STATUS_BG_COLOR;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(
        x - STATUS_BG_OFFSET_X,
        y - text_height - STATUS_BG_OFFSET_Y,
        text_width + STATUS_BG_WIDTH_PAD,
        text_height + STATUS_BG_HEIGHT_PAD,
    );
    let _ = ctx.fill();

    // Fill swatch, outlined so black and white both show
    let swatch = text_height * 0.8;
    let swatch_y = y - (text_height + swatch) / 2.0;
    let fill = input_state.sketch.options.fill.color();
    ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
    ctx.rectangle(x, swatch_y, swatch, swatch);
    let _ = ctx.fill_preserve();
    ctx.set_source_rgba(0.5, 0.5, 0.5, 1.0);
    ctx.set_line_width(1.0);
    let _ = ctx.stroke();

    let [r, g, b, a] = STATUS_TEXT_COLOR;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x + STATUS_SWATCH_SPACE, y);
    let _ = ctx.show_text(&status_text);
}

const HELP_TEXT: &[&str] = &[
    "━━━━━━━━━━━━━━━━━━━━━━━━ DOODLEPAD CONTROLS ━━━━━━━━━━━━━━━━━━━━━━━━",
    "",
    "  DRAWING                          SHAPES",
    "    Drag           Paint brush       1    Squares",
    "    Release        Stop painting     2    Circles",
    "                                     3    Grid",
    "  COLORS                             4    Text",
    "    r g b y o p w k   Fill color",
    "    R G B Y O P W K   Background     ACTIONS",
    "                                     E    Clear canvas",
    "                                     S    Save image",
    "                                     F10  Toggle help",
    "                                     F12  Toggle status bar",
    "                                     Esc  Exit",
    "",
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
];

/// Render help overlay showing all keybindings
pub fn render_help_overlay(
    ctx: &cairo::Context,
    font_size: f64,
    screen_width: u32,
    screen_height: u32,
) {
    let line_height = font_size * 1.4;

    ctx.set_font_size(font_size);
    ctx.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );

    let mut max_width: f64 = 0.0;
    for line in HELP_TEXT {
        let width = match ctx.text_extents(line) {
            Ok(ext) => ext.width(),
            Err(e) => {
                log::warn!(
                    "Failed to measure help text line '{}': {}, using fallback width",
                    line,
                    e
                );
                line.chars().count() as f64 * HELP_CHAR_WIDTH_ESTIMATE
            }
        };
        max_width = max_width.max(width);
    }

    let box_width = max_width + HELP_PADDING * 2.0;
    let box_height = (HELP_TEXT.len() as f64) * line_height + HELP_PADDING * 2.0;

    // Center the box
    let box_x = (screen_width as f64 - box_width) / 2.0;
    let box_y = (screen_height as f64 - box_height) / 2.0;

    let [r, g, b, a] = HELP_BG_COLOR;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.fill();

    let [r, g, b, a] = HELP_BORDER_COLOR;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(2.0);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.stroke();

    let [r, g, b, a] = HELP_TEXT_COLOR;
    ctx.set_source_rgba(r, g, b, a);
    for (i, line) in HELP_TEXT.iter().enumerate() {
        let text_x = box_x + HELP_PADDING;
        let text_y = box_y + HELP_PADDING + (i as f64 + 1.0) * line_height;

        ctx.move_to(text_x, text_y);
        let _ = ctx.show_text(line);
    }
}
