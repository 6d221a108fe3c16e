use cairo::{Context, ImageSurface};
use doodlepad::config::StatusPosition;
use doodlepad::input::{InputState, ShapeMode, SketchState};

fn make_input_state() -> InputState {
    InputState::new(SketchState::default(), Some(1), true)
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

#[test]
fn render_status_bar_draws_for_all_positions() {
    let input = make_input_state();
    let positions = [
        StatusPosition::TopLeft,
        StatusPosition::TopRight,
        StatusPosition::BottomLeft,
        StatusPosition::BottomRight,
    ];

    for position in positions {
        let (mut surface, ctx) = surface_with_context(400, 200);
        doodlepad::ui::render_status_bar(&ctx, &input, position, 14.0, 400, 200);
        drop(ctx);
        assert!(
            surface_has_pixels(&mut surface),
            "status bar should render pixels for {:?}",
            position
        );
    }
}

#[test]
fn render_help_overlay_draws_content() {
    let (mut surface, ctx) = surface_with_context(800, 600);
    doodlepad::ui::render_help_overlay(&ctx, 14.0, 800, 600);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn status_text_reports_mode_and_colors() {
    let mut input = make_input_state();
    input.set_fill_color("red");
    let text = doodlepad::ui::status_text(&input);
    assert!(text.starts_with("[Squares]"));
    assert!(text.contains("#ff0000 Red"));
    assert!(text.contains("[Page #ffffff]"));
    assert!(!text.contains("Next"));

    input.set_shape_mode(ShapeMode::Text);
    let text = doodlepad::ui::status_text(&input);
    assert!(text.contains("[Next 'M']"));
}
