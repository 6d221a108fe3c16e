use super::*;
use crate::brush::TextMeasure;
use crate::draw::{DrawCommand, FontDescriptor, Point};
use crate::input::{Key, MouseButton, ShapeMode};

struct FixedWidth(f64);

impl TextMeasure for FixedWidth {
    fn measure_text(&self, _text: &str, _size: f64, _font: &FontDescriptor) -> Option<f64> {
        Some(self.0)
    }
}

fn create_test_input_state() -> InputState {
    InputState::new(SketchState::default(), Some(42), true)
}

#[test]
fn test_motion_without_press_draws_nothing() {
    let mut state = create_test_input_state();
    let measure = FixedWidth(1.0);
    for mode in ShapeMode::ALL {
        state.set_shape_mode(mode);
        state.on_mouse_motion(10.0, 10.0, &measure);
        state.on_mouse_motion(300.0, 200.0, &measure);
    }
    assert!(state.take_pending_commands().is_empty());
}

#[test]
fn test_press_sets_anchor_and_drag_queues_commands() {
    let mut state = create_test_input_state();
    let measure = FixedWidth(1.0);

    state.on_mouse_press(MouseButton::Left, 5.0, 6.0);
    assert_eq!(state.sketch.anchor, Point::new(5.0, 6.0));
    assert!(state.sketch.pointer.is_down);

    state.needs_redraw = false;
    state.on_mouse_motion(15.0, 6.0, &measure);
    state.on_mouse_motion(25.0, 6.0, &measure);

    let commands = state.take_pending_commands();
    assert_eq!(commands.len(), 2);
    assert!(state.needs_redraw);
    assert!(state.take_pending_commands().is_empty());
}

#[test]
fn test_release_and_leave_return_to_idle() {
    let mut state = create_test_input_state();
    let measure = FixedWidth(1.0);

    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_release(MouseButton::Left);
    state.on_mouse_motion(50.0, 50.0, &measure);
    assert!(state.take_pending_commands().is_empty());

    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_pointer_leave();
    state.on_mouse_motion(50.0, 50.0, &measure);
    assert!(state.take_pending_commands().is_empty());
}

#[test]
fn test_right_button_does_not_draw() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Right, 0.0, 0.0);
    assert!(!state.sketch.pointer.is_down);
}

#[test]
fn test_digit_keys_select_shape_mode() {
    let mut state = create_test_input_state();
    state.on_key_press(Key::Char('2'));
    assert_eq!(state.sketch.options.shape, ShapeMode::Circles);
    state.on_key_press(Key::Char('4'));
    assert_eq!(state.sketch.options.shape, ShapeMode::Text);
    state.on_key_press(Key::Char('1'));
    assert_eq!(state.sketch.options.shape, ShapeMode::Squares);
}

#[test]
fn test_palette_case_selects_fill_or_background() {
    let mut state = create_test_input_state();

    state.on_key_press(Key::Char('r'));
    assert_eq!(state.sketch.options.fill.hex(), "#ff0000");
    assert_eq!(state.sketch.options.fill.rgb(), (255, 0, 0));
    assert_eq!(state.sketch.options.background.hex(), "#ffffff");

    state.on_key_press(Key::Char('K'));
    assert_eq!(state.sketch.options.background.hex(), "#000000");
    assert_eq!(state.sketch.options.fill.hex(), "#ff0000");
}

#[test]
fn test_invalid_color_keeps_previous_value() {
    let mut state = create_test_input_state();
    state.set_fill_color("#123456");
    state.set_fill_color("#12");
    assert_eq!(state.sketch.options.fill.hex(), "#123456");

    state.set_background_color("teal");
    assert_eq!(state.sketch.options.background.hex(), "#ffffff");
}

#[test]
fn test_clear_and_export_keys_queue_canvas_actions() {
    let mut state = create_test_input_state();
    state.on_key_press(Key::Char('s'));
    assert_eq!(state.take_pending_canvas_action(), Some(CanvasAction::Export));
    assert_eq!(state.take_pending_canvas_action(), None);

    state.on_key_press(Key::Char('E'));
    assert_eq!(state.take_pending_canvas_action(), Some(CanvasAction::Clear));
}

#[test]
fn test_clear_drops_queued_commands() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_motion(20.0, 0.0, &FixedWidth(1.0));
    state.request_canvas_action(CanvasAction::Clear);
    assert!(state.take_pending_commands().is_empty());
}

#[test]
fn test_function_keys_toggle_overlays_and_escape_exits() {
    let mut state = create_test_input_state();
    assert!(!state.show_help);
    state.on_key_press(Key::F10);
    assert!(state.show_help);
    state.on_key_press(Key::F12);
    assert!(!state.show_status_bar);
    state.on_key_press(Key::Escape);
    assert!(state.should_exit);
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let run = || {
        let mut state = create_test_input_state();
        state.set_shape_mode(ShapeMode::Circles);
        state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
        for i in 1..30 {
            state.on_mouse_motion(f64::from(i) * 7.0, f64::from(i) * 3.0, &FixedWidth(1.0));
        }
        state.take_pending_commands()
    };
    let first: Vec<DrawCommand> = run();
    assert_eq!(first, run());
}

#[test]
fn test_text_mode_advances_cursor_through_state() {
    let mut state = create_test_input_state();
    state.set_shape_mode(ShapeMode::Text);
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_motion(40.0, 0.0, &FixedWidth(10.0));

    let commands = state.take_pending_commands();
    assert!(matches!(
        commands.as_slice(),
        [DrawCommand::Glyph { text, .. }] if text == "M"
    ));
    assert_eq!(state.sketch.cursor.letter_index, 1);
    assert_eq!(state.sketch.anchor, Point::new(10.0, 0.0));
}
