use super::*;
use crate::draw::{BLUE, CHARCOAL, GREEN, RED, TRANSPARENT};
use crate::util::Point;

fn session() -> EditorSession {
    EditorSession::new(16, 16)
}

fn press(session: &mut EditorSession, x: f64, y: f64) {
    session.handle_pointer(PointerEvent::Begin {
        pos: ScreenPoint::new(x, y),
        button: MouseButton::Left,
    });
}

fn drag_to(session: &mut EditorSession, x: f64, y: f64) {
    session.handle_pointer(PointerEvent::Move {
        pos: ScreenPoint::new(x, y),
    });
}

fn release(session: &mut EditorSession, x: f64, y: f64) {
    session.handle_pointer(PointerEvent::End {
        pos: ScreenPoint::new(x, y),
    });
}

#[test]
fn new_session_starts_blank_with_defaults() {
    let session = session();
    assert_eq!(session.buffer().count_not(TRANSPARENT), 0);
    assert_eq!(session.canvas().history().len(), 1);
    assert!(!session.can_undo());
    assert!(!session.can_redo());
    assert!(session.needs_redraw());
    assert_eq!(session.status().to_string(), "Brush | #2B2B2B | 5 | 100%");
}

#[test]
fn rectangle_gesture_maps_screen_to_model() {
    let mut session = session();
    session.set_tool(Tool::Rectangle);
    session.set_color(&ColorSpec::from(RED));
    session.viewport.set_zoom(2.0);
    session.viewport.set_pan(ScreenPoint::new(10.0, 10.0));

    press(&mut session, 14.0, 14.0);
    drag_to(&mut session, 16.0, 16.0);
    drag_to(&mut session, 30.0, 18.0);
    assert_eq!(session.buffer().count_not(TRANSPARENT), 0);
    assert!(session.provisional_shape().is_some());
    release(&mut session, 20.0, 24.0);

    assert_eq!(session.canvas().history().len(), 2);
    assert_eq!(session.buffer().count_not(TRANSPARENT), 4 * 6);
    assert_eq!(session.buffer().get(2, 2), Ok(RED));
    assert_eq!(session.buffer().get(5, 7), Ok(RED));
    assert_eq!(session.buffer().get(6, 7), Ok(TRANSPARENT));
    assert!(session.provisional_shape().is_none());
}

#[test]
fn middle_drag_pans_without_drawing() {
    let mut session = session();
    session.handle_pointer(PointerEvent::Begin {
        pos: ScreenPoint::new(0.0, 0.0),
        button: MouseButton::Middle,
    });
    assert!(session.is_panning());
    drag_to(&mut session, 5.0, -3.0);
    drag_to(&mut session, 10.0, 4.0);
    release(&mut session, 10.0, 4.0);

    assert!(!session.is_panning());
    assert_eq!(session.viewport().pan(), ScreenPoint::new(10.0, 4.0));
    assert_eq!(session.buffer().count_not(TRANSPARENT), 0);
    assert_eq!(session.canvas().history().len(), 1);
}

#[test]
fn right_button_is_ignored() {
    let mut session = session();
    session.handle_pointer(PointerEvent::Begin {
        pos: ScreenPoint::new(3.0, 3.0),
        button: MouseButton::Right,
    });
    drag_to(&mut session, 8.0, 8.0);
    release(&mut session, 8.0, 8.0);
    assert!(!session.tools().is_drawing());
    assert_eq!(session.buffer().count_not(TRANSPARENT), 0);
    assert_eq!(session.canvas().history().len(), 1);
}

#[test]
fn leave_ends_open_gesture() {
    let mut session = session();
    session.set_tool(Tool::Line);
    press(&mut session, 1.0, 1.0);
    drag_to(&mut session, 10.0, 1.0);
    session.handle_pointer(PointerEvent::Leave);

    assert!(!session.tools().is_drawing());
    assert_eq!(session.canvas().history().len(), 2);
    assert_eq!(session.buffer().get(10, 1), Ok(CHARCOAL));
    assert_eq!(session.buffer().get(11, 1), Ok(TRANSPARENT));
}

#[test]
fn wheel_zooms_around_anchor() {
    let mut session = session();
    session.pan_by(40.0, -24.0);
    let anchor = ScreenPoint::new(100.0, 50.0);
    let before = session.viewport().screen_to_model_exact(anchor);

    session.on_wheel(anchor, 120.0);
    assert!((session.viewport().zoom() - 0.9).abs() < 1e-9);
    let after = session.viewport().screen_to_model_exact(anchor);
    assert!((before.0 - after.0).abs() < 1e-9);
    assert!((before.1 - after.1).abs() < 1e-9);

    session.on_wheel(anchor, -3.0);
    assert!((session.viewport().zoom() - 1.0).abs() < 1e-9);

    session.on_wheel(anchor, 0.0);
    assert!((session.viewport().zoom() - 1.0).abs() < 1e-9);
}

#[test]
fn zoom_steps_are_clamped() {
    let mut session = session();
    session.zoom_in();
    assert_eq!(session.viewport().zoom(), 1.25);
    for _ in 0..40 {
        session.zoom_in();
    }
    assert_eq!(session.viewport().zoom(), crate::viewport::MAX_ZOOM);
    for _ in 0..40 {
        session.zoom_out();
    }
    assert_eq!(session.viewport().zoom(), crate::viewport::MIN_ZOOM);
}

#[test]
fn center_in_uses_canvas_size() {
    let mut session = session();
    session.zoom_in();
    session.center_in(100.0, 60.0);
    assert_eq!(session.viewport().pan(), ScreenPoint::new(40.0, 20.0));
}

#[test]
fn malformed_color_keeps_previous() {
    let mut session = session();
    assert!(session.set_color(&ColorSpec::from("blue")));
    assert!(!session.set_color(&ColorSpec::from("#12")));
    assert!(!session.set_color(&ColorSpec::from("mauve")));
    assert!(!session.set_color(&ColorSpec::from("#+f+f+f")));
    assert_eq!(session.status().color, BLUE);
}

#[test]
fn undo_then_redo_restores_final_image() {
    let mut session = session();
    let colors = [RED, GREEN, BLUE, RED, GREEN];
    for (index, color) in colors.iter().enumerate() {
        session.set_color(&ColorSpec::from(*color));
        let y = (index * 3) as f64;
        press(&mut session, 0.0, y);
        drag_to(&mut session, 15.0, y);
        release(&mut session, 15.0, y);
    }
    let final_image = session.buffer().snapshot();

    for _ in 0..colors.len() {
        assert!(session.undo());
    }
    assert_eq!(session.buffer().count_not(TRANSPARENT), 0);
    assert!(!session.undo());

    for _ in 0..colors.len() {
        assert!(session.redo());
    }
    assert!(session.buffer().matches(&final_image));
    assert!(!session.redo());
}

#[test]
fn history_capacity_comes_from_config() {
    let mut config = Config::default();
    config.canvas.width = 4;
    config.canvas.height = 4;
    config.history.capacity = 3;
    config.drawing.default_tool = Tool::Fill;
    let mut session = EditorSession::from_config(&config);

    for color in [RED, GREEN, BLUE] {
        session.set_color(&ColorSpec::from(color));
        press(&mut session, 0.0, 0.0);
        release(&mut session, 0.0, 0.0);
    }
    assert_eq!(session.canvas().history().len(), 3);

    assert!(session.undo());
    assert!(session.undo());
    assert_eq!(session.buffer().count_not(RED), 0);
    assert!(!session.undo());
}

#[test]
fn picker_updates_status_color() {
    let mut session = session();
    session.set_tool(Tool::Fill);
    session.set_color(&ColorSpec::from(GREEN));
    press(&mut session, 4.0, 4.0);

    session.set_color(&ColorSpec::from(RED));
    session.set_tool(Tool::ColorPicker);
    press(&mut session, 7.0, 2.0);
    assert_eq!(session.status().color, GREEN);
    assert_eq!(session.canvas().history().len(), 2);
}

#[test]
fn clear_is_one_undoable_edit() {
    let mut session = session();
    session.set_tool(Tool::Fill);
    press(&mut session, 0.0, 0.0);
    session.clear();
    assert_eq!(session.buffer().count_not(TRANSPARENT), 0);
    assert_eq!(session.canvas().history().len(), 3);
    assert!(session.undo());
    assert_eq!(session.buffer().count_not(CHARCOAL), 0);
}

#[test]
fn grid_shows_only_when_zoomed_in() {
    let mut session = session();
    assert!(!session.show_grid());
    session.toggle_grid();
    assert!(session.show_grid());
    assert!(!session.grid_visible());
    session.zoom_in();
    assert!(session.grid_visible());
    assert_eq!(session.grid_spacing(), 16);
}

#[test]
fn thickness_commands_clamp() {
    let mut session = session();
    session.set_thickness(0);
    assert_eq!(session.status().thickness, 1);
    session.adjust_thickness(150);
    assert_eq!(session.status().thickness, 100);
    session.adjust_thickness(-10);
    assert_eq!(session.status().thickness, 90);
}

#[test]
fn take_redraw_drains_damage() {
    let mut session = session();
    assert_eq!(
        session.take_redraw(),
        vec![Rect::new(0, 0, 16, 16).unwrap()]
    );
    assert!(!session.needs_redraw());

    session.set_tool(Tool::Fill);
    press(&mut session, 0.0, 0.0);
    assert!(session.needs_redraw());
    assert_eq!(
        session.take_redraw(),
        vec![Rect::new(0, 0, 16, 16).unwrap()]
    );
    assert!(session.take_redraw().is_empty());
}

#[test]
fn script_replays_into_image() {
    let script = Script::from_toml(
        r##"
        [[step]]
        op = "color"
        color = "red"

        [[step]]
        op = "tool"
        tool = "rect"

        [[step]]
        op = "begin"
        x = 2
        y = 2

        [[step]]
        op = "move"
        x = 4
        y = 4

        [[step]]
        op = "end"
        x = 5
        y = 7

        [[step]]
        op = "tool"
        tool = "fill"

        [[step]]
        op = "color"
        color = [0, 0, 255]

        [[step]]
        op = "begin"
        x = 0
        y = 0

        [[step]]
        op = "undo"

        [[step]]
        op = "redo"
        "##,
    )
    .unwrap();

    let mut session = session();
    session.run_script(&script);

    assert_eq!(session.buffer().get(3, 3), Ok(RED));
    assert_eq!(session.buffer().get_point(Point::new(0, 0)), Ok(BLUE));
    assert_eq!(session.buffer().count_not(BLUE), 24);
    assert_eq!(session.canvas().history().len(), 3);
    assert!(!session.can_redo());
}

#[test]
fn preview_motion_marks_old_and_new_outline() {
    let mut session = session();
    session.set_tool(Tool::Rectangle);
    session.take_redraw();

    press(&mut session, 1.0, 1.0);
    drag_to(&mut session, 5.0, 4.0);
    let regions = session.take_redraw();
    assert!(regions.contains(&Rect::from_corners(Point::new(1, 1), Point::new(5, 4))));

    drag_to(&mut session, 2.0, 2.0);
    let regions = session.take_redraw();
    assert!(regions.contains(&Rect::from_corners(Point::new(1, 1), Point::new(5, 4))));
    assert!(regions.contains(&Rect::from_corners(Point::new(1, 1), Point::new(2, 2))));
}

#[test]
fn far_off_pointer_is_clipped_not_fatal() {
    let mut session = session();
    session.viewport.set_zoom(crate::viewport::MIN_ZOOM);

    press(&mut session, -1e10, 4.0);
    drag_to(&mut session, -1e10, 8.0);
    release(&mut session, -1e10, 8.0);
    assert_eq!(session.canvas().history().len(), 2);
    assert_eq!(session.buffer().count_not(TRANSPARENT), 0);

    session.set_tool(Tool::Rectangle);
    press(&mut session, -1e9, -1e9);
    drag_to(&mut session, 1e9, 1e9);
    assert!(session.provisional_shape().is_some());
    release(&mut session, 1e9, 1e9);
    assert_eq!(session.canvas().history().len(), 3);
    assert_eq!(session.buffer().count_not(CHARCOAL), 0);

    let regions = session.take_redraw();
    assert!(!regions.is_empty());
    let surface = Rect::new(0, 0, 16, 16).unwrap();
    assert!(regions.iter().all(|rect| surface.union(*rect) == surface));
}

#[test]
fn long_off_buffer_freehand_move_is_clipped() {
    let mut session = session();
    session.viewport.set_zoom(crate::viewport::MIN_ZOOM);
    session.set_thickness(2);

    let started = std::time::Instant::now();
    press(&mut session, -5e8, 1.0);
    drag_to(&mut session, 5e8, 1.0);
    release(&mut session, 5e8, 1.0);
    assert!(started.elapsed() < std::time::Duration::from_secs(1));

    // Screen y 1.0 is model row 4; radius 1 covers rows 3 to 5 edge to edge.
    assert_eq!(session.buffer().count_not(TRANSPARENT), 48);
    assert_eq!(session.buffer().get(0, 3), Ok(CHARCOAL));
    assert_eq!(session.buffer().get(15, 5), Ok(CHARCOAL));
    assert_eq!(session.buffer().get(7, 6), Ok(TRANSPARENT));
    assert_eq!(session.canvas().history().len(), 2);
}
