use super::*;
use crate::draw::{BLUE, Canvas, Color, GREEN, PixelBuffer, RED, Shape, TRANSPARENT};
use crate::input::{GestureEvent, Tool};
use crate::util::Point;

fn create_test_canvas() -> Canvas {
    Canvas::new(16, 16, 50)
}

fn controller(tool: Tool) -> ToolController {
    ToolController::new(tool, RED, 2)
}

fn drag(controller: &mut ToolController, canvas: &mut Canvas, points: &[(i32, i32)]) {
    let (first, rest) = points.split_first().expect("gesture needs points");
    controller.handle(canvas, GestureEvent::Begin(Point::from(*first)));
    for &(x, y) in &rest[..rest.len().saturating_sub(1)] {
        controller.handle(canvas, GestureEvent::Move(Point::new(x, y)));
    }
    let last = rest.last().unwrap_or(first);
    controller.handle(canvas, GestureEvent::End(Point::from(*last)));
}

fn count(buffer: &PixelBuffer, color: Color) -> usize {
    buffer.pixels().iter().filter(|&&c| c == color).count()
}

#[test]
fn rectangle_gesture_commits_once_on_release() {
    let mut canvas = create_test_canvas();
    let mut tool = controller(Tool::Rectangle);
    let blank = canvas.buffer().snapshot();

    tool.on_begin(&mut canvas, Point::new(2, 2));
    assert!(tool.is_drawing());
    tool.on_move(&mut canvas, Point::new(4, 4));
    tool.on_move(&mut canvas, Point::new(6, 3));
    // Intermediate moves only update the preview.
    assert!(canvas.buffer().matches(&blank));
    assert_eq!(canvas.history().len(), 1);

    tool.on_end(&mut canvas, Point::new(5, 7));
    assert!(!tool.is_drawing());
    assert_eq!(canvas.history().len(), 2);

    for y in 0..16 {
        for x in 0..16 {
            let inside = (2..=5).contains(&x) && (2..=7).contains(&y);
            let expected = if inside { RED } else { TRANSPARENT };
            assert_eq!(canvas.buffer().get(x, y), Ok(expected), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn rectangle_preview_tracks_current_point() {
    let mut canvas = create_test_canvas();
    let mut tool = controller(Tool::Rectangle);
    assert!(tool.provisional_shape().is_none());

    tool.on_begin(&mut canvas, Point::new(1, 1));
    tool.on_move(&mut canvas, Point::new(9, 4));
    match tool.provisional_shape() {
        Some(Shape::Rect { a, b, color, .. }) => {
            assert_eq!(a, Point::new(1, 1));
            assert_eq!(b, Point::new(9, 4));
            assert_eq!(color, RED);
        }
        other => panic!("expected rect preview, got {other:?}"),
    }
}

#[test]
fn freehand_paints_during_moves_and_commits_on_release() {
    let mut canvas = create_test_canvas();
    let mut tool = controller(Tool::FreehandPaint);

    tool.on_begin(&mut canvas, Point::new(2, 8));
    let after_press = count(canvas.buffer(), RED);
    assert!(after_press > 0, "press stamps a dot");

    tool.on_move(&mut canvas, Point::new(13, 8));
    assert!(count(canvas.buffer(), RED) > after_press);
    assert_eq!(canvas.buffer().get(8, 8), Ok(RED));
    assert_eq!(canvas.history().len(), 1, "no history entry per move");

    tool.on_move(&mut canvas, Point::new(13, 12));
    tool.on_end(&mut canvas, Point::new(13, 12));
    assert_eq!(canvas.history().len(), 2);
    assert!(tool.provisional_shape().is_none());
}

#[test]
fn freehand_preview_is_brush_cursor() {
    let mut canvas = create_test_canvas();
    let mut tool = ToolController::new(Tool::FreehandErase, RED, 6);
    tool.on_begin(&mut canvas, Point::new(4, 4));
    tool.on_move(&mut canvas, Point::new(6, 5));
    assert_eq!(
        tool.provisional_shape(),
        Some(Shape::BrushCursor {
            center: Point::new(6, 5),
            radius: 3,
            color: RED,
            composite: crate::draw::Composite::Erase,
        })
    );
}

#[test]
fn eraser_clears_to_transparency() {
    let mut canvas = create_test_canvas();
    canvas.apply(|buffer| buffer.fill_rect(Point::new(0, 0), Point::new(15, 15), BLUE));
    canvas.commit();

    let mut tool = controller(Tool::FreehandErase);
    drag(&mut tool, &mut canvas, &[(3, 3), (12, 3), (12, 3)]);
    assert_eq!(canvas.buffer().get(8, 3), Ok(TRANSPARENT));
    assert_eq!(canvas.buffer().get(8, 10), Ok(BLUE));
    assert_eq!(canvas.history().len(), 3);
}

#[test]
fn fill_acts_on_press_and_records_history() {
    let mut canvas = create_test_canvas();
    let mut tool = controller(Tool::Fill);

    tool.on_begin(&mut canvas, Point::new(0, 0));
    assert!(!tool.is_drawing());
    assert_eq!(count(canvas.buffer(), RED), 256);
    assert_eq!(canvas.history().len(), 2);

    // Release and motion after an instant tool are no-ops.
    tool.on_move(&mut canvas, Point::new(3, 3));
    tool.on_end(&mut canvas, Point::new(3, 3));
    assert_eq!(canvas.history().len(), 2);
}

#[test]
fn picker_samples_color_without_history() {
    let mut canvas = create_test_canvas();
    canvas.apply(|buffer| buffer.fill_rect(Point::new(5, 5), Point::new(6, 6), GREEN));
    let mut tool = controller(Tool::ColorPicker);

    tool.on_begin(&mut canvas, Point::new(5, 6));
    assert_eq!(tool.color(), GREEN);
    assert!(!tool.is_drawing());
    assert_eq!(canvas.history().len(), 1);

    // Picking a transparent pixel yields opaque black; off-canvas keeps the color.
    tool.on_begin(&mut canvas, Point::new(0, 0));
    assert_eq!(tool.color(), Color::rgb(0, 0, 0));
    tool.set_color(BLUE);
    tool.on_begin(&mut canvas, Point::new(-1, 40));
    assert_eq!(tool.color(), BLUE);
}

#[test]
fn events_while_idle_are_ignored() {
    let mut canvas = create_test_canvas();
    let mut tool = controller(Tool::Line);
    let blank = canvas.buffer().snapshot();

    tool.on_move(&mut canvas, Point::new(3, 3));
    tool.on_end(&mut canvas, Point::new(7, 7));
    assert!(canvas.buffer().matches(&blank));
    assert_eq!(canvas.history().len(), 1);
    assert_eq!(tool.state(), &DrawingState::Idle);
}

#[test]
fn second_press_during_gesture_is_ignored() {
    let mut canvas = create_test_canvas();
    let mut tool = controller(Tool::Line);
    tool.on_begin(&mut canvas, Point::new(1, 1));
    tool.on_begin(&mut canvas, Point::new(9, 9));
    assert_eq!(
        tool.state(),
        &DrawingState::Drawing {
            tool: Tool::Line,
            origin: Point::new(1, 1),
            current: Point::new(1, 1),
        }
    );
}

#[test]
fn leave_ends_gesture_at_last_point() {
    let mut canvas = create_test_canvas();
    let mut tool = controller(Tool::Line);
    tool.on_begin(&mut canvas, Point::new(1, 1));
    tool.on_move(&mut canvas, Point::new(10, 1));
    tool.on_leave(&mut canvas);

    assert!(!tool.is_drawing());
    assert_eq!(canvas.history().len(), 2);
    assert_eq!(canvas.buffer().get(10, 1), Ok(RED));
    assert_eq!(canvas.buffer().get(11, 1), Ok(TRANSPARENT));

    // Leaving while idle does nothing.
    tool.on_leave(&mut canvas);
    assert_eq!(canvas.history().len(), 2);
}

#[test]
fn shapes_clip_outside_the_buffer() {
    let mut canvas = create_test_canvas();
    let mut tool = controller(Tool::Ellipse);
    drag(&mut tool, &mut canvas, &[(-20, -20), (40, 40)]);
    assert_eq!(canvas.history().len(), 2);
    assert_eq!(canvas.buffer().get(8, 8), Ok(RED));
}

#[test]
fn outlined_shapes_leave_interior() {
    let mut canvas = create_test_canvas();
    let mut tool = ToolController::new(Tool::Rectangle, RED, 4).with_fill_shapes(false);
    drag(&mut tool, &mut canvas, &[(1, 1), (10, 10)]);
    assert_eq!(canvas.buffer().get(1, 5), Ok(RED));
    assert_eq!(canvas.buffer().get(5, 5), Ok(TRANSPARENT));
}

#[test]
fn tool_switch_mid_gesture_applies_to_next_gesture() {
    let mut canvas = create_test_canvas();
    let mut tool = controller(Tool::Line);
    tool.on_begin(&mut canvas, Point::new(0, 0));
    tool.set_tool(Tool::Fill);
    tool.on_end(&mut canvas, Point::new(0, 5));
    assert_eq!(count(canvas.buffer(), RED), 6);

    tool.on_begin(&mut canvas, Point::new(8, 8));
    assert_eq!(count(canvas.buffer(), TRANSPARENT), 0);
}

#[test]
fn thickness_is_clamped() {
    let mut tool = ToolController::new(Tool::FreehandPaint, RED, 0);
    assert_eq!(tool.thickness(), MIN_THICKNESS);
    tool.set_thickness(250);
    assert_eq!(tool.thickness(), MAX_THICKNESS);
    tool.adjust_thickness(-1);
    assert_eq!(tool.thickness(), 99);
    tool.adjust_thickness(-500);
    assert_eq!(tool.thickness(), MIN_THICKNESS);
}

#[test]
fn active_color_is_always_opaque() {
    let mut tool = ToolController::new(Tool::FreehandPaint, Color::new(1, 2, 3, 0), 3);
    assert_eq!(tool.color(), Color::rgb(1, 2, 3));
    tool.set_color(TRANSPARENT);
    assert_eq!(tool.color().a, 255);
}
