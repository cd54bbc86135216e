use super::*;
use crate::draw::{BLACK, Color, GREEN, RED, WHITE};
use crate::input::events::{Key, PointerEvent};
use crate::input::tool::Tool;

fn create_test_engine() -> PaintEngine {
    PaintEngine::new(EngineSettings::default()).unwrap()
}

fn small_engine(width: u32, height: u32) -> PaintEngine {
    PaintEngine::new(EngineSettings {
        width,
        height,
        ..EngineSettings::default()
    })
    .unwrap()
}

/// Press, move through `points`, release at the last point.
fn drag(engine: &mut PaintEngine, start: (f64, f64), points: &[(f64, f64)]) {
    engine.handle_pointer_event(PointerEvent::down(start.0, start.1));
    for &(x, y) in points {
        engine.handle_pointer_event(PointerEvent::moved(x, y));
    }
    let end = points.last().copied().unwrap_or(start);
    engine.handle_pointer_event(PointerEvent::up(end.0, end.1));
}

fn pixel(engine: &PaintEngine, x: i32, y: i32) -> Color {
    engine.buffer().get(x, y).unwrap()
}

#[test]
fn test_new_engine_has_blank_floor() {
    let engine = create_test_engine();
    assert_eq!(engine.buffer().width(), 800);
    assert_eq!(engine.buffer().height(), 600);
    assert_eq!(engine.history_len(), 1);
    assert!(!engine.is_drawing());
    assert!(matches!(engine.current_state(), DrawingState::Idle));
    assert!(engine.pending_text().is_none());
    assert_eq!(engine.tool(), Tool::Brush);
    assert_eq!(engine.color(), BLACK);
    assert_eq!(engine.brush_size(), 5);
    assert_eq!(pixel(&engine, 0, 0), WHITE);
    assert_eq!(pixel(&engine, 799, 599), WHITE);
}

#[test]
fn test_zero_sized_canvas_is_rejected() {
    let result = PaintEngine::new(EngineSettings {
        width: 0,
        ..EngineSettings::default()
    });
    assert!(result.is_err());
}

#[test]
fn test_rectangle_then_undo_restores_blank_canvas() {
    let mut engine = create_test_engine();
    engine.set_tool(Tool::Rectangle);
    engine.set_color(RED);
    engine.set_brush_size(5);

    drag(&mut engine, (100.0, 100.0), &[(150.0, 130.0), (200.0, 150.0)]);

    assert!(!engine.is_drawing());
    assert_eq!(engine.history_len(), 2);
    assert_eq!(pixel(&engine, 100, 125), RED);
    assert_eq!(pixel(&engine, 200, 125), RED);
    assert_eq!(pixel(&engine, 150, 100), RED);
    assert_eq!(pixel(&engine, 150, 125), WHITE);

    assert!(engine.undo());
    assert_eq!(engine.history_len(), 1);
    assert!(engine.buffer().pixels().chunks_exact(4).all(|p| p == [255, 255, 255, 255]));
}

#[test]
fn test_preview_does_not_leak_intermediate_shapes() {
    let mut wobbly = small_engine(200, 200);
    wobbly.set_tool(Tool::Circle);
    drag(
        &mut wobbly,
        (100.0, 100.0),
        &[(190.0, 100.0), (160.0, 100.0), (130.0, 100.0)],
    );

    let mut direct = small_engine(200, 200);
    direct.set_tool(Tool::Circle);
    drag(&mut direct, (100.0, 100.0), &[(130.0, 100.0)]);

    assert_eq!(wobbly.buffer().pixels(), direct.buffer().pixels());
    assert_eq!(pixel(&wobbly, 190, 100), WHITE);
}

#[test]
fn test_each_preview_tool_commits_one_snapshot() {
    let blank = small_engine(120, 120);
    for tool in [Tool::Rectangle, Tool::Circle, Tool::Triangle, Tool::Line] {
        let mut engine = small_engine(120, 120);
        engine.set_tool(tool);
        drag(&mut engine, (60.0, 60.0), &[(80.0, 70.0), (100.0, 90.0)]);
        assert_eq!(engine.history_len(), 2, "{tool}");
        assert_ne!(engine.buffer().pixels(), blank.buffer().pixels(), "{tool}");
        assert!(engine.buffer().matches(engine.last_commit().unwrap()), "{tool}");
    }
}

#[test]
fn test_fill_inside_rectangle_then_repeat_is_noop() {
    let mut engine = create_test_engine();
    engine.set_tool(Tool::Rectangle);
    engine.set_color(BLACK);
    drag(&mut engine, (100.0, 100.0), &[(200.0, 150.0)]);

    engine.set_tool(Tool::Fill);
    engine.set_color(GREEN);
    drag(&mut engine, (150.5, 125.5), &[]);

    assert_eq!(engine.history_len(), 3);
    assert_eq!(pixel(&engine, 150, 125), GREEN);
    assert_eq!(pixel(&engine, 110, 110), GREEN);
    assert_eq!(pixel(&engine, 50, 50), WHITE);
    assert_eq!(pixel(&engine, 100, 125), BLACK);

    // Same color again: nothing changes, nothing committed
    drag(&mut engine, (150.0, 125.0), &[]);
    assert_eq!(engine.history_len(), 3);
}

#[test]
fn test_fill_outside_canvas_is_ignored() {
    let mut engine = small_engine(50, 50);
    engine.set_tool(Tool::Fill);
    engine.set_color(RED);
    drag(&mut engine, (-3.0, 10.0), &[]);
    drag(&mut engine, (50.0, 10.0), &[]);

    assert_eq!(engine.history_len(), 1);
    assert!(!engine.is_drawing());
}

#[test]
fn test_fill_ceiling_reverts_and_skips_commit() {
    let mut engine = PaintEngine::new(EngineSettings {
        width: 40,
        height: 40,
        max_fill_pixels: 100,
        ..EngineSettings::default()
    })
    .unwrap();
    engine.set_tool(Tool::Fill);
    engine.set_color(RED);
    drag(&mut engine, (10.0, 10.0), &[]);

    assert_eq!(engine.history_len(), 1);
    assert_eq!(pixel(&engine, 10, 10), WHITE);
}

#[test]
fn test_brush_stroke_and_eraser() {
    let mut engine = small_engine(100, 60);
    engine.set_color(BLACK);
    engine.set_brush_size(6);
    drag(&mut engine, (10.0, 30.0), &[(50.0, 30.0), (90.0, 30.0)]);

    assert_eq!(engine.history_len(), 2);
    assert_eq!(pixel(&engine, 30, 30), BLACK);
    assert_eq!(pixel(&engine, 70, 30), BLACK);
    assert_eq!(pixel(&engine, 50, 10), WHITE);

    engine.set_tool(Tool::Eraser);
    engine.set_color(RED);
    engine.set_brush_size(20);
    drag(&mut engine, (5.0, 30.0), &[(95.0, 30.0)]);

    assert_eq!(engine.history_len(), 3);
    assert_eq!(pixel(&engine, 30, 30), WHITE);
    assert_eq!(pixel(&engine, 70, 30), WHITE);
}

#[test]
fn test_pointer_leave_ends_gesture() {
    let mut engine = small_engine(60, 60);
    engine.handle_pointer_event(PointerEvent::down(10.0, 10.0));
    engine.handle_pointer_event(PointerEvent::moved(40.0, 10.0));
    assert!(engine.is_drawing());

    engine.handle_pointer_event(PointerEvent::leave(70.0, 10.0));
    assert!(!engine.is_drawing());
    assert_eq!(engine.history_len(), 2);

    // Moves after the gesture ended paint nothing
    let before = engine.buffer().snapshot();
    engine.handle_pointer_event(PointerEvent::moved(10.0, 50.0));
    assert!(engine.buffer().matches(&before));
}

#[test]
fn test_press_during_gesture_is_ignored() {
    let mut engine = small_engine(60, 60);
    engine.set_tool(Tool::Line);
    engine.handle_pointer_event(PointerEvent::down(10.0, 10.0));
    engine.handle_pointer_event(PointerEvent::down(50.0, 50.0));

    match engine.current_state() {
        DrawingState::Drawing {
            tool,
            start_x,
            start_y,
            ..
        } => {
            assert_eq!(*tool, Tool::Line);
            assert_eq!((*start_x, *start_y), (10.0, 10.0));
        }
        DrawingState::Idle => panic!("gesture should still be active"),
    }
}

#[test]
fn test_release_without_gesture_does_nothing() {
    let mut engine = small_engine(20, 20);
    engine.handle_pointer_event(PointerEvent::up(5.0, 5.0));
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn test_tool_change_mid_gesture_keeps_gesture_tool() {
    let mut engine = small_engine(100, 100);
    engine.set_tool(Tool::Rectangle);
    engine.handle_pointer_event(PointerEvent::down(20.0, 20.0));
    engine.set_tool(Tool::Brush);
    engine.handle_pointer_event(PointerEvent::moved(80.0, 80.0));
    engine.handle_pointer_event(PointerEvent::up(80.0, 80.0));

    // Rectangle outline, not a diagonal stroke
    assert_eq!(pixel(&engine, 20, 50), BLACK);
    assert_eq!(pixel(&engine, 50, 50), WHITE);
}

#[test]
fn test_undo_on_fresh_canvas_is_noop() {
    let mut engine = create_test_engine();
    engine.needs_redraw = false;
    assert!(!engine.undo());
    assert_eq!(engine.history_len(), 1);
    assert!(!engine.needs_redraw);
}

#[test]
fn test_undo_history_is_bounded() {
    let mut engine = small_engine(40, 40);
    for i in 0..25 {
        let y = f64::from(i) + 5.0;
        drag(&mut engine, (5.0, y), &[(30.0, y)]);
    }
    assert_eq!(engine.history_len(), crate::draw::MAX_UNDO);

    let mut undone = 0;
    while engine.undo() {
        undone += 1;
    }
    assert_eq!(undone, crate::draw::MAX_UNDO - 1);
    assert_eq!(engine.history_len(), 1);
    // The original blank floor was evicted; strokes from the first gestures remain
    assert_ne!(pixel(&engine, 15, 5), WHITE);
}

#[test]
fn test_clear_commits_and_can_be_undone() {
    let mut engine = small_engine(50, 50);
    drag(&mut engine, (10.0, 25.0), &[(40.0, 25.0)]);
    assert_eq!(pixel(&engine, 25, 25), BLACK);

    engine.clear();
    assert_eq!(engine.history_len(), 3);
    assert_eq!(pixel(&engine, 25, 25), WHITE);

    assert!(engine.undo());
    assert_eq!(pixel(&engine, 25, 25), BLACK);
}

#[test]
fn test_undo_during_preview_discards_the_gesture() {
    let mut engine = small_engine(100, 100);
    drag(&mut engine, (10.0, 10.0), &[(60.0, 10.0)]);
    assert_eq!(pixel(&engine, 30, 10), BLACK);

    engine.set_tool(Tool::Line);
    engine.handle_pointer_event(PointerEvent::down(20.0, 50.0));
    engine.handle_pointer_event(PointerEvent::moved(80.0, 50.0));
    assert!(engine.undo());
    assert!(!engine.is_drawing());

    // Later pointer traffic must not resurrect the undone stroke
    engine.handle_pointer_event(PointerEvent::moved(80.0, 80.0));
    engine.handle_pointer_event(PointerEvent::up(80.0, 80.0));

    assert_eq!(engine.history_len(), 1);
    assert_eq!(pixel(&engine, 30, 10), WHITE);
    assert_eq!(pixel(&engine, 50, 50), WHITE);
    assert_eq!(pixel(&engine, 80, 70), WHITE);
}

#[test]
fn test_undo_on_floor_during_gesture_drops_the_preview() {
    let mut engine = small_engine(60, 60);
    engine.set_tool(Tool::Rectangle);
    engine.handle_pointer_event(PointerEvent::down(10.0, 10.0));
    engine.handle_pointer_event(PointerEvent::moved(50.0, 50.0));
    assert_eq!(pixel(&engine, 10, 30), BLACK);

    assert!(!engine.undo());
    assert!(!engine.is_drawing());
    assert_eq!(pixel(&engine, 10, 30), WHITE);
}

#[test]
fn test_clear_during_gesture_is_not_undone_by_later_moves() {
    let mut engine = small_engine(60, 60);
    engine.handle_pointer_event(PointerEvent::down(10.0, 30.0));
    engine.handle_pointer_event(PointerEvent::moved(50.0, 30.0));

    engine.clear();
    engine.handle_pointer_event(PointerEvent::moved(50.0, 50.0));
    engine.handle_pointer_event(PointerEvent::up(50.0, 50.0));

    assert_eq!(engine.history_len(), 2);
    assert_eq!(pixel(&engine, 30, 30), WHITE);
    assert_eq!(pixel(&engine, 50, 40), WHITE);
}

#[test]
fn test_clear_uses_background_color() {
    let mut engine = PaintEngine::new(EngineSettings {
        width: 10,
        height: 10,
        background: Color::rgb(10, 20, 30),
        ..EngineSettings::default()
    })
    .unwrap();
    engine.clear();
    assert_eq!(pixel(&engine, 9, 9), Color::rgb(10, 20, 30));
}

#[test]
fn test_brush_size_is_clamped() {
    let mut engine = create_test_engine();
    engine.set_brush_size(0);
    assert_eq!(engine.tool_state().brush_size, 1);
    engine.set_brush_size(500);
    assert_eq!(engine.tool_state().brush_size, 50);
    engine.set_brush_size(12);
    assert_eq!(engine.tool_state().brush_size, 12);
}

#[test]
fn test_set_color_str() {
    let mut engine = create_test_engine();
    engine.set_color_str("#00ff00").unwrap();
    assert_eq!(engine.tool_state().color, GREEN);
    engine.set_color_str("red").unwrap();
    assert_eq!(engine.tool_state().color, RED);
    assert!(engine.set_color_str("not-a-color").is_err());
    assert_eq!(engine.tool_state().color, RED);
}

#[test]
fn test_text_click_opens_entry_and_requests_field() {
    let mut engine = create_test_engine();
    engine.set_tool(Tool::Text);
    engine.set_brush_size(5);
    engine.set_color(RED);
    engine.handle_pointer_event(PointerEvent::down(40.0, 60.0));

    assert!(!engine.is_drawing());
    let entry = engine.pending_text().unwrap();
    assert_eq!((entry.x, entry.y), (40.0, 60.0));
    assert!(entry.buffer.is_empty());

    let request = engine.take_text_field_request().unwrap();
    assert_eq!(request.font_size, 20.0);
    assert_eq!(request.color, RED);
    assert!(engine.take_text_field_request().is_none());

    // Releasing after a text click is not a gesture
    engine.handle_pointer_event(PointerEvent::up(40.0, 60.0));
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn test_text_commit_draws_and_records_history() {
    let mut engine = create_test_engine();
    engine.set_tool(Tool::Text);
    engine.handle_pointer_event(PointerEvent::down(40.0, 60.0));
    engine.set_text_value("Hello");
    assert_eq!(engine.pending_text().unwrap().buffer, "Hello");

    assert!(engine.on_key_press(Key::Return));
    assert!(engine.pending_text().is_none());
    assert_eq!(engine.history_len(), 2);
    assert!(engine.take_text_field_closed());
    assert!(!engine.take_text_field_closed());
}

#[test]
fn test_text_is_drawn_below_anchor_in_current_color() {
    let mut engine = create_test_engine();
    engine.set_tool(Tool::Text);
    engine.set_brush_size(5);
    engine.set_color(RED);
    engine.handle_pointer_event(PointerEvent::down(40.0, 60.0));
    engine.set_text_value("HHHH");
    assert!(engine.commit_text());

    let mut changed = Vec::new();
    for y in 0..600 {
        for x in 0..800 {
            let color = pixel(&engine, x, y);
            if color != WHITE {
                changed.push((x, y, color));
            }
        }
    }

    assert!(!changed.is_empty(), "text left no pixels");
    assert!(
        changed
            .iter()
            .any(|(_, _, c)| c.r > 200 && c.g < 100 && c.b < 100),
        "no red-dominant pixels"
    );
    // 20px font: glyphs sit between the anchor and the baseline at y = 80
    for &(x, y, _) in &changed {
        assert!((60..=82).contains(&y), "pixel ({x}, {y}) outside the text line");
        assert!(x >= 38, "pixel ({x}, {y}) left of the anchor");
    }
}

#[test]
fn test_text_keys_edit_the_entry() {
    let mut engine = create_test_engine();
    assert!(!engine.on_key_press(Key::Char('x')));

    engine.set_tool(Tool::Text);
    engine.handle_pointer_event(PointerEvent::down(10.0, 10.0));
    for c in "abc".chars() {
        assert!(engine.on_key_press(Key::Char(c)));
    }
    engine.on_key_press(Key::Backspace);
    assert_eq!(engine.pending_text().unwrap().buffer, "ab");
}

#[test]
fn test_empty_text_commit_draws_nothing() {
    let mut engine = create_test_engine();
    engine.set_tool(Tool::Text);
    engine.handle_pointer_event(PointerEvent::down(10.0, 10.0));

    assert!(!engine.commit_text());
    assert!(engine.pending_text().is_none());
    assert_eq!(engine.history_len(), 1);
    assert!(engine.take_text_field_closed());
}

#[test]
fn test_escape_cancels_text() {
    let mut engine = create_test_engine();
    engine.set_tool(Tool::Text);
    engine.handle_pointer_event(PointerEvent::down(10.0, 10.0));
    engine.set_text_value("draft");

    assert!(engine.on_key_press(Key::Escape));
    assert!(engine.pending_text().is_none());
    assert_eq!(engine.history_len(), 1);
    assert!(engine.take_text_field_closed());
}

#[test]
fn test_second_text_click_commits_first_entry() {
    let mut engine = create_test_engine();
    engine.set_tool(Tool::Text);
    engine.handle_pointer_event(PointerEvent::down(10.0, 10.0));
    engine.set_text_value("one");
    engine.handle_pointer_event(PointerEvent::down(200.0, 200.0));

    assert_eq!(engine.history_len(), 2);
    let entry = engine.pending_text().unwrap();
    assert_eq!((entry.x, entry.y), (200.0, 200.0));
    assert!(entry.buffer.is_empty());
}

#[test]
fn test_switching_tool_commits_pending_text() {
    let mut engine = create_test_engine();
    engine.set_tool(Tool::Text);
    engine.handle_pointer_event(PointerEvent::down(10.0, 10.0));
    engine.set_text_value("note");

    engine.set_tool(Tool::Brush);
    assert!(engine.pending_text().is_none());
    assert_eq!(engine.history_len(), 2);
}

#[test]
fn test_undo_keeps_pending_text_open() {
    let mut engine = create_test_engine();
    drag(&mut engine, (10.0, 10.0), &[(60.0, 10.0)]);
    engine.set_tool(Tool::Text);
    engine.handle_pointer_event(PointerEvent::down(100.0, 100.0));
    engine.set_text_value("keep");

    assert!(engine.undo());
    assert_eq!(engine.pending_text().unwrap().buffer, "keep");
}

#[test]
fn test_needs_redraw_tracks_canvas_changes() {
    let mut engine = small_engine(40, 40);
    assert!(engine.needs_redraw);
    engine.needs_redraw = false;

    engine.set_tool(Tool::Rectangle);
    assert!(!engine.needs_redraw);

    drag(&mut engine, (5.0, 5.0), &[(30.0, 30.0)]);
    assert!(engine.needs_redraw);
}

#[test]
fn test_export_png_has_png_signature() {
    let engine = small_engine(8, 8);
    let bytes = engine.export_png().unwrap();
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    assert_eq!(engine.export_filename(42), "paint-42.png");
}
