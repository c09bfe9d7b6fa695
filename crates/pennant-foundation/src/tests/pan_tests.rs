use crate::input::gestures::{GesturePhase, GestureRecognizer, PanEvent, PanGesture};
use crate::input::types::{PointerEvent, PointerEventKind};
use pennant_ui_graphics::Point;
use std::cell::RefCell;
use std::rc::Rc;

fn event(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(kind, Point::new(x, y))
}

fn recording_pan() -> (PanGesture, Rc<RefCell<Vec<PanEvent>>>) {
    let events: Rc<RefCell<Vec<PanEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    let pan = PanGesture::vertical(move |e| sink.borrow_mut().push(*e));
    (pan, events)
}

#[test]
fn no_began_within_slop() {
    let (mut pan, events) = recording_pan();

    pan.on_pointer_event(&event(PointerEventKind::Down, 100.0, 100.0));
    pan.on_pointer_event(&event(PointerEventKind::Move, 100.0, 107.0));
    pan.on_pointer_event(&event(PointerEventKind::Up, 100.0, 107.0));

    assert!(events.borrow().is_empty(), "7px is under the slop");
}

#[test]
fn began_at_slop_crossing_with_zero_translation() {
    let (mut pan, events) = recording_pan();

    pan.on_pointer_event(&event(PointerEventKind::Down, 100.0, 100.0));
    pan.on_pointer_event(&event(PointerEventKind::Move, 100.0, 109.0));

    let recorded = events.borrow();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].phase, GesturePhase::Began);
    assert_eq!(recorded[0].translation, 0.0, "translation restarts at began");
}

#[test]
fn changed_translation_is_cumulative_from_began_point() {
    let (mut pan, events) = recording_pan();

    pan.on_pointer_event(&event(PointerEventKind::Down, 100.0, 100.0));
    pan.on_pointer_event(&event(PointerEventKind::Move, 100.0, 109.0)); // began, origin 109
    pan.on_pointer_event(&event(PointerEventKind::Move, 100.0, 129.0));
    pan.on_pointer_event(&event(PointerEventKind::Move, 100.0, 94.0));

    let recorded = events.borrow();
    assert_eq!(recorded.len(), 3);
    assert_eq!(recorded[1], PanEvent { phase: GesturePhase::Changed, translation: 20.0 });
    assert_eq!(recorded[2], PanEvent { phase: GesturePhase::Changed, translation: -15.0 });
}

#[test]
fn up_emits_ended_with_final_translation() {
    let (mut pan, events) = recording_pan();

    pan.on_pointer_event(&event(PointerEventKind::Down, 100.0, 100.0));
    pan.on_pointer_event(&event(PointerEventKind::Move, 100.0, 109.0));
    pan.on_pointer_event(&event(PointerEventKind::Move, 100.0, 139.0));
    pan.on_pointer_event(&event(PointerEventKind::Up, 100.0, 139.0));

    let recorded = events.borrow();
    assert_eq!(recorded.last().unwrap().phase, GesturePhase::Ended);
    assert_eq!(recorded.last().unwrap().translation, 30.0);
}

#[test]
fn cancel_emits_cancelled() {
    let (mut pan, events) = recording_pan();

    pan.on_pointer_event(&event(PointerEventKind::Down, 100.0, 100.0));
    pan.on_pointer_event(&event(PointerEventKind::Move, 100.0, 112.0));
    pan.on_pointer_event(&event(PointerEventKind::Cancel, 100.0, 112.0));

    let recorded = events.borrow();
    assert_eq!(recorded.last().unwrap().phase, GesturePhase::Cancelled);

    // The recognizer is reusable after a cancel.
    drop(recorded);
    pan.on_pointer_event(&event(PointerEventKind::Down, 100.0, 100.0));
    pan.on_pointer_event(&event(PointerEventKind::Move, 100.0, 110.0));
    assert_eq!(events.borrow().last().unwrap().phase, GesturePhase::Began);
}

#[test]
fn up_without_began_emits_nothing() {
    let (mut pan, events) = recording_pan();

    pan.on_pointer_event(&event(PointerEventKind::Down, 100.0, 100.0));
    pan.on_pointer_event(&event(PointerEventKind::Up, 100.0, 102.0));

    assert!(events.borrow().is_empty());
}

#[test]
fn events_consumed_once_gesture_begins() {
    let (mut pan, _events) = recording_pan();

    let down = event(PointerEventKind::Down, 100.0, 100.0);
    pan.on_pointer_event(&down);
    assert!(!down.is_consumed(), "down stays available to siblings");

    let crossing = event(PointerEventKind::Move, 100.0, 110.0);
    pan.on_pointer_event(&crossing);
    assert!(crossing.is_consumed());

    let moved = event(PointerEventKind::Move, 100.0, 130.0);
    pan.on_pointer_event(&moved);
    assert!(moved.is_consumed());

    let up = event(PointerEventKind::Up, 100.0, 130.0);
    pan.on_pointer_event(&up);
    assert!(up.is_consumed());
}

#[test]
fn horizontal_movement_does_not_begin_vertical_pan() {
    let (mut pan, events) = recording_pan();

    pan.on_pointer_event(&event(PointerEventKind::Down, 100.0, 100.0));
    pan.on_pointer_event(&event(PointerEventKind::Move, 150.0, 103.0));

    assert!(events.borrow().is_empty());
}
