use crate::input::gestures::{GestureRecognizer, GestureSet, PanGesture, TapGesture};
use crate::input::types::{PointerEvent, PointerEventKind};
use pennant_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

fn event(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(kind, Point::new(x, y))
}

fn counting_tap() -> (TapGesture, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let sink = count.clone();
    let tap = TapGesture::new(move |_| sink.set(sink.get() + 1));
    (tap, count)
}

#[test]
fn press_release_within_slop_fires_once() {
    let (mut tap, count) = counting_tap();

    tap.on_pointer_event(&event(PointerEventKind::Down, 50.0, 50.0));
    tap.on_pointer_event(&event(PointerEventKind::Move, 52.0, 51.0));
    tap.on_pointer_event(&event(PointerEventKind::Up, 52.0, 51.0));

    assert_eq!(count.get(), 1);
}

#[test]
fn movement_past_slop_cancels() {
    let (mut tap, count) = counting_tap();

    tap.on_pointer_event(&event(PointerEventKind::Down, 50.0, 50.0));
    tap.on_pointer_event(&event(PointerEventKind::Move, 50.0, 70.0));
    tap.on_pointer_event(&event(PointerEventKind::Up, 50.0, 70.0));

    assert_eq!(count.get(), 0);
}

#[test]
fn pointer_cancel_suppresses_tap() {
    let (mut tap, count) = counting_tap();

    tap.on_pointer_event(&event(PointerEventKind::Down, 50.0, 50.0));
    tap.on_pointer_event(&event(PointerEventKind::Cancel, 50.0, 50.0));
    tap.on_pointer_event(&event(PointerEventKind::Up, 50.0, 50.0));

    assert_eq!(count.get(), 0);
}

#[test]
fn consumed_release_does_not_fire() {
    let (mut tap, count) = counting_tap();

    tap.on_pointer_event(&event(PointerEventKind::Down, 50.0, 50.0));
    let up = event(PointerEventKind::Up, 50.0, 50.0);
    up.consume();
    tap.on_pointer_event(&up);

    assert_eq!(count.get(), 0);
}

#[test]
fn pan_in_gesture_set_silences_tap() {
    let taps = Rc::new(Cell::new(0));
    let tap_sink = taps.clone();
    let mut gestures = GestureSet::new();
    // Pan first, tap second: consumption happens within the same dispatch.
    gestures.add(Box::new(PanGesture::vertical(|_| {})));
    gestures.add(Box::new(TapGesture::new(move |_| {
        tap_sink.set(tap_sink.get() + 1)
    })));

    gestures.dispatch(&event(PointerEventKind::Down, 50.0, 50.0));
    gestures.dispatch(&event(PointerEventKind::Move, 50.0, 80.0));
    gestures.dispatch(&event(PointerEventKind::Up, 50.0, 80.0));

    assert_eq!(taps.get(), 0, "drag must not end in a tap");

    // A clean press/release afterwards still taps.
    gestures.dispatch(&event(PointerEventKind::Down, 50.0, 50.0));
    gestures.dispatch(&event(PointerEventKind::Up, 50.0, 50.0));
    assert_eq!(taps.get(), 1);
}
