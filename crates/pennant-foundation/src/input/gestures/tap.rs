//! Tap recognizer.

use super::GestureRecognizer;
use crate::gesture_constants::DRAG_THRESHOLD;
use crate::input::types::{PointerEvent, PointerEventKind};
use pennant_ui_graphics::Point;
use std::rc::Rc;

/// Recognizes a press-and-release within the drag threshold.
///
/// The tap is cancelled by movement past [`DRAG_THRESHOLD`] or by any event
/// a sibling recognizer consumed first; an in-progress pan therefore makes
/// a tap impossible for the rest of the gesture.
pub struct TapGesture {
    handler: Rc<dyn Fn(Point)>,
    pressed: bool,
    cancelled: bool,
    press_position: Point,
}

impl TapGesture {
    pub fn new(handler: impl Fn(Point) + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
            pressed: false,
            cancelled: false,
            press_position: Point::ZERO,
        }
    }
}

impl GestureRecognizer for TapGesture {
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                if event.is_consumed() {
                    return false;
                }
                self.pressed = true;
                self.cancelled = false;
                self.press_position = event.position;
                true
            }
            PointerEventKind::Move => {
                if !self.pressed || self.cancelled {
                    return false;
                }
                let dx = event.position.x - self.press_position.x;
                let dy = event.position.y - self.press_position.y;
                if event.is_consumed() || dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD {
                    log::trace!("tap cancelled by movement");
                    self.cancelled = true;
                }
                true
            }
            PointerEventKind::Up => {
                if !self.pressed {
                    return false;
                }
                let fire = !self.cancelled && !event.is_consumed();
                self.reset();
                if fire {
                    log::trace!("tap recognized at {:?}", event.position);
                    (self.handler)(event.position);
                }
                true
            }
            PointerEventKind::Cancel => {
                if !self.pressed {
                    return false;
                }
                self.reset();
                true
            }
        }
    }

    fn reset(&mut self) {
        self.pressed = false;
        self.cancelled = false;
    }
}
