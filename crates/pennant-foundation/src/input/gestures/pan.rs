//! Single-axis pan recognizer.

use super::{GesturePhase, GestureRecognizer};
use crate::gesture_constants::DRAG_THRESHOLD;
use crate::input::types::{PointerEvent, PointerEventKind};
use std::rc::Rc;

/// Axis a pan gesture tracks - the banner only ever uses `Vertical`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One sample of a recognized pan.
///
/// `translation` is cumulative along the gesture's axis since the gesture
/// began (the slop-crossing point), not a per-sample delta. Every sample
/// carries the full translation so handlers can recompute their state from
/// scratch instead of integrating increments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: GesturePhase,
    pub translation: f32,
}

/// Recognizes a single-pointer drag along one axis.
///
/// Lifecycle: arms on `Down`, begins once cumulative movement along the
/// axis exceeds [`DRAG_THRESHOLD`], then reports `Changed` for every
/// subsequent move. `Up` ends the gesture, `Cancel` cancels it; both reset
/// the recognizer. From the moment the gesture begins, all events it sees
/// are consumed so sibling recognizers (tap) stay out of the way.
pub struct PanGesture {
    orientation: Orientation,
    handler: Rc<dyn Fn(&PanEvent)>,
    tracking: bool,
    begun: bool,
    press_position: f32,
    origin: f32,
}

impl PanGesture {
    pub fn new(orientation: Orientation, handler: impl Fn(&PanEvent) + 'static) -> Self {
        Self {
            orientation,
            handler: Rc::new(handler),
            tracking: false,
            begun: false,
            press_position: 0.0,
            origin: 0.0,
        }
    }

    pub fn vertical(handler: impl Fn(&PanEvent) + 'static) -> Self {
        Self::new(Orientation::Vertical, handler)
    }

    fn axis_position(&self, event: &PointerEvent) -> f32 {
        match self.orientation {
            Orientation::Horizontal => event.position.x,
            Orientation::Vertical => event.position.y,
        }
    }

    fn emit(&self, phase: GesturePhase, translation: f32) {
        log::trace!("pan {:?}: {}", phase, translation);
        (self.handler)(&PanEvent { phase, translation });
    }
}

impl GestureRecognizer for PanGesture {
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                if event.is_consumed() {
                    return false;
                }
                self.tracking = true;
                self.begun = false;
                self.press_position = self.axis_position(event);
                // Down is left unconsumed so the tap recognizer can arm too.
                true
            }
            PointerEventKind::Move => {
                if !self.tracking {
                    return false;
                }
                let position = self.axis_position(event);
                if !self.begun {
                    if (position - self.press_position).abs() > DRAG_THRESHOLD {
                        self.begun = true;
                        self.origin = position;
                        event.consume();
                        self.emit(GesturePhase::Began, 0.0);
                    }
                } else {
                    event.consume();
                    self.emit(GesturePhase::Changed, position - self.origin);
                }
                true
            }
            PointerEventKind::Up => {
                if !self.tracking {
                    return false;
                }
                if self.begun {
                    let translation = self.axis_position(event) - self.origin;
                    event.consume();
                    self.emit(GesturePhase::Ended, translation);
                }
                self.reset();
                true
            }
            PointerEventKind::Cancel => {
                if !self.tracking {
                    return false;
                }
                if self.begun {
                    let translation = self.axis_position(event) - self.origin;
                    self.emit(GesturePhase::Cancelled, translation);
                }
                self.reset();
                true
            }
        }
    }

    fn reset(&mut self) {
        self.tracking = false;
        self.begun = false;
    }
}
