//! Gesture recognizers over the shared pointer stream.

mod pan;
mod tap;

pub use pan::{Orientation, PanEvent, PanGesture};
pub use tap::TapGesture;

use crate::input::types::PointerEvent;
use smallvec::SmallVec;

/// Phase of a recognized gesture, reported to gesture handlers.
///
/// Raw pointer events (`Down`/`Move`/`Up`/`Cancel`) are a different
/// vocabulary: a recognizer turns a run of pointer events into a
/// began/changed*/ended (or cancelled) gesture sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A state machine that consumes pointer events and emits gesture callbacks.
pub trait GestureRecognizer {
    /// Process one pointer event. Returns true when the recognizer acted on
    /// the event (tracking state changed or a callback fired).
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool;

    /// Drop any in-flight gesture state.
    fn reset(&mut self);
}

/// An ordered set of recognizers sharing one pointer stream.
///
/// Order matters: a recognizer that consumes an event hides it from the
/// ones after it in the same dispatch (pan is registered before tap so a
/// drag-in-progress silences the tap).
#[derive(Default)]
pub struct GestureSet {
    recognizers: SmallVec<[Box<dyn GestureRecognizer>; 2]>,
}

impl GestureSet {
    pub fn new() -> Self {
        Self {
            recognizers: SmallVec::new(),
        }
    }

    pub fn add(&mut self, recognizer: Box<dyn GestureRecognizer>) {
        self.recognizers.push(recognizer);
    }

    pub fn dispatch(&mut self, event: &PointerEvent) {
        for recognizer in self.recognizers.iter_mut() {
            recognizer.on_pointer_event(event);
        }
    }
}
