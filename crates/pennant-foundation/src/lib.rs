//! Foundation elements for Pennant: pointer input and gesture recognition.

pub mod gesture_constants;
pub mod input;

#[cfg(test)]
mod tests;

pub use gesture_constants::DRAG_THRESHOLD;
pub use input::gestures::{
    GesturePhase, GestureRecognizer, GestureSet, Orientation, PanEvent, PanGesture, TapGesture,
};
pub use input::queue::PointerQueue;
pub use input::types::{PointerEvent, PointerEventKind, PointerId};
