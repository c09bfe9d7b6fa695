use pennant_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// Events can be consumed by recognizers (e.g. pan) to prevent other
/// recognizers (e.g. tap) from acting on them. This is how mutual exclusion
/// between the drag and tap gestures is implemented: the recognizers share
/// one event stream and the first to claim a sample marks it consumed.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Milliseconds since the host started, stamped by the event source.
    pub uptime: u64,
    /// Tracks whether this event has been consumed by a recognizer.
    /// Shared via Rc<Cell> so consumption is visible across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime: 0,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_uptime(mut self, uptime: u64) -> Self {
        self.uptime = uptime;
        self
    }

    /// Mark this event as consumed, preventing other recognizers from
    /// processing it.
    ///
    /// Example: the pan gesture consumes events once dragging starts so the
    /// tap recognizer stays silent for the rest of the gesture.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    /// Check if this event has been consumed by another recognizer.
    ///
    /// Recognizers should check this before processing. For example, tap
    /// must not fire if the release was consumed by an in-progress pan.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
