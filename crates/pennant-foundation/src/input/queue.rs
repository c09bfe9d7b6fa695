//! Pointer event queue.
//!
//! A FIFO buffer between the platform boundary and the recognizers. The
//! host enqueues events as they arrive and drains them on its own schedule;
//! each drained event is handled to completion before the next one is seen,
//! which is the ordering guarantee the gesture state machines rely on.

use super::types::PointerEvent;
use std::collections::VecDeque;

#[derive(Default)]
pub struct PointerQueue {
    queue: VecDeque<PointerEvent>,
}

impl PointerQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push_back(event);
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerEvent),
    {
        while let Some(event) = self.queue.pop_front() {
            handler(event);
        }
    }
}
