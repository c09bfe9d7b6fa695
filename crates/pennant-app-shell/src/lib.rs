//! Single-threaded event shell for a banner.
//!
//! [`BannerShell`] is the executor/event queue every gesture and layout
//! operation is scheduled on. Host platforms feed it cursor state and
//! press/release/cancel edges; the shell turns those into pointer events,
//! queues them FIFO, and drains the queue synchronously - each event is
//! dispatched through the gesture set and handled to completion before the
//! next one is looked at. There is no background work and no implicit
//! shared runtime thread: the shell is `!Send` by construction (`Rc`
//! ownership throughout) and everything happens in the caller's thread.

use pennant_foundation::{
    GestureSet, PanGesture, PointerEvent, PointerEventKind, PointerQueue, TapGesture,
};
use pennant_ui::{BannerConfig, Draggable, DraggableBanner, Tappable};
use pennant_ui_graphics::Point;
use std::cell::RefCell;
use std::rc::Rc;
// Use web_time for cross-platform time support (native + WASM)
use web_time::Instant;

pub struct BannerShell {
    banner: Rc<RefCell<DraggableBanner>>,
    gestures: GestureSet,
    queue: PointerQueue,
    cursor: (f32, f32),
    pressed: bool,
    /// Whether the current press landed on the banner. A press outside it
    /// never reaches the recognizers, the way a gesture attached to a view
    /// only sees touches hitting that view.
    hit: bool,
    viewport: (f32, f32),
    start_time: Instant,
}

impl BannerShell {
    /// Build a shell around a freshly constructed banner and wire both
    /// recognizers to it. Pan is registered before tap so that a drag in
    /// progress consumes the stream out from under the tap recognizer.
    pub fn new(config: BannerConfig) -> Self {
        let banner = Rc::new(RefCell::new(DraggableBanner::new(config)));

        let mut gestures = GestureSet::new();
        let pan_target = banner.clone();
        gestures.add(Box::new(PanGesture::vertical(move |event| {
            pan_target.borrow_mut().handle_pan(event);
        })));
        let tap_target = banner.clone();
        gestures.add(Box::new(TapGesture::new(move |_point| {
            tap_target.borrow_mut().handle_tap();
        })));

        Self {
            banner,
            gestures,
            queue: PointerQueue::new(),
            cursor: (0.0, 0.0),
            pressed: false,
            hit: false,
            viewport: (0.0, 0.0),
            start_time: Instant::now(),
        }
    }

    /// The hosted banner. Callers may borrow it between events; holding a
    /// borrow across a pump is a programming error and will panic.
    pub fn banner(&self) -> Rc<RefCell<DraggableBanner>> {
        self.banner.clone()
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Resize the host viewport. The banner spans the viewport width; its
    /// height is its own business.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        self.banner.borrow_mut().layout(width);
    }

    /// Move the cursor. While a press is active this produces a pointer
    /// move; hover movement is not an event the banner cares about.
    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
        if self.pressed && self.hit {
            self.enqueue(PointerEventKind::Move);
            self.pump();
        }
    }

    pub fn pointer_pressed(&mut self) {
        if self.pressed {
            log::warn!("pointer_pressed while already pressed; ignoring");
            return;
        }
        self.pressed = true;
        self.hit = self
            .banner
            .borrow()
            .bounds()
            .contains(self.cursor.0, self.cursor.1);
        if !self.hit {
            log::trace!("press at {:?} missed the banner", self.cursor);
            return;
        }
        self.enqueue(PointerEventKind::Down);
        self.pump();
    }

    pub fn pointer_released(&mut self) {
        if !self.pressed {
            return;
        }
        self.pressed = false;
        if !self.hit {
            return;
        }
        self.hit = false;
        self.enqueue(PointerEventKind::Up);
        self.pump();
    }

    /// The platform revoked the pointer (window lost focus, touch
    /// sequence cancelled). Equivalent to a release for state-reset
    /// purposes; recognizers decide what to emit.
    pub fn pointer_cancelled(&mut self) {
        if !self.pressed {
            return;
        }
        self.pressed = false;
        if !self.hit {
            return;
        }
        self.hit = false;
        self.enqueue(PointerEventKind::Cancel);
        self.pump();
    }

    fn enqueue(&mut self, kind: PointerEventKind) {
        let uptime = self.start_time.elapsed().as_millis() as u64;
        let event = PointerEvent::new(kind, Point::new(self.cursor.0, self.cursor.1))
            .with_uptime(uptime);
        self.queue.push(event);
    }

    /// Drain the queue in order, each event handled to completion.
    fn pump(&mut self) {
        let Self {
            queue, gestures, ..
        } = self;
        queue.drain(|event| gestures.dispatch(&event));
    }
}

#[cfg(test)]
mod tests;
