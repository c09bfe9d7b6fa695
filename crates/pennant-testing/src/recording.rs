//! Delegate double that records every notification.

use pennant_ui::{BannerDelegate, DraggableBanner};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use pennant_ui_graphics::Rect;

/// Records bounds updates and dismiss requests for assertions.
///
/// Keep the returned `Rc` alive for the duration of the test - the banner
/// only holds a weak reference, exactly like a production delegate.
pub struct RecordingDelegate {
    bounds: RefCell<Vec<Rect>>,
    dismissals: Cell<usize>,
}

impl RecordingDelegate {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            bounds: RefCell::new(Vec::new()),
            dismissals: Cell::new(0),
        })
    }

    /// Register a fresh recording delegate on `banner` and return it.
    pub fn attach(banner: &Rc<RefCell<DraggableBanner>>) -> Rc<Self> {
        let delegate = Self::new();
        let dyn_delegate: Rc<dyn BannerDelegate> = delegate.clone();
        let weak: Weak<dyn BannerDelegate> = Rc::downgrade(&dyn_delegate);
        banner.borrow_mut().set_delegate(weak);
        delegate
    }

    pub fn bounds_updates(&self) -> Vec<Rect> {
        self.bounds.borrow().clone()
    }

    pub fn bounds_update_count(&self) -> usize {
        self.bounds.borrow().len()
    }

    pub fn last_bounds(&self) -> Option<Rect> {
        self.bounds.borrow().last().copied()
    }

    pub fn dismiss_count(&self) -> usize {
        self.dismissals.get()
    }
}

impl BannerDelegate for RecordingDelegate {
    fn bounds_did_update(&self, bounds: Rect) {
        self.bounds.borrow_mut().push(bounds);
    }

    fn dismiss_requested(&self) {
        self.dismissals.set(self.dismissals.get() + 1);
    }
}
