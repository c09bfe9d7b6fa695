//! The drag/resize/dismiss state machine.
//!
//! [`DragController`] maps a stream of cumulative vertical pan translations
//! into two mutually exclusive outputs per sample: a height ceiling (the
//! `height <= ceiling` bound the layout solver honors) while the drag grows
//! the view, or an amplified rubber-band offset while the drag compresses
//! it below its resting height. Crossing the dismiss threshold is reported
//! to the caller; the controller itself never dismisses anything.

/// Resting (collapsed) height of a banner unless configured otherwise.
pub const DEFAULT_RESTING_HEIGHT: f32 = 64.0;

/// Factor applied to below-resting travel. Greater than 1: the view slides
/// faster than the finger, a stretchy resistance that still feels eager.
pub const RUBBER_BAND_AMPLIFICATION: f32 = 1.4;

/// Ephemeral per-gesture state. Created at began, dropped at ended or
/// cancelled; a repeated began replaces it wholesale.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    start_height: f32,
    active: bool,
}

/// Outcome of one `changed` sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSample {
    /// The ceiling followed the finger above resting height; offset is
    /// identity.
    Grew,
    /// Height pinned at resting; the view slid by the amplified offset.
    RubberBanded,
    /// The amplified offset reached the view's own height. Offset snaps to
    /// identity for this frame and the caller is expected to dismiss.
    DismissTriggered,
}

/// Drag state machine for a single vertical gesture axis.
///
/// Every sample recomputes ceiling and offset from the session's captured
/// start height and the cumulative translation - there is no incremental
/// integration to drift.
#[derive(Debug)]
pub struct DragController {
    resting_height: f32,
    ceiling: f32,
    offset_y: f32,
    session: Option<DragSession>,
}

impl DragController {
    /// Panics if `resting_height` is not strictly positive; a banner with
    /// no resting height has no growing/rubber-banding boundary and no
    /// dismiss threshold, so construction fails loudly rather than
    /// producing a half-working view.
    pub fn new(resting_height: f32) -> Self {
        assert!(
            resting_height > 0.0,
            "resting height must be positive, got {resting_height}"
        );
        Self {
            resting_height,
            ceiling: resting_height,
            offset_y: 0.0,
            session: None,
        }
    }

    pub fn resting_height(&self) -> f32 {
        self.resting_height
    }

    /// Current `height <= ceiling` bound for the layout solver. Always >= 0.
    pub fn ceiling(&self) -> f32 {
        self.ceiling
    }

    /// Vertical translation of the whole view. Non-zero only while the
    /// drag is in rubber-band territory.
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Gesture began: capture the height the view currently renders at and
    /// start a fresh session. Calling this mid-session (a began with no
    /// intervening ended) re-captures the start height instead of drifting.
    pub fn begin(&mut self, current_height: f32) {
        let start_height = current_height.max(0.0);
        log::debug!("drag began at height {start_height}");
        self.ceiling = start_height;
        self.session = Some(DragSession {
            start_height,
            active: false,
        });
    }

    /// Gesture changed: apply the cumulative `translation` since began.
    ///
    /// Returns `None` (and leaves all state untouched) when no session is
    /// open - the event source guarantees began precedes changed, so this
    /// only happens on misuse.
    pub fn update(&mut self, translation: f32) -> Option<DragSample> {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => {
                log::warn!("drag change with no open session; ignoring");
                return None;
            }
        };
        session.active = true;

        let new_height = session.start_height + translation;
        log::trace!("drag sample: translation {translation}, height {new_height}");
        if new_height > self.resting_height {
            self.ceiling = new_height;
            self.offset_y = 0.0;
            Some(DragSample::Grew)
        } else {
            self.ceiling = self.resting_height;
            let amplified = -(self.resting_height - new_height) * RUBBER_BAND_AMPLIFICATION;
            if amplified > -self.resting_height {
                self.offset_y = amplified;
                Some(DragSample::RubberBanded)
            } else {
                self.offset_y = 0.0;
                log::debug!("dismiss threshold crossed at offset {amplified}");
                Some(DragSample::DismissTriggered)
            }
        }
    }

    /// Gesture ended or cancelled: settle.
    ///
    /// Settle policy: snap back to the resting state - ceiling returns to
    /// the resting height, the offset to identity, and the session is
    /// dropped. Cancelled takes the same path as ended.
    pub fn finish(&mut self) {
        if self.session.take().is_some() {
            log::debug!("drag finished; snapping back to resting height");
        }
        self.ceiling = self.resting_height;
        self.offset_y = 0.0;
    }
}
