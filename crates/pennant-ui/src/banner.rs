//! The draggable banner view.

use crate::appearance::BannerAppearance;
use crate::drag::{DragController, DragSample, DEFAULT_RESTING_HEIGHT};
use crate::layout::{self, SubviewFrames};
use pennant_foundation::{GesturePhase, PanEvent};
use pennant_ui_graphics::{Bitmap, Point, Rect};
use std::rc::{Rc, Weak};

/// Observer of banner geometry and intent. Held by the banner as a weak
/// back-reference: registering a delegate never keeps it alive, and a
/// dropped delegate silently turns notifications into no-ops.
///
/// Notifications are synchronous; a delegate must not re-enter the banner
/// that is notifying it.
pub trait BannerDelegate {
    /// The banner's frame changed (gesture-driven or external resize).
    /// Fires on every change, once per change, with no debouncing.
    fn bounds_did_update(&self, bounds: Rect);

    /// The drag crossed the dismiss threshold. Raised once per drag
    /// session; the host owns the actual removal from screen.
    fn dismiss_requested(&self);
}

/// Capability of a view that consumes pan gesture events.
pub trait Draggable {
    fn handle_pan(&mut self, event: &PanEvent);
}

/// Capability of a view that consumes completed taps.
pub trait Tappable {
    fn handle_tap(&mut self);
}

pub type TapHandler = Rc<dyn Fn(&DraggableBanner)>;

/// Construction parameters for a [`DraggableBanner`].
pub struct BannerConfig {
    title: String,
    message: String,
    image: Option<Bitmap>,
    appearance: Option<BannerAppearance>,
    resting_height: f32,
    tap_handler: Option<TapHandler>,
}

impl BannerConfig {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            image: None,
            appearance: None,
            resting_height: DEFAULT_RESTING_HEIGHT,
            tap_handler: None,
        }
    }

    pub fn with_image(mut self, image: Bitmap) -> Self {
        self.image = Some(image);
        self
    }

    /// Override the default appearance.
    pub fn with_appearance(mut self, appearance: BannerAppearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    /// Collapsed height of the banner. Must be strictly positive.
    pub fn with_resting_height(mut self, resting_height: f32) -> Self {
        self.resting_height = resting_height;
        self
    }

    pub fn with_tap_handler(mut self, handler: impl Fn(&DraggableBanner) + 'static) -> Self {
        self.tap_handler = Some(Rc::new(handler));
        self
    }
}

/// A banner view showing a title, a message, an optional image, and a drag
/// indicator, which the user can pull downward to enlarge and upward past
/// a threshold to dismiss.
///
/// The banner owns no presentation: it exposes its bounds, its subview
/// frames, and a visual offset, and signals a weakly-held delegate when
/// they change. Gesture input arrives through the [`Draggable`] and
/// [`Tappable`] capabilities, normally wired up by the shell's gesture set.
pub struct DraggableBanner {
    title: String,
    message: String,
    image: Option<Bitmap>,
    appearance: BannerAppearance,
    tap_handler: Option<TapHandler>,
    delegate: Option<Weak<dyn BannerDelegate>>,
    drag: DragController,
    bounds: Rect,
    frames: SubviewFrames,
    dismiss_signalled: bool,
}

impl DraggableBanner {
    pub fn new(config: BannerConfig) -> Self {
        Self {
            title: config.title,
            message: config.message,
            image: config.image,
            appearance: config.appearance.unwrap_or_default(),
            tap_handler: config.tap_handler,
            delegate: None,
            drag: DragController::new(config.resting_height),
            bounds: Rect::default(),
            frames: SubviewFrames::zero(),
            dismiss_signalled: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn image(&self) -> Option<&Bitmap> {
        self.image.as_ref()
    }

    pub fn appearance(&self) -> &BannerAppearance {
        &self.appearance
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn subview_frames(&self) -> SubviewFrames {
        self.frames
    }

    pub fn resting_height(&self) -> f32 {
        self.drag.resting_height()
    }

    pub fn height_ceiling(&self) -> f32 {
        self.drag.ceiling()
    }

    /// Translation applied to the whole view while rubber-banding.
    pub fn visual_offset(&self) -> Point {
        Point::new(0.0, self.drag.offset_y())
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn set_delegate(&mut self, delegate: Weak<dyn BannerDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Run a layout pass at the given width: measure the natural content
    /// height, clamp it by the drag controller's height ceiling, place the
    /// subviews, and publish the bounds if they changed.
    pub fn layout(&mut self, width: f32) {
        let natural = layout::natural_height(&self.appearance, &self.title, &self.message, width);
        let height = natural.min(self.drag.ceiling()).max(0.0);
        self.frames = layout::solve(&self.appearance, &self.title, &self.message, width, height);
        self.set_bounds(Rect::new(self.bounds.x, self.bounds.y, width, height));
    }

    fn relayout(&mut self) {
        self.layout(self.bounds.width);
    }

    fn set_bounds(&mut self, bounds: Rect) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            delegate.bounds_did_update(bounds);
        }
    }

    fn request_dismiss(&mut self) {
        if self.dismiss_signalled {
            return;
        }
        self.dismiss_signalled = true;
        log::debug!("banner requests dismissal");
        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            delegate.dismiss_requested();
        }
    }
}

impl Draggable for DraggableBanner {
    fn handle_pan(&mut self, event: &PanEvent) {
        match event.phase {
            GesturePhase::Began => {
                self.dismiss_signalled = false;
                self.drag.begin(self.bounds.height);
            }
            GesturePhase::Changed => {
                if let Some(sample) = self.drag.update(event.translation) {
                    if sample == DragSample::DismissTriggered {
                        self.request_dismiss();
                    }
                    self.relayout();
                }
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                self.drag.finish();
                self.dismiss_signalled = false;
                self.relayout();
            }
        }
    }
}

impl Tappable for DraggableBanner {
    fn handle_tap(&mut self) {
        if let Some(handler) = self.tap_handler.clone() {
            handler(self);
        }
    }
}
