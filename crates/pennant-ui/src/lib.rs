//! The Pennant banner: a draggable, dismissible message view.
//!
//! [`DraggableBanner`] shows a title, a message, an optional image, and a
//! drag indicator. Pulling it downward raises its height ceiling and lets
//! it grow; pulling it upward past its resting height rubber-bands the
//! whole view with an amplified offset until the dismiss threshold is
//! crossed. The gesture state machine lives in [`drag::DragController`];
//! the banner wires it to the layout solver and to a weakly-held delegate
//! that observes bounds changes and dismiss requests.

pub mod appearance;
pub mod banner;
pub mod drag;
pub mod layout;

#[cfg(test)]
mod tests;

pub use appearance::BannerAppearance;
pub use banner::{BannerConfig, BannerDelegate, Draggable, DraggableBanner, TapHandler, Tappable};
pub use drag::{DragController, DragSample, DEFAULT_RESTING_HEIGHT, RUBBER_BAND_AMPLIFICATION};
pub use layout::SubviewFrames;
