//! Pure math/data primitives shared by the pennant crates.
//!
//! Nothing in this crate draws or touches a platform: geometry, color,
//! text units, and pixel buffers are plain values so the layout solver and
//! tests stay deterministic.

pub mod bitmap;
pub mod color;
pub mod geometry;
pub mod typography;

pub use bitmap::Bitmap;
pub use color::Color;
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use typography::{FontWeight, TextStyle};
