//! Shared gesture constants for consistent touch/pointer handling.
//!
//! The pan and tap recognizers are intentionally calibrated against the same
//! threshold to avoid "dead zones" where gestures behave inconsistently.

/// Drag threshold in logical pixels.
///
/// If the pointer moves more than this distance from the initial press
/// position:
/// - the pan gesture begins (drag translation starts accumulating)
/// - the tap gesture is cancelled (a release won't fire the tap handler)
///
/// A single consistent threshold means a drag can never also read as a tap.
/// 8.0 is large enough to ignore finger jitter on touch screens, small
/// enough to feel responsive, and matches common platform conventions
/// (Android's ViewConfiguration touch slop is ~8dp).
pub const DRAG_THRESHOLD: f32 = 8.0;
