//! Testing utilities for Pennant.
//!
//! [`BannerRobot`] drives a real [`pennant_app_shell::BannerShell`] with
//! programmatic pointer input; [`RecordingDelegate`] captures everything a
//! banner tells its delegate so tests can assert on the notification
//! stream instead of poking at internals.

pub mod recording;
pub mod robot;

pub use recording::RecordingDelegate;
pub use robot::BannerRobot;
