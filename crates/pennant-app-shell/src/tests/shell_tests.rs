use crate::BannerShell;
use pennant_ui::BannerConfig;
use std::cell::Cell;
use std::rc::Rc;

const LONG_MESSAGE: &str =
    "A message with enough words in it to wrap across several lines of the \
     text column so the banner has real height to grow into.";

fn shell() -> BannerShell {
    let mut shell = BannerShell::new(BannerConfig::new("Heads up", LONG_MESSAGE));
    shell.set_viewport(320.0, 640.0);
    shell
}

#[test]
fn viewport_layout_produces_resting_bounds() {
    let shell = shell();
    let banner = shell.banner();
    assert_eq!(banner.borrow().bounds().width, 320.0);
    assert_eq!(banner.borrow().bounds().height, 64.0);
}

#[test]
fn press_drag_release_grows_then_snaps_back() {
    let mut shell = shell();
    let banner = shell.banner();

    shell.set_cursor(160.0, 40.0);
    shell.pointer_pressed();
    // Cross the 8px slop; the pan origin lands here.
    shell.set_cursor(160.0, 50.0);
    shell.set_cursor(160.0, 70.0);
    assert_eq!(banner.borrow().bounds().height, 84.0);

    shell.pointer_released();
    assert_eq!(banner.borrow().bounds().height, 64.0);
    assert!(!banner.borrow().is_dragging());
}

#[test]
fn cursor_moves_without_press_are_ignored() {
    let mut shell = shell();
    let banner = shell.banner();

    shell.set_cursor(160.0, 40.0);
    shell.set_cursor(160.0, 400.0);
    assert_eq!(banner.borrow().bounds().height, 64.0);
    assert!(!banner.borrow().is_dragging());
}

#[test]
fn cancel_resets_like_release() {
    let mut shell = shell();
    let banner = shell.banner();

    shell.set_cursor(160.0, 40.0);
    shell.pointer_pressed();
    shell.set_cursor(160.0, 50.0);
    shell.set_cursor(160.0, 90.0);
    assert!(banner.borrow().is_dragging());

    shell.pointer_cancelled();
    assert_eq!(banner.borrow().bounds().height, 64.0);
    assert!(!banner.borrow().is_dragging());
}

#[test]
fn tap_reaches_the_banner_handler() {
    let taps = Rc::new(Cell::new(0));
    let sink = taps.clone();
    let config = BannerConfig::new("Heads up", LONG_MESSAGE)
        .with_tap_handler(move |_| sink.set(sink.get() + 1));
    let mut shell = BannerShell::new(config);
    shell.set_viewport(320.0, 640.0);

    shell.set_cursor(160.0, 32.0);
    shell.pointer_pressed();
    shell.pointer_released();
    assert_eq!(taps.get(), 1);
}

#[test]
fn press_outside_the_banner_is_inert() {
    let taps = Rc::new(Cell::new(0));
    let sink = taps.clone();
    let config = BannerConfig::new("Heads up", LONG_MESSAGE)
        .with_tap_handler(move |_| sink.set(sink.get() + 1));
    let mut shell = BannerShell::new(config);
    shell.set_viewport(320.0, 640.0);

    // The banner rests at 64px; y = 400 misses it entirely.
    shell.set_cursor(160.0, 400.0);
    shell.pointer_pressed();
    shell.set_cursor(160.0, 440.0);
    shell.pointer_released();

    assert_eq!(taps.get(), 0);
    assert!(!shell.banner().borrow().is_dragging());
    assert_eq!(shell.banner().borrow().bounds().height, 64.0);

    // The next on-banner press works normally.
    shell.set_cursor(160.0, 32.0);
    shell.pointer_pressed();
    shell.pointer_released();
    assert_eq!(taps.get(), 1);
}

#[test]
fn double_press_is_ignored() {
    let mut shell = shell();
    shell.set_cursor(160.0, 40.0);
    shell.pointer_pressed();
    shell.pointer_pressed();
    shell.pointer_released();
    // Still consistent: not pressed, not dragging.
    assert!(!shell.banner().borrow().is_dragging());
}
