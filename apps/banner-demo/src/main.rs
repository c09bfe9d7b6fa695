//! Scripted walkthrough of the banner's gesture model.
//!
//! No window, no renderer: the shell is driven with synthetic pointer
//! input and the banner's observable outputs (bounds notifications, the
//! visual offset, the dismiss request) are logged as they happen.

use pennant_app_shell::BannerShell;
use pennant_ui::{BannerConfig, BannerDelegate};
use pennant_ui_graphics::{Bitmap, Color, Rect};
use std::rc::{Rc, Weak};

struct LoggingDelegate;

impl BannerDelegate for LoggingDelegate {
    fn bounds_did_update(&self, bounds: Rect) {
        log::info!(
            "bounds -> {:.0}x{:.0} at ({:.0}, {:.0})",
            bounds.width,
            bounds.height,
            bounds.x,
            bounds.y
        );
    }

    fn dismiss_requested(&self) {
        log::info!("dismiss requested - the host would remove the banner now");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Pennant banner demo ===");
    println!("Scripted pointer input, three acts:");
    println!("  1. pull down - the banner grows with the finger");
    println!("  2. pull up   - height pins, the view rubber-bands at 1.4x");
    println!("  3. keep pulling - the dismiss threshold fires");
    println!();

    let config = BannerConfig::new(
        "Scheduled maintenance",
        "Deploys are paused for the next hour while the database failover \
         rehearsal runs. Anything queued will pick back up automatically.",
    )
    .with_image(Bitmap::solid(48, 48, Color::LIGHT_GRAY))
    .with_tap_handler(|banner| log::info!("tapped: {}", banner.title()));

    let mut shell = BannerShell::new(config);

    let delegate: Rc<dyn BannerDelegate> = Rc::new(LoggingDelegate);
    let weak: Weak<dyn BannerDelegate> = Rc::downgrade(&delegate);
    shell.banner().borrow_mut().set_delegate(weak);

    shell.set_viewport(320.0, 640.0);

    // Act 1: grow.
    shell.set_cursor(160.0, 32.0);
    shell.pointer_pressed();
    for y in [44.0, 56.0, 72.0, 88.0] {
        shell.set_cursor(160.0, y);
    }
    log::info!(
        "grown: ceiling {:.1}",
        shell.banner().borrow().height_ceiling()
    );
    shell.pointer_released();

    // Act 2: rubber-band.
    shell.set_cursor(160.0, 32.0);
    shell.pointer_pressed();
    for y in [40.0, 30.0, 20.0, 10.0] {
        shell.set_cursor(160.0, y);
    }
    log::info!(
        "rubber-banding: offset {:.1}",
        shell.banner().borrow().visual_offset().y
    );

    // Act 3: past the threshold.
    shell.set_cursor(160.0, -30.0);
    shell.pointer_released();

    // A parting tap.
    shell.set_cursor(160.0, 32.0);
    shell.pointer_pressed();
    shell.pointer_released();
}
