//! Robot-style driver for banner interaction tests.

use pennant_app_shell::BannerShell;
use pennant_foundation::DRAG_THRESHOLD;
use pennant_ui::{BannerConfig, DraggableBanner};
use std::cell::RefCell;
use std::rc::Rc;

/// Drives a real shell with synthetic pointer input.
///
/// The granular `press_at` / `move_to` / `release` API mirrors what a
/// platform backend would deliver; `begin_vertical_drag` + `drag_to` sit on
/// top of it and account for the slop so tests can speak in exact gesture
/// translations.
pub struct BannerRobot {
    shell: BannerShell,
    cursor_x: f32,
    drag_origin: f32,
}

impl BannerRobot {
    /// Launch a shell at the given viewport size around a banner built
    /// from `config`.
    pub fn new(width: f32, height: f32, config: BannerConfig) -> Self {
        let mut shell = BannerShell::new(config);
        shell.set_viewport(width, height);
        Self {
            shell,
            cursor_x: 0.0,
            drag_origin: 0.0,
        }
    }

    pub fn shell(&mut self) -> &mut BannerShell {
        &mut self.shell
    }

    pub fn banner(&self) -> Rc<RefCell<DraggableBanner>> {
        self.shell.banner()
    }

    // Granular pointer control

    pub fn press_at(&mut self, x: f32, y: f32) {
        self.cursor_x = x;
        self.shell.set_cursor(x, y);
        self.shell.pointer_pressed();
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.cursor_x = x;
        self.shell.set_cursor(x, y);
    }

    pub fn release(&mut self) {
        self.shell.pointer_released();
    }

    pub fn cancel(&mut self) {
        self.shell.pointer_cancelled();
    }

    /// Press and release in place: a tap.
    pub fn tap_at(&mut self, x: f32, y: f32) {
        self.press_at(x, y);
        self.release();
    }

    // Translation-exact drag control

    /// Press at (x, y) and move just past the slop so the pan begins.
    /// After this call, [`drag_to`](Self::drag_to) positions the pointer
    /// at an exact gesture translation.
    pub fn begin_vertical_drag(&mut self, x: f32, y: f32) {
        self.press_at(x, y);
        self.drag_origin = y + DRAG_THRESHOLD + 0.5;
        self.shell.set_cursor(x, self.drag_origin);
    }

    /// Move the pointer so the pan's cumulative translation is exactly
    /// `translation`. Requires an open drag.
    pub fn drag_to(&mut self, translation: f32) {
        self.shell
            .set_cursor(self.cursor_x, self.drag_origin + translation);
    }

    pub fn end_drag(&mut self) {
        self.release();
    }

    // Convenience readbacks

    pub fn banner_height(&self) -> f32 {
        self.shell.banner().borrow().bounds().height
    }

    pub fn height_ceiling(&self) -> f32 {
        self.shell.banner().borrow().height_ceiling()
    }

    pub fn visual_offset_y(&self) -> f32 {
        self.shell.banner().borrow().visual_offset().y
    }
}
