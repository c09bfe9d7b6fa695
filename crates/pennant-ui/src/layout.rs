//! Subview box solver.
//!
//! The banner's box model mirrors its constraint set: the image box sits at
//! the leading edge with fixed appearance-given dimensions, the title and
//! message share a text column between the image and the trailing edge, and
//! the drag indicator is pinned centered above the bottom edge. The
//! message is the one compressible box - when the height ceiling clamps
//! the banner, the message shrinks first.

use crate::appearance::BannerAppearance;
use pennant_ui_graphics::Rect;

/// Gap between horizontally or vertically adjacent subviews.
pub(crate) const INTERIOR_GAP: f32 = 8.0;
/// Vertical gap between the title box and the message box.
pub(crate) const TITLE_MESSAGE_GAP: f32 = 5.0;

/// Computed frames of the banner's subviews, in banner-local coordinates.
///
/// The image box is always reserved - the bitmap is optional, the space is
/// not, so the text column keeps a stable position whether or not an image
/// was configured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubviewFrames {
    pub image: Rect,
    pub title: Rect,
    pub message: Rect,
    pub drag_indicator: Rect,
}

impl SubviewFrames {
    pub(crate) fn zero() -> Self {
        Self {
            image: Rect::default(),
            title: Rect::default(),
            message: Rect::default(),
            drag_indicator: Rect::default(),
        }
    }
}

fn text_column(appearance: &BannerAppearance, width: f32) -> (f32, f32) {
    let insets = appearance.content_insets;
    let x = insets.left + appearance.image_size.width + INTERIOR_GAP;
    let column_width = (width - x - insets.right).max(0.0);
    (x, column_width)
}

/// Height the banner wants with no ceiling applied: the full text stack,
/// but never less than the image box demands.
pub(crate) fn natural_height(
    appearance: &BannerAppearance,
    title: &str,
    message: &str,
    width: f32,
) -> f32 {
    let insets = appearance.content_insets;
    let (_, column_width) = text_column(appearance, width);
    let title_height = appearance
        .title_style
        .measure(title, column_width, Some(1))
        .height;
    let message_height = appearance
        .message_style
        .measure(message, column_width, None)
        .height;

    let text_stack = insets.top
        + title_height
        + TITLE_MESSAGE_GAP
        + message_height
        + INTERIOR_GAP
        + appearance.drag_indicator_size.height
        + insets.bottom;
    let image_stack = insets.vertical_sum() + appearance.image_size.height;
    text_stack.max(image_stack)
}

/// Place the subviews inside a banner of the given final size.
pub(crate) fn solve(
    appearance: &BannerAppearance,
    title: &str,
    message: &str,
    width: f32,
    height: f32,
) -> SubviewFrames {
    let insets = appearance.content_insets;
    let (column_x, column_width) = text_column(appearance, width);
    let title_height = appearance
        .title_style
        .measure(title, column_width, Some(1))
        .height;

    let image_frame = Rect::new(
        insets.left,
        insets.top,
        appearance.image_size.width,
        appearance.image_size.height,
    );
    let title_frame = Rect::new(column_x, insets.top, column_width, title_height);

    let indicator_frame = Rect::new(
        (width - appearance.drag_indicator_size.width) / 2.0,
        height - insets.bottom - appearance.drag_indicator_size.height,
        appearance.drag_indicator_size.width,
        appearance.drag_indicator_size.height,
    );

    let message_y = title_frame.max_y() + TITLE_MESSAGE_GAP;
    let message_height = (indicator_frame.y - INTERIOR_GAP - message_y).max(0.0);
    let message_frame = Rect::new(column_x, message_y, column_width, message_height);

    SubviewFrames {
        image: image_frame,
        title: title_frame,
        message: message_frame,
        drag_indicator: indicator_frame,
    }
}
