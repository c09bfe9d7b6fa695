//! Banner appearance values.

use pennant_ui_graphics::{Color, EdgeInsets, FontWeight, Size, TextStyle};

/// Visual parameters of a banner. Construction-time configuration; the
/// defaults are applied when a config carries no appearance of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct BannerAppearance {
    pub background_color: Color,
    pub foreground_color: Color,
    pub title_style: TextStyle,
    pub message_style: TextStyle,
    pub image_size: Size,
    pub image_corner_radius: f32,
    pub drag_indicator_color: Color,
    pub drag_indicator_size: Size,
    /// Inset between the banner edge and its outermost subviews.
    pub content_insets: EdgeInsets,
}

impl Default for BannerAppearance {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgb_u8(33, 33, 33),
            foreground_color: Color::WHITE,
            title_style: TextStyle::new(15.0).with_weight(FontWeight::SEMI_BOLD),
            message_style: TextStyle::new(13.0),
            image_size: Size::new(48.0, 48.0),
            image_corner_radius: 4.0,
            drag_indicator_color: Color::WHITE.with_alpha(0.5),
            drag_indicator_size: Size::new(36.0, 4.0),
            content_insets: EdgeInsets::uniform(8.0),
        }
    }
}
