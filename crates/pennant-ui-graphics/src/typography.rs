//! Text units and deterministic measurement.
//!
//! Measurement here is intentionally metric-free: a fixed advance-per-glyph
//! estimate and a line-height multiple derived from the font size. That keeps
//! the layout solver a pure function of its inputs, which is what the banner
//! needs — it reasons about box heights, not glyph shapes. A shaping backend
//! can replace these numbers without touching the callers.

use crate::geometry::Size;

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::NORMAL
    }
}

/// Text style (data only, no rendering)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_weight: FontWeight,
    /// Explicit line height; defaults to `font_size * 1.2` when absent.
    pub line_height: Option<f32>,
}

impl TextStyle {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            font_weight: FontWeight::NORMAL,
            line_height: None,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn resolved_line_height(&self) -> f32 {
        self.line_height.unwrap_or(self.font_size * 1.2)
    }

    /// Estimated horizontal advance per glyph.
    pub fn advance_width(&self) -> f32 {
        self.font_size * 0.5
    }

    /// Measure `text` wrapped greedily into `max_width`, capped at
    /// `max_lines` when given (extra content is truncated, not measured).
    ///
    /// Wrapping is word-based; a word longer than the line is broken at the
    /// glyph that no longer fits. Empty text still occupies one line, the
    /// same way a label with an empty string keeps its line height.
    pub fn measure(&self, text: &str, max_width: f32, max_lines: Option<usize>) -> Size {
        let advance = self.advance_width();
        let glyphs_per_line = ((max_width / advance).floor() as usize).max(1);

        let mut lines: usize = 0;
        let mut widest: usize = 0;
        for paragraph in text.split('\n') {
            let mut current: usize = 0;
            for word in paragraph.split_whitespace() {
                let mut remaining = word.chars().count();
                // Oversized words spill onto continuation lines.
                while remaining > glyphs_per_line {
                    if current > 0 {
                        lines += 1;
                        widest = widest.max(current);
                        current = 0;
                    }
                    lines += 1;
                    widest = widest.max(glyphs_per_line);
                    remaining -= glyphs_per_line;
                }
                let needed = if current == 0 { remaining } else { remaining + 1 };
                if current + needed > glyphs_per_line {
                    lines += 1;
                    widest = widest.max(current);
                    current = remaining;
                } else {
                    current += needed;
                }
            }
            lines += 1;
            widest = widest.max(current);
        }

        if let Some(cap) = max_lines {
            lines = lines.min(cap.max(1));
        }
        let width = (widest as f32 * advance).min(max_width);
        Size::new(width, lines as f32 * self.resolved_line_height())
    }
}
