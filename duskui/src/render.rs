//! Painting and text-measurement collaborator contracts.
//!
//! The toolkit core never touches pixels itself. A host supplies a
//! [`Renderer`] when it wants a widget painted and a [`TextMetrics`] so
//! layout can size text rectangles without a paint surface.

use unicode_width::UnicodeWidthStr;

use crate::geometry::{Point, Rect};
use crate::theme::Color;

/// Horizontal text alignment inside a target rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Opaque handle to an image owned by the host's painting backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Owner-drawn painting surface.
///
/// Text is drawn unwrapped and ellipsized when it overflows `rect`; the
/// font is whatever the host configured on the surface.
pub trait Renderer {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_image(&mut self, image: ImageId, pos: Point);
    fn draw_text(&mut self, text: &str, color: Color, rect: Rect, align: Alignment);
}

/// Measures label text for layout, in pixels.
pub trait TextMetrics {
    fn text_width(&self, text: &str) -> i32;
}

/// Fixed-advance metrics, sized by display column count.
///
/// Good enough for tests and terminal-style backends; GUI hosts supply
/// metrics backed by their font engine instead.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    pub char_width: i32,
}

impl MonospaceMetrics {
    pub const fn new(char_width: i32) -> Self {
        Self { char_width }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str) -> i32 {
        text.width() as i32 * self.char_width
    }
}
