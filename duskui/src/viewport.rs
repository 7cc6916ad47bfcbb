//! Scrollable-viewport collaborator contract.

use crate::geometry::{Rect, Size};

/// A scroll window over widget content, owned by the host.
///
/// All rectangles and offsets are in content coordinates: `visible_area`
/// is the slice of content currently on screen, and `scroll_to` moves its
/// top-left corner. Implementations clamp to the valid range themselves.
pub trait Viewport {
    /// The portion of the content currently visible.
    fn visible_area(&self) -> Rect;

    /// Total scrollable extent, pushed by the widget after layout.
    fn set_content_size(&mut self, size: Size);

    /// Scroll so the visible area's top-left corner is at `(x, y)`.
    fn scroll_to(&mut self, x: i32, y: i32);
}
