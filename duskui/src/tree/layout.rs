//! Visible-order layout pass.
//!
//! Walks the hierarchy pre-order, descending only into expanded nodes, and
//! assigns every visited node its row geometry, its visible index, its
//! even/odd stripe, and its links in the doubly-linked visible chain.
//! Everything else is cleared; a hidden row keeps no stale geometry.

use crate::geometry::{Rect, Size};
use crate::render::TextMetrics;

use super::node::{NodeId, NodeTree};

/// Expand-glyph box edge length.
pub const GLYPH_SIZE: i32 = 16;
/// Node icon edge length.
pub const ICON_SIZE: i32 = 16;

/// Inputs the layout pass needs from the widget.
pub(crate) struct LayoutParams<'a> {
    pub item_height: i32,
    pub indent: i32,
    pub show_icons: bool,
    pub metrics: &'a dyn TextMetrics,
}

/// Owns the derived layout state and the dirty flag.
#[derive(Debug)]
pub struct LayoutIndexer {
    dirty: bool,
    content_size: Size,
    visible_count: usize,
}

struct Walk {
    y: i32,
    odd: bool,
    index: usize,
    prev: Option<NodeId>,
    max_text_right: i32,
}

impl LayoutIndexer {
    pub fn new() -> Self {
        Self {
            dirty: true,
            content_size: Size::default(),
            visible_count: 0,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Overall content extent: max text right edge × total visible height.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Number of nodes on the visible chain after the last recompute.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Recompute geometry and the visible chain for the whole tree.
    ///
    /// Idempotent; cheap to call when nothing is dirty. The caller must
    /// not invoke this mid-drag (rectangles would shift under the
    /// pointer); the widget defers until the drag ends.
    pub(crate) fn recompute(&mut self, tree: &mut NodeTree, params: &LayoutParams<'_>) {
        if !self.dirty {
            return;
        }

        let mut all = Vec::new();
        for root in tree.roots().to_vec() {
            tree.collect_subtree(root, &mut all);
        }
        for id in &all {
            if let Some(node) = tree.get_mut(*id) {
                node.clear_layout();
            }
        }

        let mut walk = Walk {
            y: 0,
            odd: false,
            index: 0,
            prev: None,
            max_text_right: 0,
        };
        for root in tree.roots().to_vec() {
            visit(tree, root, 0, params, &mut walk);
        }

        self.content_size = Size::new(walk.max_text_right, walk.y);
        self.visible_count = walk.index;
        self.dirty = false;

        log::debug!(
            "[layout] recomputed tree layout: {} visible nodes, content {}x{}",
            self.visible_count,
            self.content_size.width,
            self.content_size.height
        );
    }

    /// Hit rectangle for a row, spanning the entire visible width.
    ///
    /// Wider than the node's own `full_area` so selection and hover work
    /// past the end of the text. Degenerate sentinel when any ancestor is
    /// collapsed.
    pub(crate) fn full_row_area(
        &self,
        tree: &NodeTree,
        id: NodeId,
        viewport_width: i32,
        item_height: i32,
    ) -> Rect {
        if !tree.is_visible(id) {
            return Rect::NONE;
        }
        let Some(node) = tree.get(id) else {
            return Rect::NONE;
        };
        if node.visible_index().is_none() {
            return Rect::NONE;
        }
        let width = self.content_size.width.max(viewport_width);
        Rect::new(0, node.full_area().top(), width, item_height)
    }
}

impl Default for LayoutIndexer {
    fn default() -> Self {
        Self::new()
    }
}

fn visit(tree: &mut NodeTree, id: NodeId, indent: i32, params: &LayoutParams<'_>, walk: &mut Walk) {
    let (text_right, expanded, children) = {
        let Some(node) = tree.get(id) else {
            return;
        };
        let text_width = params.metrics.text_width(node.label());
        let expanded = node.is_expanded();
        let children = node.children().to_vec();

        let glyph_top = walk.y + params.item_height / 2 - GLYPH_SIZE / 2;
        let expand_area = Rect::new(indent + 3, glyph_top, GLYPH_SIZE, GLYPH_SIZE);

        let icon_top = walk.y + params.item_height / 2 - ICON_SIZE / 2;
        let icon_area = if params.show_icons {
            Rect::new(expand_area.right() + 2, icon_top, ICON_SIZE, ICON_SIZE)
        } else {
            Rect::new(expand_area.right(), icon_top, 0, 0)
        };

        let text_area = Rect::new(
            icon_area.right() + 2,
            walk.y,
            text_width + 1,
            params.item_height,
        );
        let full_area = Rect::new(indent, walk.y, text_area.right() - indent, params.item_height);

        let Some(node) = tree.get_mut(id) else {
            return;
        };
        node.expand_area = expand_area;
        node.icon_area = icon_area;
        node.text_area = text_area;
        node.full_area = full_area;
        node.odd = walk.odd;
        node.visible_index = Some(walk.index);
        node.prev_visible = walk.prev;
        node.next_visible = None;

        (text_area.right(), expanded, children)
    };

    if let Some(prev) = walk.prev {
        if let Some(prev_node) = tree.get_mut(prev) {
            prev_node.next_visible = Some(id);
        }
    }
    walk.prev = Some(id);

    walk.y += params.item_height;
    walk.odd = !walk.odd;
    walk.index += 1;
    walk.max_text_right = walk.max_text_right.max(text_right + 2);

    if expanded {
        for child in children {
            visit(tree, child, indent + params.indent, params, walk);
        }
    }
}
