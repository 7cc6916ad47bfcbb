//! Pointer-to-node resolution.

use crate::geometry::Point;

use super::layout::LayoutIndexer;
use super::node::{NodeId, NodeTree};

/// Which part of a row the pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The expand/collapse glyph box.
    ExpandGlyph,
    /// Anywhere else in the row.
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub node: NodeId,
    pub region: HitRegion,
}

/// Resolve a pointer location (content coordinates) to a row.
///
/// Tests each root's full-width row rectangle and descends into children
/// only through expanded nodes; rows under a collapsed ancestor occupy no
/// vertical space and cannot match.
pub(crate) fn hit_test(
    tree: &NodeTree,
    layout: &LayoutIndexer,
    point: Point,
    viewport_width: i32,
    item_height: i32,
) -> Option<Hit> {
    for root in tree.roots() {
        if let Some(hit) = hit_node(tree, layout, *root, point, viewport_width, item_height) {
            return Some(hit);
        }
    }
    None
}

fn hit_node(
    tree: &NodeTree,
    layout: &LayoutIndexer,
    id: NodeId,
    point: Point,
    viewport_width: i32,
    item_height: i32,
) -> Option<Hit> {
    let node = tree.get(id)?;
    let row = layout.full_row_area(tree, id, viewport_width, item_height);
    if row.contains(point) {
        let region = if node.expand_area().contains(point) {
            HitRegion::ExpandGlyph
        } else {
            HitRegion::Row
        };
        return Some(Hit { node: id, region });
    }

    if node.is_expanded() {
        for child in node.children() {
            if let Some(hit) = hit_node(tree, layout, *child, point, viewport_width, item_height) {
                return Some(hit);
            }
        }
    }
    None
}
