//! Node hierarchy storage.
//!
//! Nodes live in a generational arena; every relation between nodes
//! (parent, children, visible-order links, selection membership) is a
//! [`NodeId`], never an owning handle. Ownership flows strictly tree →
//! roots → children: removing a node frees its whole subtree, and a stale
//! id afterwards simply resolves to `None`.

use std::cmp::Ordering;

use slotmap::{new_key_type, SlotMap};

use crate::geometry::Rect;
use crate::render::ImageId;

new_key_type! {
    /// Weak reference to a node in a [`NodeTree`].
    pub struct NodeId;
}

/// Orders sibling nodes; applied recursively by [`NodeTree::sort_with`].
pub type NodeComparator = Box<dyn Fn(&Node, &Node) -> Ordering>;

/// One row in the hierarchy.
///
/// Construct detached with [`Node::new`], then attach via the tree. The
/// layout fields (`*_area`, `visible_index`, visible links, `odd`) are
/// derived state owned by the layout pass; they are stale from the moment
/// of any structural or expand/collapse mutation until the next recompute.
#[derive(Debug, Default)]
pub struct Node {
    label: String,
    expanded: bool,
    icon: Option<ImageId>,
    expanded_icon: Option<ImageId>,

    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,

    pub(crate) glyph_hot: bool,
    pub(crate) odd: bool,

    pub(crate) expand_area: Rect,
    pub(crate) icon_area: Rect,
    pub(crate) text_area: Rect,
    pub(crate) full_area: Rect,

    pub(crate) visible_index: Option<usize>,
    pub(crate) prev_visible: Option<NodeId>,
    pub(crate) next_visible: Option<NodeId>,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_icon(mut self, icon: ImageId) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_expanded_icon(mut self, icon: ImageId) -> Self {
        self.expanded_icon = Some(icon);
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub(crate) fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub fn icon(&self) -> Option<ImageId> {
        self.icon
    }

    pub fn expanded_icon(&self) -> Option<ImageId> {
        self.expanded_icon
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the expand glyph is under the pointer.
    pub fn is_glyph_hot(&self) -> bool {
        self.glyph_hot
    }

    /// Striping parity assigned during layout.
    pub fn is_odd(&self) -> bool {
        self.odd
    }

    pub fn expand_area(&self) -> Rect {
        self.expand_area
    }

    pub fn icon_area(&self) -> Rect {
        self.icon_area
    }

    pub fn text_area(&self) -> Rect {
        self.text_area
    }

    pub fn full_area(&self) -> Rect {
        self.full_area
    }

    /// Position in the flattened visible order; `None` while hidden under
    /// a collapsed ancestor.
    pub fn visible_index(&self) -> Option<usize> {
        self.visible_index
    }

    pub fn prev_visible(&self) -> Option<NodeId> {
        self.prev_visible
    }

    pub fn next_visible(&self) -> Option<NodeId> {
        self.next_visible
    }

    pub(crate) fn clear_layout(&mut self) {
        self.odd = false;
        self.expand_area = Rect::NONE;
        self.icon_area = Rect::NONE;
        self.text_area = Rect::NONE;
        self.full_area = Rect::NONE;
        self.visible_index = None;
        self.prev_visible = None;
        self.next_visible = None;
    }
}

/// The hierarchy: arena plus the ordered root sequence.
#[derive(Default)]
pub struct NodeTree {
    nodes: SlotMap<NodeId, Node>,
    roots: Vec<NodeId>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Attach a detached node under `parent`, or to the root sequence.
    ///
    /// The node is appended at the end of the target child sequence.
    pub fn insert(&mut self, parent: Option<NodeId>, mut node: Node) -> NodeId {
        node.parent = parent;
        node.clear_layout();
        let id = self.nodes.insert(node);
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(parent_node) => parent_node.children.push(id),
            None => {
                // Missing parent slot falls back to the root sequence.
                if let Some(n) = self.nodes.get_mut(id) {
                    n.parent = None;
                }
                self.roots.push(id);
            }
        }
        id
    }

    /// Detach `id` and free its entire subtree.
    ///
    /// Returns every freed id (the node itself plus all descendants) so
    /// the caller can scrub selection and drag state.
    pub fn remove(&mut self, id: NodeId) -> Vec<NodeId> {
        if !self.nodes.contains_key(id) {
            return Vec::new();
        }
        self.unlink(id);
        let mut freed = Vec::new();
        self.collect_subtree(id, &mut freed);
        for freed_id in &freed {
            self.nodes.remove(*freed_id);
        }
        freed
    }

    /// Detach `id` from its current owner without freeing it.
    pub(crate) fn unlink(&mut self, id: NodeId) {
        let parent = self.nodes.get(id).and_then(|n| n.parent);
        match parent {
            Some(p) => {
                if let Some(parent_node) = self.nodes.get_mut(p) {
                    parent_node.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|c| *c != id),
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = None;
        }
    }

    /// Re-attach a previously unlinked node as the last child of `parent`.
    pub(crate) fn attach_child(&mut self, parent: NodeId, id: NodeId) {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(id) {
            return;
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = Some(parent);
        }
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(id);
        }
    }

    /// The node plus all its descendants, pre-order.
    pub fn collect_subtree(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        out.push(id);
        for child in node.children.clone() {
            self.collect_subtree(child, out);
        }
    }

    /// Slash-joined labels from root to `id`.
    pub fn full_path(&self, id: NodeId) -> String {
        let mut labels = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(node) = self.nodes.get(current) else {
                break;
            };
            labels.push(node.label.as_str());
            cursor = node.parent;
        }
        labels.reverse();
        labels.join("/")
    }

    /// Depth-first pre-order path lookup; first exact match wins.
    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        for root in &self.roots {
            if let Some(found) = self.find_in(*root, path) {
                return Some(found);
            }
        }
        None
    }

    fn find_in(&self, id: NodeId, path: &str) -> Option<NodeId> {
        if self.full_path(id) == path {
            return Some(id);
        }
        let node = self.nodes.get(id)?;
        for child in &node.children {
            if let Some(found) = self.find_in(*child, path) {
                return Some(found);
            }
        }
        None
    }

    /// True when `ancestor` appears on `id`'s parent chain.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cursor = self.nodes.get(id).and_then(|n| n.parent);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.nodes.get(current).and_then(|n| n.parent);
        }
        false
    }

    /// True when every ancestor of `id` is expanded.
    pub fn is_visible(&self, id: NodeId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        let mut cursor = self.nodes.get(id).and_then(|n| n.parent);
        while let Some(current) = cursor {
            let Some(node) = self.nodes.get(current) else {
                return false;
            };
            if !node.expanded {
                return false;
            }
            cursor = node.parent;
        }
        true
    }

    /// Drop the hover flag on every node; true when any was set.
    pub(crate) fn clear_glyph_hot(&mut self) -> bool {
        let mut changed = false;
        for node in self.nodes.values_mut() {
            if node.glyph_hot {
                node.glyph_hot = false;
                changed = true;
            }
        }
        changed
    }

    /// Sort only the root sequence.
    pub(crate) fn sort_roots_with(&mut self, comparator: &NodeComparator) {
        let mut roots = std::mem::take(&mut self.roots);
        self.sort_ids(&mut roots, comparator);
        self.roots = roots;
    }

    /// Sort the root sequence and, recursively, every child sequence.
    pub fn sort_with(&mut self, comparator: &NodeComparator) {
        self.sort_roots_with(comparator);
        let all: Vec<NodeId> = self.roots.clone();
        for root in all {
            self.sort_descendants(root, comparator);
        }
    }

    /// Sort one node's direct children with the comparator.
    pub(crate) fn sort_children_with(&mut self, parent: NodeId, comparator: &NodeComparator) {
        let Some(node) = self.nodes.get_mut(parent) else {
            return;
        };
        let mut children = std::mem::take(&mut node.children);
        self.sort_ids(&mut children, comparator);
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children = children;
        }
    }

    fn sort_descendants(&mut self, id: NodeId, comparator: &NodeComparator) {
        self.sort_children_with(id, comparator);
        let children = self
            .nodes
            .get(id)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        for child in children {
            self.sort_descendants(child, comparator);
        }
    }

    fn sort_ids(&self, ids: &mut [NodeId], comparator: &NodeComparator) {
        ids.sort_by(|a, b| match (self.nodes.get(*a), self.nodes.get(*b)) {
            (Some(a), Some(b)) => comparator(a, b),
            _ => Ordering::Equal,
        });
    }

    /// Walk the visible-order chain starting at the first root.
    ///
    /// Only meaningful between a layout recompute and the next mutation.
    pub fn visible_iter(&self) -> VisibleIter<'_> {
        VisibleIter {
            tree: self,
            cursor: self.roots.first().copied(),
        }
    }
}

/// Iterator over the visible-order chain.
pub struct VisibleIter<'a> {
    tree: &'a NodeTree,
    cursor: Option<NodeId>,
}

impl Iterator for VisibleIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.cursor?;
        self.cursor = self.tree.get(current).and_then(|n| n.next_visible);
        Some(current)
    }
}
