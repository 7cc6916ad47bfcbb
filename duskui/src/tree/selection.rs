//! Anchored single/multi selection over tree nodes.
//!
//! The selection is an ordered, duplicate-free sequence of node ids. Two
//! anchors (`start`, `end`) remember the endpoints of the last directional
//! action and drive shift-extended ranges.

use super::node::{NodeId, NodeTree};

#[derive(Debug, Default)]
pub struct SelectionModel {
    selected: Vec<NodeId>,
    anchor_start: Option<NodeId>,
    anchor_end: Option<NodeId>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[NodeId] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected.contains(&id)
    }

    pub fn anchor_start(&self) -> Option<NodeId> {
        self.anchor_start
    }

    pub fn anchor_end(&self) -> Option<NodeId> {
        self.anchor_end
    }

    pub(crate) fn set_anchor_end(&mut self, id: NodeId) {
        self.anchor_end = Some(id);
    }

    /// Clear everything and select exactly `id`; both anchors move to it.
    /// Returns true when the selection contents changed.
    pub fn select_single(&mut self, id: NodeId) -> bool {
        let changed = self.selected.as_slice() != [id];
        self.selected.clear();
        self.selected.push(id);
        self.anchor_start = Some(id);
        self.anchor_end = Some(id);
        changed
    }

    /// Replace the selection with `ids` (deduplicated, order kept).
    ///
    /// With `update_anchors`, both anchors move to the last selected node.
    pub fn select_many(&mut self, ids: &[NodeId], update_anchors: bool) -> bool {
        let mut next: Vec<NodeId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !next.contains(id) {
                next.push(*id);
            }
        }
        let changed = self.selected != next;
        self.selected = next;
        if update_anchors {
            if let Some(last) = self.selected.last().copied() {
                self.anchor_start = Some(last);
                self.anchor_end = Some(last);
            }
        }
        changed
    }

    /// Replace the selection with the contiguous visible run from `from`
    /// to `to`, in visible order. Anchors are left untouched.
    pub fn select_range(&mut self, tree: &NodeTree, from: NodeId, to: NodeId) -> bool {
        let run = visible_run(tree, from, to);
        self.select_many(&run, false)
    }

    /// Add `id` if absent (anchors move to it), remove it if present
    /// (anchors are repaired). Returns true when the contents changed.
    pub fn toggle(&mut self, tree: &NodeTree, id: NodeId) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
            self.repair_anchors(tree, id);
        } else {
            self.selected.push(id);
            self.anchor_start = Some(id);
            self.anchor_end = Some(id);
        }
        true
    }

    /// Drop every id in `removed` from the selection (after a structural
    /// removal). Anchors pointing at removed nodes fall back to the first
    /// survivor, or clear out entirely.
    pub fn remove_nodes(&mut self, removed: &[NodeId]) -> bool {
        let before = self.selected.len();
        self.selected.retain(|id| !removed.contains(id));

        let fallback = self.selected.first().copied();
        if self
            .anchor_start
            .is_some_and(|a| removed.contains(&a))
        {
            self.anchor_start = fallback;
        }
        if self.anchor_end.is_some_and(|a| removed.contains(&a)) {
            self.anchor_end = fallback;
        }
        self.selected.len() != before
    }

    /// Anchor repair after removing `id` from the selection.
    ///
    /// The removed endpoint is reassigned to the adjacent visible node in
    /// the direction away from the other anchor; if both anchors sat on
    /// the removed node they collapse to the first remaining selection,
    /// or clear when nothing is left.
    fn repair_anchors(&mut self, tree: &NodeTree, id: NodeId) {
        if self.anchor_start == Some(id) && self.anchor_end == Some(id) {
            match self.selected.first().copied() {
                Some(first) => {
                    self.anchor_start = Some(first);
                    self.anchor_end = Some(first);
                }
                None => {
                    self.anchor_start = None;
                    self.anchor_end = None;
                }
            }
            return;
        }

        let index_of = |node: Option<NodeId>| node.and_then(|n| tree.get(n)?.visible_index());
        let removed_index = index_of(Some(id));

        if self.anchor_start == Some(id) {
            let end_index = index_of(self.anchor_end);
            self.anchor_start = match (end_index, removed_index) {
                (Some(end), Some(removed)) if end < removed => {
                    tree.get(id).and_then(|n| n.prev_visible())
                }
                (Some(end), Some(removed)) if end > removed => {
                    tree.get(id).and_then(|n| n.next_visible())
                }
                _ => self.anchor_end,
            };
        }

        if self.anchor_end == Some(id) {
            let start_index = index_of(self.anchor_start);
            self.anchor_end = match (start_index, removed_index) {
                (Some(start), Some(removed)) if start < removed => {
                    tree.get(id).and_then(|n| n.prev_visible())
                }
                (Some(start), Some(removed)) if start > removed => {
                    tree.get(id).and_then(|n| n.next_visible())
                }
                _ => self.anchor_start,
            };
        }
    }
}

/// Contiguous run along the visible chain from `from` to `to`, inclusive,
/// in visible order. Direction comes from comparing visible indices; equal
/// indices (or a broken chain) yield just `from`.
fn visible_run(tree: &NodeTree, from: NodeId, to: NodeId) -> Vec<NodeId> {
    let index = |id: NodeId| tree.get(id).and_then(|n| n.visible_index());
    let (Some(from_index), Some(to_index)) = (index(from), index(to)) else {
        return vec![from];
    };

    let mut run = vec![from];
    if from_index == to_index {
        return run;
    }

    let forward = from_index < to_index;
    let mut cursor = from;
    while cursor != to {
        let next = tree.get(cursor).and_then(|n| {
            if forward {
                n.next_visible()
            } else {
                n.prev_visible()
            }
        });
        match next {
            Some(next) => {
                run.push(next);
                cursor = next;
            }
            None => break,
        }
    }
    if !forward {
        run.reverse();
    }
    run
}
