//! Drag-and-drop reparenting state machine.
//!
//! `Idle → ProvisionalPress → Dragging → {drop, cancel} → Idle`. A press
//! on a row body becomes provisional; the first pointer move away from the
//! press point promotes it to a real drag (when node moving is enabled) or
//! abandons it back to a plain click.

use crate::error::MoveError;
use crate::geometry::Point;
use crate::viewport::Viewport;

use super::node::{NodeId, NodeTree};

/// Pointer indicator the host should show while a drag is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragCursor {
    #[default]
    Default,
    /// Armed over a valid drop target.
    Move,
    /// No target, or the target fails validity.
    No,
}

/// How a move-validity check reports rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityMode {
    /// Live check during drag; rejection only affects the cursor.
    Preview,
    /// Committed drop; rejection surfaces a user-facing error.
    Commit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DragState {
    Idle,
    /// Pressed on a row; may become a drag or resolve to a plain click.
    Provisional { node: NodeId, pos: Point },
    Dragging {
        nodes: Vec<NodeId>,
        drop: Option<NodeId>,
    },
}

#[derive(Debug)]
pub struct DragController {
    state: DragState,
    cursor: DragCursor,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            cursor: DragCursor::Default,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn cursor(&self) -> DragCursor {
        self.cursor
    }

    /// Set the cursor indicator; true when it changed (repaint needed).
    pub(crate) fn set_cursor(&mut self, cursor: DragCursor) -> bool {
        if self.cursor != cursor {
            self.cursor = cursor;
            true
        } else {
            false
        }
    }

    pub(crate) fn press_origin(&self) -> Option<(NodeId, Point)> {
        match self.state {
            DragState::Provisional { node, pos } => Some((node, pos)),
            _ => None,
        }
    }

    pub fn drag_nodes(&self) -> &[NodeId] {
        match &self.state {
            DragState::Dragging { nodes, .. } => nodes,
            _ => &[],
        }
    }

    pub fn drop_node(&self) -> Option<NodeId> {
        match &self.state {
            DragState::Dragging { drop, .. } => *drop,
            _ => None,
        }
    }

    pub(crate) fn begin_press(&mut self, node: NodeId, pos: Point) {
        self.state = DragState::Provisional { node, pos };
    }

    pub(crate) fn abandon_press(&mut self) {
        if matches!(self.state, DragState::Provisional { .. }) {
            self.state = DragState::Idle;
        }
    }

    /// Promote the provisional press into an active drag.
    ///
    /// The drag set is the current selection minus any node that already
    /// has a selected ancestor, so a subtree is never moved twice.
    pub(crate) fn start(&mut self, tree: &NodeTree, selection: &[NodeId]) {
        let nodes: Vec<NodeId> = selection
            .iter()
            .copied()
            .filter(|id| {
                !selection
                    .iter()
                    .any(|other| *other != *id && tree.is_ancestor(*other, *id))
            })
            .collect();
        log::debug!("[drag] started with {} node(s)", nodes.len());
        self.state = DragState::Dragging { nodes, drop: None };
        self.cursor = DragCursor::Move;
    }

    /// Update the armed drop candidate; true when it changed.
    pub(crate) fn set_drop(&mut self, candidate: Option<NodeId>) -> bool {
        match &mut self.state {
            DragState::Dragging { drop, .. } if *drop != candidate => {
                *drop = candidate;
                true
            }
            _ => false,
        }
    }

    /// Leave the drag (dropped or cancelled) and restore the cursor.
    pub(crate) fn stop(&mut self) {
        log::debug!("[drag] stopped");
        self.state = DragState::Idle;
        self.cursor = DragCursor::Default;
    }

    /// Scroll one step toward the pointer when it sits outside an edge of
    /// the visible area. Called from the host's periodic drag timer; each
    /// axis' step is the overflow distance clamped to `max_step`.
    pub(crate) fn autoscroll(&self, pointer: Point, viewport: &mut dyn Viewport, max_step: i32) {
        if !self.is_dragging() {
            return;
        }
        let visible = viewport.visible_area();
        let mut x = visible.x;
        let mut y = visible.y;

        if pointer.y < visible.top() {
            y -= (visible.top() - pointer.y).min(max_step);
        } else if pointer.y > visible.bottom() {
            y += (pointer.y - visible.bottom()).min(max_step);
        }

        if pointer.x < visible.left() {
            x -= (visible.left() - pointer.x).min(max_step);
        } else if pointer.x > visible.right() {
            x += (pointer.x - visible.right()).min(max_step);
        }

        if x != visible.x || y != visible.y {
            viewport.scroll_to(x.max(0), y.max(0));
        }
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

/// The reparent validity rule, shared by live preview and committed drops.
///
/// Rejects dropping a node onto itself, onto its current parent, or onto
/// any of its own descendants. Callers handle the no-target case before
/// calling. In [`ValidityMode::Preview`] the caller only inspects
/// `is_err()` and flips the cursor; in [`ValidityMode::Commit`] the error
/// is surfaced to the user, so rejections are also logged here.
pub(crate) fn can_move_nodes(
    tree: &NodeTree,
    drag_nodes: &[NodeId],
    drop: NodeId,
    mode: ValidityMode,
) -> Result<(), MoveError> {
    let result = check_move(tree, drag_nodes, drop);
    if mode == ValidityMode::Commit {
        if let Err(err) = &result {
            log::debug!("[drag] move rejected: {err}");
        }
    }
    result
}

fn check_move(tree: &NodeTree, drag_nodes: &[NodeId], drop: NodeId) -> Result<(), MoveError> {
    for id in drag_nodes {
        let Some(node) = tree.get(*id) else {
            continue;
        };
        if *id == drop {
            return Err(MoveError::SameLocation {
                label: node.label().to_string(),
            });
        }
        if node.parent() == Some(drop) {
            return Err(MoveError::AlreadyChild {
                label: node.label().to_string(),
            });
        }
        if tree.is_ancestor(*id, drop) {
            return Err(MoveError::DestinationIsDescendant {
                label: node.label().to_string(),
            });
        }
    }
    Ok(())
}
