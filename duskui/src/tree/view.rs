//! The tree-list widget: composition root over the node hierarchy,
//! layout indexer, selection model, hit tester and drag controller.
//!
//! The host owns the event loop, the paint surface and the scroll
//! viewport; it feeds pointer/keyboard input in, drives the periodic drag
//! timer, and drains [`TreeEvent`]s out. All coordinates handed to the
//! widget are content coordinates.

use crate::error::MoveError;
use crate::event::{Key, Modifiers, MouseButton};
use crate::geometry::{Point, Rect, Size};
use crate::render::{Alignment, ImageId, MonospaceMetrics, Renderer, TextMetrics};
use crate::theme::Palette;
use crate::viewport::Viewport;

use super::drag::{can_move_nodes, DragController, DragCursor, ValidityMode};
use super::hit::{self, Hit, HitRegion};
use super::layout::{LayoutIndexer, LayoutParams};
use super::node::{Node, NodeComparator, NodeId, NodeTree};
use super::selection::SelectionModel;

/// Recognized widget options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    /// Row height in pixels.
    pub item_height: i32,
    /// Horizontal space added per hierarchy level, in pixels.
    pub indent: i32,
    /// Allow more than one node to be selected at once.
    pub multi_select: bool,
    /// Allow nodes to be moved by drag and drop.
    pub allow_move_nodes: bool,
    /// Render node icons next to the expand glyph.
    pub show_icons: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            item_height: 20,
            indent: 20,
            multi_select: false,
            allow_move_nodes: false,
            show_icons: false,
        }
    }
}

/// The six expand-glyph images, owned by the host's painting backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeGlyphs {
    pub closed: ImageId,
    pub closed_hover: ImageId,
    pub closed_hover_selected: ImageId,
    pub open: ImageId,
    pub open_hover: ImageId,
    pub open_hover_selected: ImageId,
}

/// Host hooks into the drag-and-drop flow.
///
/// All methods default to no-ops; implement the ones you need.
pub trait DragPolicy {
    /// Redirect a drop from `node` up to its parent (e.g. "always drop
    /// onto containers, never onto leaves").
    fn force_drop_to_parent(&self, tree: &NodeTree, node: NodeId) -> bool {
        let _ = (tree, node);
        false
    }

    /// Called just before dragged nodes are reparented.
    fn move_nodes(&mut self, tree: &NodeTree, nodes: &[NodeId], target: NodeId) {
        let _ = (tree, nodes, target);
    }

    /// Called after dragged nodes have been reparented.
    fn nodes_moved(&mut self, tree: &NodeTree, nodes: &[NodeId]) {
        let _ = (tree, nodes);
    }
}

struct NoopDragPolicy;

impl DragPolicy for NoopDragPolicy {}

/// Notifications raised by the widget, drained via
/// [`TreeView::take_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    SelectionChanged,
    NodeExpanded(NodeId),
    NodeCollapsed(NodeId),
    NodesMoved(Vec<NodeId>),
    /// A committed drop failed validity; the host should notify the user.
    MoveRejected(MoveError),
}

pub struct TreeView {
    tree: NodeTree,
    layout: LayoutIndexer,
    selection: SelectionModel,
    drag: DragController,
    options: TreeOptions,
    sorter: Option<NodeComparator>,
    metrics: Box<dyn TextMetrics>,
    policy: Box<dyn DragPolicy>,
    glyphs: Option<TreeGlyphs>,
    palette: Palette,
    focused: bool,
    viewport_size: Size,
    events: Vec<TreeEvent>,
    needs_paint: bool,
}

impl TreeView {
    pub fn new() -> Self {
        Self::with_options(TreeOptions::default())
    }

    pub fn with_options(options: TreeOptions) -> Self {
        Self {
            tree: NodeTree::new(),
            layout: LayoutIndexer::new(),
            selection: SelectionModel::new(),
            drag: DragController::new(),
            options,
            sorter: None,
            metrics: Box::new(MonospaceMetrics::default()),
            policy: Box::new(NoopDragPolicy),
            glyphs: None,
            palette: Palette::dark(),
            focused: true,
            viewport_size: Size::default(),
            events: Vec::new(),
            needs_paint: true,
        }
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn set_item_height(&mut self, item_height: i32) {
        self.options.item_height = item_height;
        self.invalidate();
    }

    pub fn set_indent(&mut self, indent: i32) {
        self.options.indent = indent;
        self.invalidate();
    }

    pub fn set_multi_select(&mut self, multi_select: bool) {
        self.options.multi_select = multi_select;
    }

    pub fn set_allow_move_nodes(&mut self, allow: bool) {
        self.options.allow_move_nodes = allow;
    }

    pub fn set_show_icons(&mut self, show_icons: bool) {
        self.options.show_icons = show_icons;
        self.invalidate();
    }

    /// Configure the sibling comparator; `None` keeps insertion order.
    pub fn set_sorter(&mut self, sorter: Option<NodeComparator>) {
        self.sorter = sorter;
    }

    pub fn set_metrics(&mut self, metrics: Box<dyn TextMetrics>) {
        self.metrics = metrics;
        self.invalidate();
    }

    pub fn set_drag_policy(&mut self, policy: Box<dyn DragPolicy>) {
        self.policy = policy;
    }

    pub fn set_glyphs(&mut self, glyphs: TreeGlyphs) {
        self.glyphs = Some(glyphs);
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.needs_paint = true;
    }

    /// Whether the widget has keyboard focus (selection tint).
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.needs_paint = true;
        }
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.tree.get(id)
    }

    /// Attach a detached node to the root sequence.
    pub fn add_root(&mut self, node: Node) -> NodeId {
        let id = self.tree.insert(None, node);
        if let Some(comparator) = &self.sorter {
            self.tree.sort_roots_with(comparator);
        }
        self.invalidate();
        id
    }

    /// Attach a detached node as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.tree.insert(Some(parent), node);
        self.invalidate();
        id
    }

    /// Remove a node and its whole subtree; affected nodes leave the
    /// selection and any live drag state.
    pub fn remove_node(&mut self, id: NodeId) {
        let removed = self.tree.remove(id);
        if removed.is_empty() {
            return;
        }
        if self.selection.remove_nodes(&removed) {
            self.events.push(TreeEvent::SelectionChanged);
        }
        if self
            .drag
            .drag_nodes()
            .iter()
            .any(|d| removed.contains(d))
        {
            self.drag.stop();
        }
        if self.drag.drop_node().is_some_and(|d| removed.contains(&d)) {
            self.drag.set_drop(None);
        }
        self.invalidate();
    }

    /// Depth-first pre-order path lookup; first exact match wins.
    pub fn find_node(&self, path: &str) -> Option<NodeId> {
        self.tree.find_by_path(path)
    }

    /// Sort the root sequence and every descendant sequence with the
    /// configured comparator. No-op without one.
    pub fn sort(&mut self) {
        let Some(comparator) = &self.sorter else {
            return;
        };
        self.tree.sort_with(comparator);
        self.invalidate();
    }

    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        let Some(node) = self.tree.get_mut(id) else {
            return;
        };
        if node.is_expanded() == expanded {
            return;
        }
        node.set_expanded(expanded);
        self.events.push(if expanded {
            TreeEvent::NodeExpanded(id)
        } else {
            TreeEvent::NodeCollapsed(id)
        });
        self.invalidate();
    }

    pub fn toggle_expanded(&mut self, id: NodeId) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        let expanded = node.is_expanded();
        self.set_expanded(id, !expanded);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> &[NodeId] {
        self.selection.selected()
    }

    pub fn selection_model(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selection.is_selected(id)
    }

    /// Clear the selection and select exactly `id`.
    pub fn select_node(&mut self, id: NodeId) {
        if self.tree.get(id).is_none() {
            return;
        }
        if self.selection.select_single(id) {
            self.events.push(TreeEvent::SelectionChanged);
        }
        self.needs_paint = true;
    }

    /// Replace the selection with `ids`; with `update_anchors`, both
    /// anchors move to the last node.
    pub fn select_nodes(&mut self, ids: &[NodeId], update_anchors: bool) {
        let existing: Vec<NodeId> = ids
            .iter()
            .copied()
            .filter(|id| self.tree.get(*id).is_some())
            .collect();
        if self.selection.select_many(&existing, update_anchors) {
            self.events.push(TreeEvent::SelectionChanged);
        }
        self.needs_paint = true;
    }

    /// Replace the selection with the contiguous visible run between the
    /// two nodes. Anchors stay where they are.
    pub fn select_nodes_between(&mut self, from: NodeId, to: NodeId) {
        if self.selection.select_range(&self.tree, from, to) {
            self.events.push(TreeEvent::SelectionChanged);
        }
        self.needs_paint = true;
    }

    /// Add `id` to the selection, or remove it with anchor repair.
    pub fn toggle_node(&mut self, id: NodeId) {
        if self.tree.get(id).is_none() {
            return;
        }
        if self.selection.toggle(&self.tree, id) {
            self.events.push(TreeEvent::SelectionChanged);
        }
        self.needs_paint = true;
    }

    /// Extend the anchored range so it ends at `id`.
    fn select_anchored_range(&mut self, id: NodeId) {
        self.selection.set_anchor_end(id);
        let start = self.selection.anchor_start().unwrap_or(id);
        if self.selection.select_range(&self.tree, start, id) {
            self.events.push(TreeEvent::SelectionChanged);
        }
        self.needs_paint = true;
    }

    /// Expand ancestors of every selected node, then scroll minimally so
    /// the scroll target (lone selection, or the end anchor under
    /// multi-select) is fully inside the viewport.
    pub fn ensure_visible(&mut self, viewport: &mut dyn Viewport) {
        if self.selection.is_empty() {
            return;
        }

        let selected: Vec<NodeId> = self.selection.selected().to_vec();
        for id in &selected {
            let mut cursor = self.tree.get(*id).and_then(|n| n.parent());
            while let Some(ancestor) = cursor {
                cursor = self.tree.get(ancestor).and_then(|n| n.parent());
                self.set_expanded(ancestor, true);
            }
        }

        self.viewport_size = viewport.visible_area().size();
        self.relayout_if_needed();

        let target = if self.options.multi_select {
            self.selection
                .anchor_end()
                .or_else(|| selected.first().copied())
        } else {
            selected.first().copied()
        };
        let Some(target) = target else {
            return;
        };
        let Some(node) = self.tree.get(target) else {
            return;
        };

        let item_top = node.full_area().top();
        let item_bottom = item_top + self.options.item_height;
        let visible = viewport.visible_area();

        if item_top < visible.top() {
            viewport.scroll_to(visible.x, item_top);
        }
        if item_bottom > visible.bottom() {
            viewport.scroll_to(visible.x, item_bottom - visible.height);
        }
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Bring layout up to date and push the content size to the viewport.
    /// Call once before painting; idempotent.
    pub fn ensure_layout(&mut self, viewport: &mut dyn Viewport) {
        self.viewport_size = viewport.visible_area().size();
        self.relayout_if_needed();
        viewport.set_content_size(self.layout.content_size());
    }

    /// Number of nodes on the visible chain.
    pub fn visible_node_count(&self) -> usize {
        self.layout.visible_count()
    }

    pub fn content_size(&self) -> Size {
        self.layout.content_size()
    }

    /// Resolve a pointer location (content coordinates) to the row under
    /// it, distinguishing the expand glyph from the row body.
    pub fn hit_test(&mut self, pos: Point) -> Option<Hit> {
        self.relayout_if_needed();
        hit::hit_test(
            &self.tree,
            &self.layout,
            pos,
            self.viewport_size.width,
            self.options.item_height,
        )
    }

    /// Full-width hit rectangle for a row; degenerate sentinel when any
    /// ancestor is collapsed.
    pub fn node_full_row_area(&self, id: NodeId) -> Rect {
        self.layout.full_row_area(
            &self.tree,
            id,
            self.viewport_size.width,
            self.options.item_height,
        )
    }

    fn relayout_if_needed(&mut self) {
        // Frozen during a drag so rows don't shift under the pointer;
        // stop_drag re-runs it.
        if self.drag.is_dragging() {
            return;
        }
        let params = LayoutParams {
            item_height: self.options.item_height,
            indent: self.options.indent,
            show_icons: self.options.show_icons,
            metrics: self.metrics.as_ref(),
        };
        self.layout.recompute(&mut self.tree, &params);
    }

    fn invalidate(&mut self) {
        self.layout.mark_dirty();
        self.needs_paint = true;
    }

    // -------------------------------------------------------------------------
    // Events out
    // -------------------------------------------------------------------------

    pub fn take_events(&mut self) -> Vec<TreeEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether a repaint is needed; cleared by [`TreeView::paint`].
    pub fn is_dirty(&self) -> bool {
        self.needs_paint
    }

    /// Pointer indicator the host should apply while dragging.
    pub fn cursor(&self) -> DragCursor {
        self.drag.cursor()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // -------------------------------------------------------------------------
    // Pointer input
    // -------------------------------------------------------------------------

    pub fn on_mouse_down(&mut self, pos: Point, button: MouseButton, modifiers: Modifiers) {
        if button != MouseButton::Left && button != MouseButton::Right {
            return;
        }
        let Some(hit) = self.hit_test(pos) else {
            return;
        };

        match (hit.region, button) {
            (HitRegion::ExpandGlyph, MouseButton::Left) => {
                self.toggle_expanded(hit.node);
            }
            (HitRegion::ExpandGlyph, _) => {}
            (HitRegion::Row, MouseButton::Left) => {
                if self.options.multi_select && modifiers.shift {
                    self.select_anchored_range(hit.node);
                } else if self.options.multi_select && modifiers.ctrl {
                    self.toggle_node(hit.node);
                } else {
                    if !self.selection.is_selected(hit.node) {
                        self.select_node(hit.node);
                    }
                    self.drag.begin_press(hit.node, pos);
                }
            }
            (HitRegion::Row, MouseButton::Right) => {
                if self.options.multi_select && (modifiers.shift || modifiers.ctrl) {
                    return;
                }
                if !self.selection.is_selected(hit.node) {
                    self.select_node(hit.node);
                }
            }
            (HitRegion::Row, MouseButton::Middle) => {}
        }
    }

    pub fn on_mouse_move(&mut self, pos: Point) {
        if let Some((_, press_pos)) = self.drag.press_origin() {
            if pos != press_pos {
                if self.options.allow_move_nodes {
                    self.drag.start(&self.tree, self.selection.selected());
                    self.needs_paint = true;
                    self.check_hover(pos);
                    self.update_drag_cursor();
                    return;
                }
                // Moving without node-move enabled resolves to a plain click.
                self.drag.abandon_press();
            }
        }

        if self.drag.is_dragging() {
            if let Some(drop) = self.drag.drop_node() {
                let rect = self.layout.full_row_area(
                    &self.tree,
                    drop,
                    self.viewport_size.width,
                    self.options.item_height,
                );
                if !rect.contains(pos) && self.drag.set_drop(None) {
                    self.needs_paint = true;
                }
            }
        }

        self.check_hover(pos);

        if self.drag.is_dragging() {
            self.update_drag_cursor();
        }
    }

    pub fn on_mouse_up(&mut self, pos: Point) {
        if self.drag.is_dragging() {
            self.handle_drop();
        }
        if let Some((node, press_pos)) = self.drag.press_origin() {
            if pos == press_pos {
                self.select_node(node);
            }
            self.drag.abandon_press();
        }
    }

    pub fn on_double_click(&mut self, pos: Point, modifiers: Modifiers) {
        if modifiers.ctrl {
            return;
        }
        let Some(hit) = self.hit_test(pos) else {
            return;
        };
        // The glyph already toggles on single click; avoid a double-toggle.
        if hit.region == HitRegion::Row {
            self.toggle_expanded(hit.node);
        }
    }

    pub fn on_mouse_leave(&mut self) {
        if self.tree.clear_glyph_hot() {
            self.needs_paint = true;
        }
        if self.drag.is_dragging() && self.drag.set_drop(None) {
            self.needs_paint = true;
            self.update_drag_cursor();
        }
    }

    /// Periodic sample of the pointer while a drag is live; scrolls the
    /// viewport toward a pointer resting outside its edges, one step per
    /// tick, each axis clamped to one item height.
    pub fn on_drag_tick(&mut self, pointer: Point, viewport: &mut dyn Viewport) {
        if !self.drag.is_dragging() {
            return;
        }
        self.viewport_size = viewport.visible_area().size();
        self.drag
            .autoscroll(pointer, viewport, self.options.item_height);
    }

    fn check_hover(&mut self, pos: Point) {
        let visible: Vec<NodeId> = self.tree.visible_iter().collect();

        if self.drag.is_dragging() {
            for id in visible {
                let rect = self.layout.full_row_area(
                    &self.tree,
                    id,
                    self.viewport_size.width,
                    self.options.item_height,
                );
                if rect.contains(pos) {
                    let candidate = if self.drag.drag_nodes().contains(&id) {
                        None
                    } else {
                        Some(id)
                    };
                    if self.drag.set_drop(candidate) {
                        self.needs_paint = true;
                    }
                    break;
                }
            }
            return;
        }

        for id in visible {
            let Some(node) = self.tree.get(id) else {
                continue;
            };
            let hot = node.expand_area().contains(pos);
            if node.is_glyph_hot() != hot {
                if let Some(node) = self.tree.get_mut(id) {
                    node.glyph_hot = hot;
                }
                self.needs_paint = true;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard input
    // -------------------------------------------------------------------------

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers, viewport: &mut dyn Viewport) {
        if self.drag.is_dragging() || self.tree.is_empty() {
            return;
        }
        if !matches!(key, Key::Up | Key::Down | Key::Left | Key::Right) {
            return;
        }
        self.viewport_size = viewport.visible_area().size();
        self.relayout_if_needed();

        let Some(end) = self.selection.anchor_end() else {
            if let Some(first) = self.tree.roots().first().copied() {
                self.select_node(first);
            }
            return;
        };

        match key {
            Key::Up | Key::Down => {
                let step = self.tree.get(end).and_then(|n| {
                    if key == Key::Up {
                        n.prev_visible()
                    } else {
                        n.next_visible()
                    }
                });
                let Some(step) = step else {
                    return;
                };
                if self.options.multi_select && modifiers.shift {
                    self.select_anchored_range(step);
                } else {
                    self.select_node(step);
                }
                self.ensure_visible(viewport);
            }
            Key::Left => {
                let node = self.tree.get(end);
                let expanded_parent =
                    node.is_some_and(|n| n.is_expanded() && !n.children().is_empty());
                if expanded_parent {
                    self.set_expanded(end, false);
                } else if let Some(parent) = node.and_then(|n| n.parent()) {
                    self.select_node(parent);
                    self.ensure_visible(viewport);
                }
            }
            Key::Right => {
                let node = self.tree.get(end);
                if node.is_some_and(|n| !n.is_expanded()) {
                    self.set_expanded(end, true);
                } else if let Some(first_child) =
                    node.and_then(|n| n.children().first().copied())
                {
                    self.select_node(first_child);
                    self.ensure_visible(viewport);
                }
            }
            _ => {}
        }
    }

    // -------------------------------------------------------------------------
    // Drag and drop
    // -------------------------------------------------------------------------

    fn update_drag_cursor(&mut self) {
        if !self.options.allow_move_nodes {
            return;
        }
        let cursor = match self.effective_drop_target() {
            None => DragCursor::No,
            Some(target) => {
                let valid = can_move_nodes(
                    &self.tree,
                    self.drag.drag_nodes(),
                    target,
                    ValidityMode::Preview,
                )
                .is_ok();
                if valid {
                    DragCursor::Move
                } else {
                    DragCursor::No
                }
            }
        };
        if self.drag.set_cursor(cursor) {
            self.needs_paint = true;
        }
    }

    /// Armed drop node after the policy's parent redirect.
    fn effective_drop_target(&self) -> Option<NodeId> {
        let drop = self.drag.drop_node()?;
        if self.policy.force_drop_to_parent(&self.tree, drop) {
            self.tree.get(drop).and_then(|n| n.parent())
        } else {
            Some(drop)
        }
    }

    fn handle_drop(&mut self) {
        if !self.options.allow_move_nodes {
            self.stop_drag();
            return;
        }
        let Some(target) = self.effective_drop_target() else {
            self.stop_drag();
            return;
        };
        let nodes = self.drag.drag_nodes().to_vec();

        match can_move_nodes(&self.tree, &nodes, target, ValidityMode::Commit) {
            Err(err) => {
                self.events.push(TreeEvent::MoveRejected(err));
            }
            Ok(()) => {
                let cached_selection: Vec<NodeId> = self.selection.selected().to_vec();

                self.policy.move_nodes(&self.tree, &nodes, target);
                for id in &nodes {
                    self.tree.unlink(*id);
                    self.tree.attach_child(target, *id);
                }
                if let Some(comparator) = &self.sorter {
                    self.tree.sort_children_with(target, comparator);
                }
                if self.tree.get(target).is_some_and(|n| !n.is_expanded()) {
                    self.set_expanded(target, true);
                }
                self.policy.nodes_moved(&self.tree, &nodes);

                // Selection survives reparenting.
                self.selection.select_many(&cached_selection, false);
                log::debug!("[drag] moved {} node(s)", nodes.len());
                self.events.push(TreeEvent::NodesMoved(nodes));
            }
        }

        self.stop_drag();
    }

    fn stop_drag(&mut self) {
        self.drag.stop();
        // Layout was frozen for the whole drag; recompute now.
        self.invalidate();
        self.relayout_if_needed();
    }

    // -------------------------------------------------------------------------
    // Painting
    // -------------------------------------------------------------------------

    /// Paint every visible row. The host calls [`TreeView::ensure_layout`]
    /// first so geometry and the viewport content size are current.
    pub fn paint(&mut self, renderer: &mut dyn Renderer) {
        self.relayout_if_needed();
        let visible: Vec<NodeId> = self.tree.visible_iter().collect();
        for id in visible {
            self.draw_node(id, renderer);
        }
        self.needs_paint = false;
    }

    fn draw_node(&self, id: NodeId, renderer: &mut dyn Renderer) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        let row = self.layout.full_row_area(
            &self.tree,
            id,
            self.viewport_size.width,
            self.options.item_height,
        );
        if row.is_empty() {
            return;
        }

        let selected = self.selection.is_selected(id);
        let selection_color = if self.focused {
            self.palette.blue_selection
        } else {
            self.palette.grey_selection
        };
        let mut background = if node.is_odd() {
            self.palette.header_background
        } else {
            self.palette.grey_background
        };
        if selected || self.drag.drop_node() == Some(id) {
            background = selection_color;
        }
        renderer.fill_rect(row, background);

        if !node.children().is_empty() {
            if let Some(glyphs) = &self.glyphs {
                let image = match (node.is_expanded(), node.is_glyph_hot(), selected) {
                    (true, false, _) => glyphs.open,
                    (true, true, false) => glyphs.open_hover,
                    (true, true, true) => glyphs.open_hover_selected,
                    (false, false, _) => glyphs.closed,
                    (false, true, false) => glyphs.closed_hover,
                    (false, true, true) => glyphs.closed_hover_selected,
                };
                let pos = Point::new(node.expand_area().x - 1, node.expand_area().y - 1);
                renderer.draw_image(image, pos);
            }
        }

        if self.options.show_icons {
            let icon = if node.is_expanded() {
                node.expanded_icon().or_else(|| node.icon())
            } else {
                node.icon()
            };
            if let Some(icon) = icon {
                renderer.draw_image(icon, node.icon_area().position());
            }
        }

        renderer.draw_text(
            node.label(),
            self.palette.light_text,
            node.text_area(),
            Alignment::Left,
        );
    }
}

impl Default for TreeView {
    fn default() -> Self {
        Self::new()
    }
}
