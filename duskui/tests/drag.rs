use duskui::tree::{DragPolicy, Node, NodeId, NodeTree, TreeOptions, TreeView};
use duskui::{
    DragCursor, Modifiers, MouseButton, MoveError, Point, Rect, Size, TreeEvent, Viewport,
};

struct TestViewport {
    visible: Rect,
    content: Size,
}

impl TestViewport {
    fn new(width: i32, height: i32) -> Self {
        Self {
            visible: Rect::new(0, 0, width, height),
            content: Size::default(),
        }
    }
}

impl Viewport for TestViewport {
    fn visible_area(&self) -> Rect {
        self.visible
    }

    fn set_content_size(&mut self, size: Size) {
        self.content = size;
    }

    fn scroll_to(&mut self, x: i32, y: i32) {
        self.visible.x = x;
        self.visible.y = y;
    }
}

/// Two expanded folders with two files each, ready for drag tests.
///
/// Visible order: alpha, a1, a2, beta, b1, b2.
struct Fixture {
    view: TreeView,
    vp: TestViewport,
    alpha: NodeId,
    a1: NodeId,
    a2: NodeId,
    beta: NodeId,
    b1: NodeId,
}

fn fixture() -> Fixture {
    let mut view = TreeView::with_options(TreeOptions {
        multi_select: true,
        allow_move_nodes: true,
        ..TreeOptions::default()
    });
    let alpha = view.add_root(Node::new("alpha").expanded(true));
    let a1 = view.add_child(alpha, Node::new("a1"));
    let a2 = view.add_child(alpha, Node::new("a2"));
    let beta = view.add_root(Node::new("beta").expanded(true));
    let b1 = view.add_child(beta, Node::new("b1"));
    view.add_child(beta, Node::new("b2"));

    let mut vp = TestViewport::new(400, 200);
    view.ensure_layout(&mut vp);
    Fixture {
        view,
        vp,
        alpha,
        a1,
        a2,
        beta,
        b1,
    }
}

fn row_point(view: &TreeView, id: NodeId) -> Point {
    let row = view.node_full_row_area(id);
    Point::new(row.left() + 150, row.top() + row.height / 2)
}

/// Press on `from`, drag over `to`, release.
fn drag(view: &mut TreeView, from: NodeId, to: NodeId) {
    let start = row_point(view, from);
    let end = row_point(view, to);
    view.on_mouse_down(start, MouseButton::Left, Modifiers::new());
    view.on_mouse_move(end);
    view.on_mouse_up(end);
}

fn labels_of(view: &TreeView, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .map(|id| view.node(*id).unwrap().label().to_string())
        .collect()
}

// ============================================================================
// Drag Lifecycle Tests
// ============================================================================

#[test]
fn test_press_without_movement_is_a_click() {
    let mut f = fixture();
    f.view.select_nodes(&[f.a1, f.a2], true);

    let at = row_point(&f.view, f.a1);
    f.view.on_mouse_down(at, MouseButton::Left, Modifiers::new());
    assert!(!f.view.is_dragging(), "press alone never starts a drag");
    f.view.on_mouse_up(at);

    assert_eq!(f.view.selection(), [f.a1], "release collapses to the pressed node");
}

#[test]
fn test_movement_promotes_press_to_drag() {
    let mut f = fixture();
    let start = row_point(&f.view, f.a1);
    f.view.on_mouse_down(start, MouseButton::Left, Modifiers::new());
    f.view.on_mouse_move(Point::new(start.x + 1, start.y));
    assert!(f.view.is_dragging());

    f.view.on_mouse_move(row_point(&f.view, f.beta));
    assert_eq!(f.view.cursor(), DragCursor::Move);
}

#[test]
fn test_movement_without_move_permission_abandons_press() {
    let mut f = fixture();
    f.view.set_allow_move_nodes(false);

    drag(&mut f.view, f.a1, f.b1);
    assert!(!f.view.is_dragging());
    assert_eq!(f.view.node(f.a1).unwrap().parent(), Some(f.alpha));
    assert_eq!(f.view.selection(), [f.a1], "resolved as a plain click");
}

#[test]
fn test_hovering_own_drag_set_arms_no_target() {
    let mut f = fixture();
    let start = row_point(&f.view, f.a1);
    f.view.on_mouse_down(start, MouseButton::Left, Modifiers::new());
    f.view.on_mouse_move(Point::new(start.x + 1, start.y));

    // Still over the dragged node's own row.
    assert_eq!(f.view.cursor(), DragCursor::No);
}

#[test]
fn test_release_without_target_cancels() {
    let mut f = fixture();
    let start = row_point(&f.view, f.a1);
    f.view.on_mouse_down(start, MouseButton::Left, Modifiers::new());
    // Below every row: no drop candidate.
    f.view.on_mouse_move(Point::new(start.x, 190));
    f.view.on_mouse_up(Point::new(start.x, 190));

    assert!(!f.view.is_dragging());
    assert_eq!(f.view.cursor(), DragCursor::Default);
    assert_eq!(f.view.node(f.a1).unwrap().parent(), Some(f.alpha));
    f.view.take_events();
    assert!(f.view.take_events().is_empty());
}

// ============================================================================
// Validity Tests
// ============================================================================

#[test]
fn test_drop_onto_current_parent_is_rejected() {
    let mut f = fixture();
    f.view.take_events();
    drag(&mut f.view, f.a1, f.alpha);

    assert_eq!(f.view.node(f.a1).unwrap().parent(), Some(f.alpha));
    let events = f.view.take_events();
    assert!(events.iter().any(|ev| matches!(
        ev,
        TreeEvent::MoveRejected(MoveError::AlreadyChild { label }) if label == "a1"
    )));
}

#[test]
fn test_drop_onto_own_descendant_is_rejected() {
    let mut f = fixture();
    f.view.take_events();
    drag(&mut f.view, f.alpha, f.a2);

    assert_eq!(f.view.node(f.a2).unwrap().parent(), Some(f.alpha));
    assert!(f.view.node(f.alpha).unwrap().parent().is_none());
    let events = f.view.take_events();
    assert!(events.iter().any(|ev| matches!(
        ev,
        TreeEvent::MoveRejected(MoveError::DestinationIsDescendant { label }) if label == "alpha"
    )));
}

#[test]
fn test_invalid_target_shows_no_cursor() {
    let mut f = fixture();
    let start = row_point(&f.view, f.alpha);
    f.view.on_mouse_down(start, MouseButton::Left, Modifiers::new());
    f.view.on_mouse_move(row_point(&f.view, f.a1));

    // Hovering the drag node's own child: armed, but the move would fail.
    assert_eq!(f.view.cursor(), DragCursor::No);

    f.view.on_mouse_move(row_point(&f.view, f.beta));
    assert_eq!(f.view.cursor(), DragCursor::Move);
}

// ============================================================================
// Drop Commit Tests
// ============================================================================

#[test]
fn test_drop_reparents_under_target() {
    let mut f = fixture();
    f.view.take_events();
    drag(&mut f.view, f.a1, f.beta);

    assert_eq!(f.view.node(f.a1).unwrap().parent(), Some(f.beta));
    assert_eq!(
        labels_of(&f.view, f.view.node(f.beta).unwrap().children()),
        ["b1", "b2", "a1"],
        "appended after existing children"
    );
    assert!(f
        .view
        .take_events()
        .contains(&TreeEvent::NodesMoved(vec![f.a1])));
}

#[test]
fn test_drop_expands_a_collapsed_target() {
    let mut f = fixture();
    f.view.set_expanded(f.beta, false);
    f.view.ensure_layout(&mut f.vp);
    f.view.take_events();

    drag(&mut f.view, f.a1, f.beta);
    assert!(f.view.node(f.beta).unwrap().is_expanded());
    assert!(f.view.take_events().contains(&TreeEvent::NodeExpanded(f.beta)));
}

#[test]
fn test_selection_survives_the_move() {
    let mut f = fixture();
    f.view.select_node(f.a1);
    drag(&mut f.view, f.a1, f.beta);

    assert_eq!(f.view.selection(), [f.a1]);
}

#[test]
fn test_multi_drag_skips_nodes_under_a_dragged_ancestor() {
    let mut f = fixture();
    f.view.select_nodes(&[f.alpha, f.a2], true);

    // Press on an already-selected node keeps the whole selection.
    let start = row_point(&f.view, f.alpha);
    f.view.on_mouse_down(start, MouseButton::Left, Modifiers::new());
    f.view.on_mouse_move(row_point(&f.view, f.beta));
    f.view.on_mouse_up(row_point(&f.view, f.beta));

    // Only alpha was reparented; a2 rode along inside it.
    assert_eq!(f.view.node(f.alpha).unwrap().parent(), Some(f.beta));
    assert_eq!(f.view.node(f.a2).unwrap().parent(), Some(f.alpha));
}

#[test]
fn test_drop_resorts_target_children() {
    let mut f = fixture();
    f.view.set_sorter(Some(Box::new(|a, b| a.label().cmp(b.label()))));
    drag(&mut f.view, f.a1, f.beta);

    assert_eq!(
        labels_of(&f.view, f.view.node(f.beta).unwrap().children()),
        ["a1", "b1", "b2"]
    );
}

#[test]
fn test_moved_rows_take_new_geometry() {
    let mut f = fixture();
    drag(&mut f.view, f.a1, f.beta);
    f.view.ensure_layout(&mut f.vp);

    // alpha, a2, beta, b1, b2, a1.
    assert_eq!(f.view.node(f.a1).unwrap().visible_index(), Some(5));
    assert_eq!(f.view.node(f.a1).unwrap().full_area().left(), 20);
}

// ============================================================================
// Drag Policy Tests
// ============================================================================

struct LeafPolicy;

impl DragPolicy for LeafPolicy {
    fn force_drop_to_parent(&self, tree: &NodeTree, node: NodeId) -> bool {
        // Leaves redirect the drop to their containing folder.
        tree.get(node).is_some_and(|n| n.children().is_empty())
    }
}

thread_local! {
    static MOVED: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
}

struct RecordingPolicy;

impl DragPolicy for RecordingPolicy {
    fn force_drop_to_parent(&self, tree: &NodeTree, node: NodeId) -> bool {
        tree.get(node).is_some_and(|n| n.children().is_empty())
    }

    fn nodes_moved(&mut self, tree: &NodeTree, nodes: &[NodeId]) {
        for id in nodes {
            if let Some(node) = tree.get(*id) {
                MOVED.with(|m| m.borrow_mut().push(node.label().to_string()));
            }
        }
    }
}

#[test]
fn test_policy_redirects_leaf_drop_to_parent() {
    let mut f = fixture();
    f.view.set_drag_policy(Box::new(LeafPolicy));

    // Dropping onto the leaf b1 lands in its folder beta instead.
    drag(&mut f.view, f.a1, f.b1);
    assert_eq!(f.view.node(f.a1).unwrap().parent(), Some(f.beta));
}

#[test]
fn test_redirect_onto_dragged_node_is_rejected() {
    let mut f = fixture();
    f.view.set_drag_policy(Box::new(LeafPolicy));
    f.view.take_events();

    // Dropping alpha onto its own leaf a1 redirects to a1's folder, which
    // is alpha itself.
    drag(&mut f.view, f.alpha, f.a1);
    assert!(f.view.node(f.alpha).unwrap().parent().is_none());
    let events = f.view.take_events();
    assert!(events.iter().any(|ev| matches!(
        ev,
        TreeEvent::MoveRejected(MoveError::SameLocation { label }) if label == "alpha"
    )));
}

#[test]
fn test_policy_hook_sees_the_moved_nodes() {
    MOVED.with(|m| m.borrow_mut().clear());
    let mut f = fixture();
    f.view.set_drag_policy(Box::new(RecordingPolicy));

    drag(&mut f.view, f.a1, f.beta);
    MOVED.with(|m| assert_eq!(*m.borrow(), ["a1"]));
}

// ============================================================================
// Autoscroll Tests
// ============================================================================

#[test]
fn test_drag_below_viewport_scrolls_down_one_step() {
    let mut view = TreeView::with_options(TreeOptions {
        allow_move_nodes: true,
        ..TreeOptions::default()
    });
    for i in 0..30 {
        view.add_root(Node::new(format!("node{i}")));
    }
    let mut vp = TestViewport::new(400, 100);
    view.ensure_layout(&mut vp);

    let first = view.tree().roots()[0];
    let start = row_point(&view, first);
    view.on_mouse_down(start, MouseButton::Left, Modifiers::new());
    view.on_mouse_move(Point::new(start.x, start.y + 1));

    // Pointer far below the bottom edge: one clamped step per tick.
    view.on_drag_tick(Point::new(start.x, 300), &mut vp);
    assert_eq!(vp.visible.y, 20);
    view.on_drag_tick(Point::new(start.x, 300), &mut vp);
    assert_eq!(vp.visible.y, 40);
}

#[test]
fn test_drag_above_viewport_never_scrolls_negative() {
    let mut view = TreeView::with_options(TreeOptions {
        allow_move_nodes: true,
        ..TreeOptions::default()
    });
    for i in 0..30 {
        view.add_root(Node::new(format!("node{i}")));
    }
    let mut vp = TestViewport::new(400, 100);
    view.ensure_layout(&mut vp);
    vp.scroll_to(0, 10);

    let first = view.tree().roots()[0];
    let start = Point::new(150, 15);
    view.on_mouse_down(start, MouseButton::Left, Modifiers::new());
    view.on_mouse_move(Point::new(start.x, start.y + 1));
    assert_eq!(view.node(first).unwrap().visible_index(), Some(0));

    view.on_drag_tick(Point::new(150, -50), &mut vp);
    assert_eq!(vp.visible.y, 0, "clamped at the top edge");
    view.on_drag_tick(Point::new(150, -50), &mut vp);
    assert_eq!(vp.visible.y, 0);
}

#[test]
fn test_tick_without_drag_does_not_scroll() {
    let mut view = TreeView::new();
    view.add_root(Node::new("a"));
    let mut vp = TestViewport::new(400, 100);
    view.ensure_layout(&mut vp);

    view.on_drag_tick(Point::new(150, 300), &mut vp);
    assert_eq!(vp.visible.y, 0);
}
