//! A dark-themed widget toolkit core.
//!
//! Widgets here own their state and geometry but no platform resources.
//! The host supplies the collaborators: a [`render::Renderer`] to paint
//! with, [`render::TextMetrics`] to measure labels, and a
//! [`viewport::Viewport`] to scroll through. Input arrives through the
//! widget's `on_*` handlers in content coordinates, and outcomes are
//! drained back as events.
//!
//! ```no_run
//! use duskui::tree::{Node, TreeView};
//!
//! let mut view = TreeView::new();
//! let root = view.add_root(Node::new("library").expanded(true));
//! view.add_child(root, Node::new("fiction"));
//! view.add_child(root, Node::new("reference"));
//! view.select_node(root);
//! ```

pub mod error;
pub mod event;
pub mod geometry;
pub mod render;
pub mod theme;
pub mod tree;
pub mod viewport;

pub use error::MoveError;
pub use event::{Key, Modifiers, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use render::{Alignment, ImageId, MonospaceMetrics, Renderer, TextMetrics};
pub use theme::{Color, Palette};
pub use tree::{DragCursor, DragPolicy, Node, NodeId, TreeEvent, TreeOptions, TreeView};
pub use viewport::Viewport;
