//! Hierarchical tree-list widget.
//!
//! State is split into focused components composed by [`TreeView`]: the
//! node hierarchy ([`NodeTree`]), the visible-order layout pass, the
//! anchored selection model, pointer hit testing and the drag-and-drop
//! state machine.

mod drag;
mod hit;
mod layout;
mod node;
mod selection;
mod view;

pub use drag::DragCursor;
pub use hit::{Hit, HitRegion};
pub use layout::{LayoutIndexer, GLYPH_SIZE, ICON_SIZE};
pub use node::{Node, NodeComparator, NodeId, NodeTree, VisibleIter};
pub use selection::SelectionModel;
pub use view::{DragPolicy, TreeEvent, TreeGlyphs, TreeOptions, TreeView};
