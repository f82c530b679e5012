//! The canvas capability contract.

use std::collections::HashMap;

use crate::error::Result;
use crate::events::CanvasEvents;
use crate::node::NodeId;

/// Capabilities the inspector consumes from the visual document editor.
///
/// The canvas owns the document tree, node lifecycles, and the single
/// notion of "the selected node"; the inspector only ever holds transient
/// [`NodeId`] handles. Implementations are expected to use interior
/// mutability — every method takes `&self` so the canvas can be shared
/// across the UI thread's event handlers.
pub trait Canvas {
    /// The currently selected node, if any.
    ///
    /// A handle returned here may stop resolving at any point; callers must
    /// treat later [`CanvasError::NodeGone`](crate::CanvasError::NodeGone)
    /// results as "nothing is selected".
    fn selected_node(&self) -> Option<NodeId>;

    /// The fully resolved style of `node`: effective computed values after
    /// all contributing rules are merged, not just inline declarations.
    ///
    /// The returned mapping must cover at least every property the
    /// inspector tracks; extra entries are ignored.
    fn resolved_style(&self, node: NodeId) -> Result<HashMap<String, String>>;

    /// Apply a single-property declaration to `node`.
    ///
    /// How the declaration merges into the node's existing style is the
    /// canvas's business. The inspector treats a failure here as advisory:
    /// it logs and keeps its optimistic local value.
    fn apply_style(&self, node: NodeId, property: &str, value: &str) -> Result<()>;

    /// Notification hub for changes originating inside the canvas.
    fn events(&self) -> &CanvasEvents;
}
