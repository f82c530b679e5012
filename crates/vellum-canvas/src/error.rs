//! Error types for canvas operations.

use crate::node::NodeId;

/// Result type alias for canvas operations.
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Errors a canvas can report to the inspector.
///
/// None of these are fatal to the caller: the inspector recovers from every
/// variant by falling back to an empty snapshot or keeping its optimistic
/// local state.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CanvasError {
    /// The handle no longer resolves to a live node. Expected whenever a
    /// document mutation races a query.
    #[error("node {} is no longer part of the document", .0.as_raw())]
    NodeGone(NodeId),

    /// The underlying editor rejected or failed the operation.
    #[error("canvas backend error: {0}")]
    Backend(String),
}

impl CanvasError {
    /// Create a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}
