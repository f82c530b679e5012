//! Canvas capability contract for the Vellum style inspector.
//!
//! The visual document editor ("the canvas") owns the document tree and the
//! single notion of a selected node. The inspector never reaches into that
//! tree directly; everything it needs is expressed by the [`Canvas`] trait:
//!
//! - **Selection**: which node, if any, is currently selected
//! - **Resolved style**: the effective computed value of every style
//!   property for a node, after all contributing rules are merged
//! - **Style application**: pushing a single-property declaration at a node
//! - **Notifications**: "something changed inside the canvas, re-read"
//!
//! The crate also provides [`MemoryCanvas`], a small in-memory
//! implementation of the contract used as a reference double in tests.
//!
//! # Example
//!
//! ```
//! use vellum_canvas::{Canvas, MemoryCanvas};
//!
//! let canvas = MemoryCanvas::new();
//! let node = canvas.insert_node([
//!     ("display".to_string(), "block".to_string()),
//! ]);
//! canvas.select(Some(node));
//!
//! let style = canvas.resolved_style(node).unwrap();
//! assert_eq!(style.get("display").map(String::as_str), Some("block"));
//! ```

pub mod events;
pub mod memory;
pub mod node;
pub mod signal;

mod canvas;
mod error;

pub use canvas::Canvas;
pub use error::{CanvasError, Result};
pub use events::{CanvasChange, CanvasEvents};
pub use memory::MemoryCanvas;
pub use node::NodeId;
pub use signal::{ConnectionId, Signal};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::error::{CanvasError, Result};
    pub use crate::events::{CanvasChange, CanvasEvents};
    pub use crate::memory::MemoryCanvas;
    pub use crate::node::NodeId;
    pub use crate::signal::{ConnectionId, Signal};
}
