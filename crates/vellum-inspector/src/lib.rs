//! Style inspector synchronization engine for the Vellum canvas.
//!
//! The inspector keeps a panel of typed form controls in sync with the
//! resolved style of whichever node is selected in the visual editor. This
//! crate is the engine behind that panel, featuring:
//!
//! - **Schema registry**: the closed, ordered set of tracked CSS properties
//!   with categories, defaults, units, and control hints
//! - **Value codec**: pure conversions between control values and canonical
//!   CSS value strings
//! - **Extraction**: resolved style → local [`StyleSnapshot`], rebuilt
//!   wholesale on every selection change
//! - **Mutation**: optimistic single-property edits pushed to the canvas
//! - **Conditional panels**: sub-panel visibility derived from the snapshot
//! - **Export**: deterministic CSS serialization with clipboard integration
//!
//! # Example
//!
//! ```
//! use vellum_canvas::MemoryCanvas;
//! use vellum_inspector::prelude::*;
//!
//! let canvas = MemoryCanvas::new();
//! let node = canvas.insert_node([
//!     ("display".to_string(), "flex".to_string()),
//!     ("width".to_string(), "240px".to_string()),
//! ]);
//! canvas.select(Some(node));
//!
//! let mut inspector = StyleInspector::new();
//! inspector.sync_from_canvas(&canvas);
//!
//! assert!(inspector.panels().flex_controls);
//! assert_eq!(inspector.snapshot().raw("width"), Some("240px"));
//! ```
//!
//! [`StyleSnapshot`]: snapshot::StyleSnapshot

pub mod clipboard;
pub mod codec;
pub mod export;
pub mod extract;
pub mod inspector;
pub mod panels;
pub mod schema;
pub mod snapshot;

mod error;

pub use error::{Error, Result};

/// Target used for every `tracing` event this crate emits.
pub(crate) const LOG_TARGET: &str = "vellum::inspector";

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::clipboard::{ClipboardError, ClipboardTarget, SystemClipboard};
    pub use crate::codec::{ControlValue, to_canonical, to_control_value};
    pub use crate::export::{NO_STYLES, css_text, serialize};
    pub use crate::extract::extract;
    pub use crate::inspector::StyleInspector;
    pub use crate::panels::PanelVisibility;
    pub use crate::schema::{
        Category, NumericRange, PropertyDescriptor, Unit, all_properties, describe,
    };
    pub use crate::snapshot::{FlexState, StyleSnapshot};
    pub use crate::{Error, Result};
}
