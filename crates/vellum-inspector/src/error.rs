//! Error types for the inspector engine.

use vellum_canvas::CanvasError;

use crate::clipboard::ClipboardError;

/// Result type alias for inspector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the inspector engine.
///
/// None of these are fatal to the hosting application. Every variant is
/// caught at its call site and degrades to a safe default: an extraction
/// failure yields an empty snapshot, a rejected apply keeps the optimistic
/// local value, and a clipboard failure leaves the "copied" indicator
/// unset. Parse failures never reach this type at all — the codec
/// substitutes the configured fallback instead of raising.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The canvas could not report a resolved style.
    #[error("failed to read resolved style: {source}")]
    Extraction {
        #[source]
        source: CanvasError,
    },

    /// The canvas rejected a single-property style declaration.
    #[error("failed to apply '{property}': {source}")]
    Apply {
        property: &'static str,
        #[source]
        source: CanvasError,
    },

    /// The system clipboard rejected the export text.
    #[error("clipboard write failed: {0}")]
    Clipboard(#[from] ClipboardError),
}
