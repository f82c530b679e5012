//! System clipboard boundary for the export action.
//!
//! The engine only ever writes text. Putting a trait between the
//! serializer and `arboard` keeps the engine testable on machines without
//! a display server and lets hosts swap in their own clipboard plumbing.

use std::fmt;

/// Error from a clipboard collaborator.
#[derive(Debug, thiserror::Error)]
#[error("clipboard error: {message}")]
pub struct ClipboardError {
    message: String,
}

impl ClipboardError {
    /// Create a clipboard error. Public so test doubles can fail on demand.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Where the export serializer sends its CSS text.
pub trait ClipboardTarget {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The real system clipboard, backed by `arboard`.
///
/// Clipboard operations should happen on the UI thread for best
/// compatibility across platforms.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Connect to the system clipboard.
    ///
    /// # Errors
    ///
    /// Fails when the clipboard is unavailable, e.g. in a headless session
    /// or while another process holds it locked.
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardTarget for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text).map_err(Into::into)
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}
