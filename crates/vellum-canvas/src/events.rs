//! Canvas-originated notifications.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::signal::Signal;

/// What changed inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasChange {
    /// A node's style changed through the canvas's own UI.
    Style,
    /// The document tree changed (nodes added, moved, or removed).
    Tree,
}

/// Notification hub exposed by every [`Canvas`](crate::Canvas).
///
/// `ready` fires exactly once, when the underlying editor has finished
/// loading and queries are safe; late or repeated ready notifications are
/// swallowed. `changed` fires for every mutation that originates inside
/// the canvas itself and means "re-read the selected node's style now" —
/// consumers are expected to re-extract wholesale rather than merge
/// field-by-field.
#[derive(Debug, Default)]
pub struct CanvasEvents {
    /// One-shot "editor finished loading" notification.
    pub ready: Signal<()>,
    /// Style or tree change made through the canvas's own interactions.
    pub changed: Signal<CanvasChange>,
    ready_fired: AtomicBool,
}

impl CanvasEvents {
    /// Create an event hub with no connections and `ready` not yet fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the one-shot ready notification. Subsequent calls are no-ops.
    pub fn notify_ready(&self) {
        if !self.ready_fired.swap(true, Ordering::SeqCst) {
            self.ready.emit(&());
        }
    }

    /// Whether the ready notification has already fired.
    pub fn is_ready(&self) -> bool {
        self.ready_fired.load(Ordering::SeqCst)
    }

    /// Broadcast a canvas-originated change.
    pub fn notify_changed(&self, change: CanvasChange) {
        self.changed.emit(&change);
    }
}
