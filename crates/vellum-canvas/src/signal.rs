//! Minimal signal primitive for canvas notifications.
//!
//! The inspector runs on a single UI thread with cooperative scheduling, so
//! this is deliberately much smaller than a general signal/slot system:
//! slots are invoked directly on the emitting thread, in connection order.
//! Slots are cloned out of the connection table before invocation, so a
//! slot may connect or disconnect other slots while the signal is emitting.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use vellum_canvas::Signal;
//!
//! let fired = Arc::new(AtomicUsize::new(0));
//! let signal = Signal::<String>::new();
//!
//! let counter = Arc::clone(&fired);
//! let id = signal.connect(move |_text| {
//!     counter.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! signal.emit(&"hello".to_string());
//! signal.disconnect(id);
//! signal.emit(&"ignored".to_string());
//!
//! assert_eq!(fired.load(Ordering::Relaxed), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Identifier for a signal-slot connection.
    ///
    /// Returned by [`Signal::connect`]; pass it to [`Signal::disconnect`]
    /// to remove the slot again.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args)>;

/// A signal with directly-invoked slots.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args> Signal<Args> {
    /// Create a signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot, returning its connection id.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Remove a connection. Returns `false` if the id was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Invoke every connected slot with `args`, in connection order.
    pub fn emit(&self, args: &Args) {
        // Snapshot the slots so emission never holds the table lock.
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        for slot in slots {
            slot(args);
        }
    }

    /// Number of live connections.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .finish()
    }
}
