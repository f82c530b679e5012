//! Opaque node handles.

use slotmap::new_key_type;

new_key_type! {
    /// A stable handle to a node in the canvas's document tree.
    ///
    /// Handles compare by identity and carry no ownership: the canvas is
    /// free to drop the node at any time, after which the handle simply
    /// stops resolving. Every query taking a `NodeId` must therefore
    /// tolerate [`CanvasError::NodeGone`](crate::CanvasError::NodeGone).
    pub struct NodeId;
}

impl NodeId {
    /// Convert the handle to a raw u64, e.g. for logging or interop.
    ///
    /// The raw value round-trips through [`NodeId::from_raw`] but carries
    /// no guarantee that the node still exists.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Reconstruct a handle from a raw u64 produced by [`NodeId::as_raw`].
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trip() {
        let mut nodes = slotmap::SlotMap::<NodeId, ()>::with_key();
        let id = nodes.insert(());
        assert_eq!(NodeId::from_raw(id.as_raw()), id);
    }
}
