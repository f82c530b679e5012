//! Read path: the canvas's resolved style becomes a local snapshot.

use tracing::warn;

use vellum_canvas::{Canvas, NodeId};

use crate::LOG_TARGET;
use crate::error::Error;
use crate::schema;
use crate::snapshot::StyleSnapshot;

/// Build a snapshot of `selection`'s resolved style.
///
/// With no selection the result is the empty snapshot, so every later
/// lookup resolves through registry defaults. With a selection, the canvas
/// is asked once for the node's resolved style and each tracked property's
/// value is stored verbatim (pre-codec).
///
/// A canvas failure — the node vanished mid-query, the backend errored —
/// is logged and treated exactly like "no selection"; it never propagates.
pub fn extract(canvas: &dyn Canvas, selection: Option<NodeId>) -> StyleSnapshot {
    let Some(node) = selection else {
        return StyleSnapshot::empty();
    };

    let resolved = match canvas.resolved_style(node) {
        Ok(resolved) => resolved,
        Err(source) => {
            let error = Error::Extraction { source };
            warn!(target: LOG_TARGET, %error, "treating selection as absent");
            return StyleSnapshot::empty();
        }
    };

    let mut snapshot = StyleSnapshot::empty();
    for property in schema::all_properties() {
        if let Some(value) = resolved.get(property.name) {
            snapshot.set(property, value.clone());
        }
    }
    snapshot
}
