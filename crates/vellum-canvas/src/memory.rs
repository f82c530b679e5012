//! In-memory canvas used as a reference double in tests.

use std::collections::HashMap;

use parking_lot::Mutex;
use slotmap::SlotMap;
use tracing::debug;

use crate::canvas::Canvas;
use crate::error::{CanvasError, Result};
use crate::events::{CanvasChange, CanvasEvents};
use crate::node::NodeId;

const TARGET: &str = "vellum::canvas";

#[derive(Debug, Default)]
struct NodeRecord {
    style: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct State {
    nodes: SlotMap<NodeId, NodeRecord>,
    selected: Option<NodeId>,
}

/// A [`Canvas`] backed by plain in-memory node records.
///
/// Each node is just a bag of property → value strings, which the canvas
/// reports back verbatim as its "resolved" style. That is deliberately
/// simplistic — there is no cascade, layout, or rendering here — but it is
/// enough to exercise the inspector's full select → edit → notify loop.
///
/// Mutations made through [`MemoryCanvas::set_style_direct`] model edits
/// performed through the canvas's own UI and broadcast a
/// [`CanvasChange::Style`] event; [`Canvas::apply_style`] models the
/// inspector's writes and stays silent, exactly like a real editor that
/// does not echo back changes it was asked to make.
#[derive(Debug, Default)]
pub struct MemoryCanvas {
    state: Mutex<State>,
    events: CanvasEvents,
}

impl MemoryCanvas {
    /// Create an empty canvas with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node seeded with `style`, returning its handle.
    ///
    /// Broadcasts a tree change, like a block dropped onto the canvas.
    pub fn insert_node<I>(&self, style: I) -> NodeId
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let node = self.state.lock().nodes.insert(NodeRecord {
            style: style.into_iter().collect(),
        });
        self.events.notify_changed(CanvasChange::Tree);
        node
    }

    /// Remove a node, clearing the selection if it pointed at it.
    ///
    /// Returns `false` if the handle was already dead.
    pub fn remove_node(&self, node: NodeId) -> bool {
        let removed = {
            let mut state = self.state.lock();
            let removed = state.nodes.remove(node).is_some();
            if removed && state.selected == Some(node) {
                state.selected = None;
            }
            removed
        };
        if removed {
            self.events.notify_changed(CanvasChange::Tree);
        }
        removed
    }

    /// Change the selection. A dead handle is stored as-is; it simply won't
    /// resolve, which is exactly the race a real canvas exposes.
    pub fn select(&self, node: Option<NodeId>) {
        self.state.lock().selected = node;
    }

    /// Whether `node` still resolves.
    pub fn contains(&self, node: NodeId) -> bool {
        self.state.lock().nodes.contains_key(node)
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.state.lock().nodes.len()
    }

    /// Set a style property as if the user edited it through the canvas's
    /// own UI, broadcasting a style change.
    pub fn set_style_direct(&self, node: NodeId, property: &str, value: &str) -> Result<()> {
        {
            let mut state = self.state.lock();
            let record = state.nodes.get_mut(node).ok_or(CanvasError::NodeGone(node))?;
            record.style.insert(property.to_string(), value.to_string());
        }
        // Emit outside the lock so slots can query the canvas again.
        self.events.notify_changed(CanvasChange::Style);
        Ok(())
    }
}

impl Canvas for MemoryCanvas {
    fn selected_node(&self) -> Option<NodeId> {
        let state = self.state.lock();
        state.selected.filter(|node| state.nodes.contains_key(*node))
    }

    fn resolved_style(&self, node: NodeId) -> Result<HashMap<String, String>> {
        self.state
            .lock()
            .nodes
            .get(node)
            .map(|record| record.style.clone())
            .ok_or(CanvasError::NodeGone(node))
    }

    fn apply_style(&self, node: NodeId, property: &str, value: &str) -> Result<()> {
        let mut state = self.state.lock();
        let record = state.nodes.get_mut(node).ok_or(CanvasError::NodeGone(node))?;
        debug!(target: TARGET, node = node.as_raw(), property, value, "style declaration applied");
        record.style.insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn events(&self) -> &CanvasEvents {
        &self.events
    }
}
