//! Write path and engine state: the inspector that controls talk to.

use tracing::{debug, warn};

use vellum_canvas::{Canvas, NodeId};

use crate::LOG_TARGET;
use crate::clipboard::ClipboardTarget;
use crate::codec::{self, ControlValue};
use crate::error::Error;
use crate::export;
use crate::extract::extract;
use crate::panels::{PanelVisibility, display_type};
use crate::schema::{self, names};
use crate::snapshot::{FlexState, StyleSnapshot};

/// The inspector engine: one snapshot, one selection, one edit at a time.
///
/// All state lives on the UI thread; selection changes, property edits,
/// and canvas notifications arrive as mutually exclusive steps through the
/// host's event queue, so no edit can ever run against a stale selection's
/// snapshot.
///
/// Local writes are optimistic: [`StyleInspector::edit`] mirrors the
/// canonical value into the snapshot whether or not the canvas accepted
/// it. They stay provisional until the next canvas-originated change
/// notification, at which point the host calls
/// [`StyleInspector::sync_from_canvas`] and the canvas's authoritative
/// values replace the snapshot wholesale.
#[derive(Debug)]
pub struct StyleInspector {
    selection: Option<NodeId>,
    snapshot: StyleSnapshot,
    /// Cached display keyword driving conditional panel logic.
    display: String,
    flex: FlexState,
    copied: bool,
}

impl StyleInspector {
    /// An inspector with nothing selected.
    pub fn new() -> Self {
        Self {
            selection: None,
            snapshot: StyleSnapshot::empty(),
            display: display_type(&StyleSnapshot::empty()).to_string(),
            flex: FlexState::default(),
            copied: false,
        }
    }

    /// The current selection handle, if any.
    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &StyleSnapshot {
        &self.snapshot
    }

    /// The cached display keyword.
    pub fn display_type(&self) -> &str {
        &self.display
    }

    /// The flex projection backing the flex sub-panel's controls.
    pub fn flex_state(&self) -> &FlexState {
        &self.flex
    }

    /// Which optional sub-panels are active right now.
    pub fn panels(&self) -> PanelVisibility {
        PanelVisibility::from_display(&self.display)
    }

    /// Point the inspector at a different selection (or none) and rebuild
    /// the snapshot wholesale.
    pub fn set_selection(&mut self, canvas: &dyn Canvas, selection: Option<NodeId>) {
        self.selection = selection;
        self.rebuild(canvas);
    }

    /// Re-read everything from the canvas's own notion of the selection.
    ///
    /// This is the handler for canvas-originated change notifications:
    /// the canvas always wins, replacing any optimistic local writes.
    pub fn sync_from_canvas(&mut self, canvas: &dyn Canvas) {
        self.selection = canvas.selected_node();
        self.rebuild(canvas);
    }

    fn rebuild(&mut self, canvas: &dyn Canvas) {
        self.snapshot = extract(canvas, self.selection);
        self.display = display_type(&self.snapshot).to_string();
        self.flex = FlexState::from_snapshot(&self.snapshot);
    }

    /// Apply one discrete user edit.
    ///
    /// The control value is canonicalized through the codec, pushed to the
    /// canvas as a single-property declaration, and mirrored into the
    /// snapshot optimistically — the local write happens whether or not
    /// the canvas accepted the declaration. Without a selection this is a
    /// no-op returning the unchanged empty snapshot; an untracked property
    /// name is rejected the same way.
    pub fn edit(
        &mut self,
        canvas: &dyn Canvas,
        property: &str,
        value: ControlValue,
    ) -> &StyleSnapshot {
        let Some(node) = self.selection else {
            debug!(target: LOG_TARGET, property, "edit ignored: nothing selected");
            return &self.snapshot;
        };
        let Some(descriptor) = schema::describe(property) else {
            warn!(target: LOG_TARGET, property, "edit ignored: property is not tracked");
            return &self.snapshot;
        };

        let canonical = codec::to_canonical(descriptor, &value);
        if let Err(source) = canvas.apply_style(node, descriptor.name, &canonical) {
            let error = Error::Apply {
                property: descriptor.name,
                source,
            };
            warn!(target: LOG_TARGET, %error, "keeping optimistic value");
        }
        self.snapshot.set(descriptor, canonical.clone());

        match descriptor.name {
            names::DISPLAY => self.display = canonical,
            names::FLEX_DIRECTION => self.flex.direction = canonical,
            names::ALIGN_ITEMS => self.flex.align_items = canonical,
            names::JUSTIFY_CONTENT => self.flex.justify_content = canonical,
            _ => {}
        }

        &self.snapshot
    }

    /// Serialize the snapshot and hand it to the clipboard collaborator.
    ///
    /// Returns whether the write succeeded, which is also recorded for the
    /// transient "copied" indicator. Without a selection nothing is copied.
    pub fn copy_styles(&mut self, clipboard: &mut dyn ClipboardTarget) -> bool {
        if self.selection.is_none() {
            return false;
        }
        self.copied = export::copy_to_clipboard(&self.snapshot, clipboard);
        self.copied
    }

    /// Whether the most recent copy action succeeded.
    pub fn copy_succeeded(&self) -> bool {
        self.copied
    }

    /// Clear the "copied" indicator; the host calls this when its
    /// confirmation timeout elapses.
    pub fn reset_copy_indicator(&mut self) {
        self.copied = false;
    }
}

impl Default for StyleInspector {
    fn default() -> Self {
        Self::new()
    }
}
