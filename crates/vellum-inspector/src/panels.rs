//! Conditional sub-panel visibility.
//!
//! A pure projection of the snapshot: nothing here is stored, so a test
//! can set `display` and assert visibility with no other side effect.

use crate::schema::{self, names};
use crate::snapshot::StyleSnapshot;

/// The effective display keyword for a snapshot, falling back to the
/// registry default when nothing was extracted.
pub fn display_type(snapshot: &StyleSnapshot) -> &str {
    schema::describe(names::DISPLAY)
        .and_then(|property| snapshot.resolved(property))
        .unwrap_or("block")
}

/// Which optional sub-panel sets are active for the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelVisibility {
    /// Direction/align/justify controls, shown only for flex containers.
    pub flex_controls: bool,
}

impl PanelVisibility {
    /// Visibility for a given display keyword.
    pub fn from_display(display: &str) -> Self {
        Self {
            flex_controls: display == "flex",
        }
    }

    /// Visibility derived from the snapshot's effective display value.
    pub fn from_snapshot(snapshot: &StyleSnapshot) -> Self {
        Self::from_display(display_type(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::describe;

    #[test]
    fn flex_panel_follows_display_exactly() {
        let mut snapshot = StyleSnapshot::empty();
        let display = describe("display").unwrap();

        assert!(!PanelVisibility::from_snapshot(&snapshot).flex_controls);

        snapshot.set(display, "flex");
        assert!(PanelVisibility::from_snapshot(&snapshot).flex_controls);

        snapshot.set(display, "block");
        assert!(!PanelVisibility::from_snapshot(&snapshot).flex_controls);
    }

    #[test]
    fn other_properties_do_not_affect_visibility() {
        let mut snapshot = StyleSnapshot::empty();
        snapshot.set(describe("flex-direction").unwrap(), "column");
        snapshot.set(describe("width").unwrap(), "100px");

        assert!(!PanelVisibility::from_snapshot(&snapshot).flex_controls);
    }
}
