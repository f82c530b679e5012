//! The inspector's local copy of the selected node's tracked style.

use std::collections::HashMap;

use crate::codec::{self, ControlValue};
use crate::schema::{PropertyDescriptor, names};

/// Last known resolved style of the selected node, keyed by canonical
/// property name.
///
/// The snapshot only ever holds tracked properties — entries are written
/// through a [`PropertyDescriptor`], so an ad hoc string key cannot sneak
/// in. Keys that were never written fall back to the registry default at
/// lookup time, which keeps the snapshot "fully defined" over the tracked
/// set whenever a selection exists even if the canvas reported nothing for
/// some property.
///
/// A snapshot is rebuilt wholesale on selection change and discarded when
/// the selection clears; only [`StyleInspector`](crate::inspector::StyleInspector)
/// mutates individual entries, one per user edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSnapshot {
    values: HashMap<&'static str, String>,
}

impl StyleSnapshot {
    /// The empty snapshot, used whenever nothing is selected.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of properties with a live (extracted or edited) value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no property has a live value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The verbatim stored value, without any default fallback.
    pub fn raw(&self, property: &str) -> Option<&str> {
        self.values.get(property).map(String::as_str)
    }

    /// The usable value for `property`: the live value if present and
    /// non-empty, else the registry default if non-empty, else nothing.
    pub fn resolved(&self, property: &PropertyDescriptor) -> Option<&str> {
        match self.values.get(property.name) {
            Some(value) if !value.is_empty() => Some(value),
            _ if !property.default_value.is_empty() => Some(property.default_value),
            _ => None,
        }
    }

    /// Store a value under `property`'s canonical name.
    pub fn set(&mut self, property: &PropertyDescriptor, value: impl Into<String>) {
        self.values.insert(property.name, value.into());
    }

    /// What `property`'s control should display right now.
    ///
    /// `fallback` is the number shown when the usable value is absent or
    /// not numeric; callers pick it per control (it need not be derived
    /// from the registry default).
    pub fn control_value(&self, property: &PropertyDescriptor, fallback: f64) -> ControlValue {
        codec::to_control_value(property, self.resolved(property), fallback)
    }
}

/// Projection of the three flex entries, kept for convenient control
/// binding. Never a source of truth: always recomputable from the
/// snapshot via [`FlexState::from_snapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct FlexState {
    /// `flex-direction` value.
    pub direction: String,
    /// `align-items` value.
    pub align_items: String,
    /// `justify-content` value.
    pub justify_content: String,
}

impl Default for FlexState {
    fn default() -> Self {
        Self {
            direction: "row".to_string(),
            align_items: "stretch".to_string(),
            justify_content: "flex-start".to_string(),
        }
    }
}

impl FlexState {
    /// Project the flex entries out of `snapshot`, defaulting to
    /// `row` / `stretch` / `flex-start` where the snapshot has nothing.
    pub fn from_snapshot(snapshot: &StyleSnapshot) -> Self {
        let defaults = Self::default();
        Self {
            direction: non_empty(snapshot, names::FLEX_DIRECTION, defaults.direction),
            align_items: non_empty(snapshot, names::ALIGN_ITEMS, defaults.align_items),
            justify_content: non_empty(snapshot, names::JUSTIFY_CONTENT, defaults.justify_content),
        }
    }
}

fn non_empty(snapshot: &StyleSnapshot, name: &str, default: String) -> String {
    match snapshot.raw(name) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default,
    }
}
