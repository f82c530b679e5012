//! Export serializer: snapshot → CSS declaration block.

use tracing::warn;

use crate::LOG_TARGET;
use crate::clipboard::ClipboardTarget;
use crate::error::Error;
use crate::schema;
use crate::snapshot::StyleSnapshot;

/// Text handed to the clipboard when no declaration survives serialization.
pub const NO_STYLES: &str = "No styles found";

/// Render one `"{property}: {value};"` line per tracked property with a
/// usable value.
///
/// Iteration follows registry order — never snapshot insertion order — so
/// the output is deterministic. A property with neither a live value nor a
/// non-empty default contributes nothing.
pub fn serialize(snapshot: &StyleSnapshot) -> Vec<String> {
    schema::all_properties()
        .iter()
        .filter_map(|property| {
            snapshot
                .resolved(property)
                .map(|value| format!("{}: {};", property.name, value))
        })
        .collect()
}

/// The full export artifact: joined declarations, or the no-styles
/// sentinel when nothing serialized. Serialization itself never fails.
pub fn css_text(snapshot: &StyleSnapshot) -> String {
    join_declarations(serialize(snapshot))
}

fn join_declarations(declarations: Vec<String>) -> String {
    if declarations.is_empty() {
        NO_STYLES.to_string()
    } else {
        declarations.join("\n")
    }
}

/// Hand the export text to the clipboard collaborator.
///
/// A clipboard failure is logged as a non-fatal warning and reported as
/// `false`, so the host's transient "copied" confirmation simply does not
/// appear.
pub fn copy_to_clipboard(snapshot: &StyleSnapshot, clipboard: &mut dyn ClipboardTarget) -> bool {
    let text = css_text(snapshot);
    match clipboard.set_text(&text) {
        Ok(()) => true,
        Err(source) => {
            let error = Error::Clipboard(source);
            warn!(target: LOG_TARGET, %error, "styles were not copied");
            false
        }
    }
}
