//! Conversions between control values and canonical CSS value strings.
//!
//! Both directions are pure and total: nothing in here touches the canvas,
//! logs, or panics. An unparseable numeric string is a normalized fallback
//! result, never an error.
//!
//! # Example
//!
//! ```
//! use vellum_inspector::codec::{ControlValue, to_canonical, to_control_value};
//! use vellum_inspector::schema::describe;
//!
//! let width = describe("width").unwrap();
//! assert_eq!(to_canonical(width, &ControlValue::Number(240.0)), "240px");
//! assert_eq!(
//!     to_control_value(width, Some("240px"), 0.0),
//!     ControlValue::Number(240.0),
//! );
//!
//! // Opacity is a unit-less ratio, not a pixel length.
//! let opacity = describe("opacity").unwrap();
//! assert_eq!(to_canonical(opacity, &ControlValue::Number(0.5)), "0.5");
//! ```

use crate::schema::{PropertyDescriptor, Unit};

/// Unit suffixes stripped from resolved values before numeric parsing.
/// `rem` must come before `em` so `"2rem"` is not split as `"2r" + "em"`.
const UNIT_SUFFIXES: [&str; 4] = ["px", "rem", "em", "%"];

/// Keywords that mean "there is no number here".
const NON_NUMERIC_SENTINELS: [&str; 3] = ["auto", "none", "inherit"];

/// A value as the form controls see it.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    /// Numeric field or slider value.
    Number(f64),
    /// Select, color, or free-form text value.
    Text(String),
}

impl ControlValue {
    /// The numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ControlValue::Number(value) => Some(*value),
            ControlValue::Text(_) => None,
        }
    }

    /// The textual payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ControlValue::Number(_) => None,
            ControlValue::Text(text) => Some(text),
        }
    }
}

impl From<f64> for ControlValue {
    fn from(value: f64) -> Self {
        ControlValue::Number(value)
    }
}

impl From<&str> for ControlValue {
    fn from(value: &str) -> Self {
        ControlValue::Text(value.to_string())
    }
}

impl From<String> for ControlValue {
    fn from(value: String) -> Self {
        ControlValue::Text(value)
    }
}

/// Render a control value as the canonical CSS string for `property`.
///
/// Numbers pick up a `px` suffix for pixel lengths and stay bare for
/// unit-less properties; the schema's [`Unit`] decides, so opacity never
/// needs its own branch here. Text passes through verbatim.
pub fn to_canonical(property: &PropertyDescriptor, value: &ControlValue) -> String {
    match value {
        ControlValue::Number(number) => match property.unit {
            Unit::Px => format!("{}px", format_number(*number)),
            Unit::None | Unit::Ratio => format_number(*number),
        },
        ControlValue::Text(text) => text.clone(),
    }
}

/// Convert a raw resolved value into what `property`'s control displays.
///
/// Numeric properties parse via [`numeric_value`] with the caller's
/// `fallback` (which need not be the schema default). Non-numeric
/// properties pass the raw string through, substituting the schema default
/// when the canvas reported nothing.
pub fn to_control_value(
    property: &PropertyDescriptor,
    raw: Option<&str>,
    fallback: f64,
) -> ControlValue {
    if property.numeric {
        ControlValue::Number(numeric_value(raw, fallback))
    } else {
        let text = match raw {
            Some(value) if !value.is_empty() => value,
            _ => property.default_value,
        };
        ControlValue::Text(text.to_string())
    }
}

/// Parse a resolved CSS value as a number, stripping one trailing unit
/// suffix (`px`, `em`, `rem`, `%`).
///
/// Absent values, the sentinels `auto`/`none`/`inherit`, and strings that
/// fail to parse all yield `fallback`. Parsing goes through Rust's `f64`
/// parser and is therefore locale-invariant.
pub fn numeric_value(raw: Option<&str>, fallback: f64) -> f64 {
    let Some(raw) = raw else {
        return fallback;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || NON_NUMERIC_SENTINELS.contains(&trimmed) {
        return fallback;
    }
    let number = UNIT_SUFFIXES
        .iter()
        .find_map(|unit| trimmed.strip_suffix(*unit))
        .unwrap_or(trimmed);
    number.trim_end().parse().unwrap_or(fallback)
}

/// Render a number the way CSS expects: integral values without the
/// trailing `.0` so a control value of `24` becomes `"24px"`, not
/// `"24.0px"`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{all_properties, describe};

    #[test]
    fn unit_stripping() {
        assert_eq!(numeric_value(Some("240px"), 0.0), 240.0);
        assert_eq!(numeric_value(Some("1.5rem"), 0.0), 1.5);
        assert_eq!(numeric_value(Some("2em"), 0.0), 2.0);
        assert_eq!(numeric_value(Some("50%"), 0.0), 50.0);
        assert_eq!(numeric_value(Some("0.5"), 0.0), 0.5);
        assert_eq!(numeric_value(Some("-12px"), 0.0), -12.0);
    }

    #[test]
    fn sentinels_and_garbage_fall_back() {
        assert_eq!(numeric_value(Some("auto"), 7.0), 7.0);
        assert_eq!(numeric_value(Some("none"), 7.0), 7.0);
        assert_eq!(numeric_value(Some("inherit"), 7.0), 7.0);
        assert_eq!(numeric_value(Some(""), 7.0), 7.0);
        assert_eq!(numeric_value(Some("thick"), 7.0), 7.0);
        assert_eq!(numeric_value(None, 7.0), 7.0);
    }

    #[test]
    fn canonical_pixels_and_ratios() {
        let font_size = describe("font-size").unwrap();
        assert_eq!(to_canonical(font_size, &ControlValue::Number(24.0)), "24px");

        let opacity = describe("opacity").unwrap();
        assert_eq!(to_canonical(opacity, &ControlValue::Number(0.5)), "0.5");
        assert_eq!(to_canonical(opacity, &ControlValue::Number(1.0)), "1");

        let weight = describe("font-weight").unwrap();
        assert_eq!(to_canonical(weight, &ControlValue::Number(700.0)), "700");

        let display = describe("display").unwrap();
        assert_eq!(
            to_canonical(display, &ControlValue::Text("flex".to_string())),
            "flex"
        );
    }

    #[test]
    fn control_value_fallbacks() {
        let top = describe("top").unwrap();
        assert_eq!(
            to_control_value(top, Some("auto"), 0.0),
            ControlValue::Number(0.0)
        );

        let color = describe("color").unwrap();
        assert_eq!(
            to_control_value(color, None, 0.0),
            ControlValue::Text("#000000".to_string())
        );
        assert_eq!(
            to_control_value(color, Some("#abcdef"), 0.0),
            ControlValue::Text("#abcdef".to_string())
        );
    }

    #[test]
    fn round_trip_across_the_registry() {
        for property in all_properties() {
            let value = if property.numeric {
                ControlValue::Number(42.5)
            } else if let Some(option) = property.options.last() {
                ControlValue::Text((*option).to_string())
            } else {
                ControlValue::Text("#123456".to_string())
            };

            let canonical = to_canonical(property, &value);
            let round_tripped = to_control_value(property, Some(&canonical), f64::NAN);
            assert_eq!(round_tripped, value, "round trip failed for {}", property.name);
        }
    }
}
