//! The tracked-property schema registry.
//!
//! This module is the single source of truth for every style property the
//! inspector understands: its canonical CSS name, panel category, default
//! value, value shape, and the hints the form layer needs to build its
//! control (select options, numeric ranges). The set is closed and ordered;
//! extraction, mutation, and export all iterate it rather than accepting
//! ad hoc string keys.
//!
//! The registry is defined once as a static table and is read-only at
//! runtime.

/// Panel section a property belongs to, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Display mode, positioning scheme, offsets, and flex alignment.
    Display,
    /// Sizes, margins, and paddings.
    Dimension,
    /// Fonts, text color, and text layout.
    Typography,
    /// Backgrounds, borders, and shadows.
    Decoration,
    /// Everything else: opacity and stacking.
    Extra,
}

impl Category {
    /// All categories, in the order the panel renders its sections.
    pub const ALL: [Category; 5] = [
        Category::Display,
        Category::Dimension,
        Category::Typography,
        Category::Decoration,
        Category::Extra,
    ];

    /// Section title shown in the panel.
    pub const fn title(self) -> &'static str {
        match self {
            Category::Display => "Display",
            Category::Dimension => "Dimension",
            Category::Typography => "Typography",
            Category::Decoration => "Decoration",
            Category::Extra => "Extra",
        }
    }
}

/// How a numeric property's canonical value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Rendered with a `px` suffix (`"24px"`).
    Px,
    /// Rendered as a bare integer-like number (`"400"`, `"3"`).
    None,
    /// Rendered as a bare decimal (`"0.5"`). This is the named exception
    /// for unit-less ratios such as opacity and line-height.
    Ratio,
}

/// Numeric input constraints carried by the schema for the form layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    /// Smallest accepted value, if bounded below.
    pub min: Option<f64>,
    /// Largest accepted value, if bounded above.
    pub max: Option<f64>,
    /// Increment used by the control's stepper.
    pub step: f64,
}

/// One entry of the Tracked Property Set.
///
/// Immutable after process start. `name` is the canonical CSS property
/// name and the unique key everywhere in the engine; `default_value` is
/// the value controls and the export serializer fall back to when the
/// snapshot has nothing (an empty default means "omit from export").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDescriptor {
    /// Canonical CSS property name.
    pub name: &'static str,
    /// Panel section the property's control lives in.
    pub category: Category,
    /// Registry default, used when the snapshot carries no value.
    pub default_value: &'static str,
    /// Whether the control edits a number rather than a string.
    pub numeric: bool,
    /// Canonical rendering of numeric values.
    pub unit: Unit,
    /// Enumerated choices for select-backed properties; empty otherwise.
    pub options: &'static [&'static str],
    /// Numeric input constraints, where the panel configures any.
    pub range: Option<NumericRange>,
}

impl PropertyDescriptor {
    const fn keyword(
        name: &'static str,
        category: Category,
        default_value: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            category,
            default_value,
            numeric: false,
            unit: Unit::None,
            options,
            range: None,
        }
    }

    const fn freeform(name: &'static str, category: Category, default_value: &'static str) -> Self {
        Self {
            name,
            category,
            default_value,
            numeric: false,
            unit: Unit::None,
            options: &[],
            range: None,
        }
    }

    const fn length(name: &'static str, category: Category, default_value: &'static str) -> Self {
        Self {
            name,
            category,
            default_value,
            numeric: true,
            unit: Unit::Px,
            options: &[],
            range: None,
        }
    }

    const fn bare(name: &'static str, category: Category, default_value: &'static str) -> Self {
        Self {
            name,
            category,
            default_value,
            numeric: true,
            unit: Unit::None,
            options: &[],
            range: None,
        }
    }

    const fn ratio(name: &'static str, category: Category, default_value: &'static str) -> Self {
        Self {
            name,
            category,
            default_value,
            numeric: true,
            unit: Unit::Ratio,
            options: &[],
            range: None,
        }
    }

    const fn with_range(mut self, min: f64, max: f64, step: f64) -> Self {
        self.range = Some(NumericRange {
            min: Some(min),
            max: Some(max),
            step,
        });
        self
    }

    const fn non_negative(mut self) -> Self {
        self.range = Some(NumericRange {
            min: Some(0.0),
            max: None,
            step: 1.0,
        });
        self
    }
}

/// Property names the engine handles specially.
pub mod names {
    /// Drives conditional sub-panel visibility.
    pub const DISPLAY: &str = "display";
    /// First of the three flex projection entries.
    pub const FLEX_DIRECTION: &str = "flex-direction";
    /// Second flex projection entry.
    pub const ALIGN_ITEMS: &str = "align-items";
    /// Third flex projection entry.
    pub const JUSTIFY_CONTENT: &str = "justify-content";
}

/// The Tracked Property Set, in panel order.
///
/// The positional offsets carry an empty default on purpose: when the
/// canvas reports nothing for them there is no meaningful value to export,
/// so the serializer omits them instead of inventing `0px`.
static TRACKED_PROPERTIES: [PropertyDescriptor; 40] = [
    // Display
    PropertyDescriptor::keyword(
        names::DISPLAY,
        Category::Display,
        "block",
        &["block", "inline", "inline-block", "flex", "grid", "none"],
    ),
    PropertyDescriptor::keyword(
        "position",
        Category::Display,
        "static",
        &["static", "relative", "absolute", "fixed", "sticky"],
    ),
    PropertyDescriptor::length("top", Category::Display, ""),
    PropertyDescriptor::length("right", Category::Display, ""),
    PropertyDescriptor::length("bottom", Category::Display, ""),
    PropertyDescriptor::length("left", Category::Display, ""),
    PropertyDescriptor::keyword(
        names::FLEX_DIRECTION,
        Category::Display,
        "row",
        &["row", "row-reverse", "column", "column-reverse"],
    ),
    PropertyDescriptor::keyword(
        names::ALIGN_ITEMS,
        Category::Display,
        "stretch",
        &["stretch", "flex-start", "center", "flex-end", "baseline"],
    ),
    PropertyDescriptor::keyword(
        names::JUSTIFY_CONTENT,
        Category::Display,
        "flex-start",
        &[
            "flex-start",
            "center",
            "flex-end",
            "space-between",
            "space-around",
            "space-evenly",
        ],
    ),
    // Dimension
    PropertyDescriptor::length("width", Category::Dimension, "auto").non_negative(),
    PropertyDescriptor::length("max-width", Category::Dimension, "none").non_negative(),
    PropertyDescriptor::length("height", Category::Dimension, "auto").non_negative(),
    PropertyDescriptor::length("max-height", Category::Dimension, "none").non_negative(),
    PropertyDescriptor::length("margin-top", Category::Dimension, "0px"),
    PropertyDescriptor::length("margin-right", Category::Dimension, "0px"),
    PropertyDescriptor::length("margin-bottom", Category::Dimension, "0px"),
    PropertyDescriptor::length("margin-left", Category::Dimension, "0px"),
    PropertyDescriptor::length("padding-top", Category::Dimension, "0px"),
    PropertyDescriptor::length("padding-right", Category::Dimension, "0px"),
    PropertyDescriptor::length("padding-bottom", Category::Dimension, "0px"),
    PropertyDescriptor::length("padding-left", Category::Dimension, "0px"),
    // Typography
    PropertyDescriptor::keyword(
        "font-family",
        Category::Typography,
        "inherit",
        &[
            "inherit",
            "Arial, sans-serif",
            "Georgia, serif",
            "Times New Roman, serif",
            "Courier New, monospace",
            "Helvetica, sans-serif",
        ],
    ),
    PropertyDescriptor::length("font-size", Category::Typography, "16px").with_range(
        8.0, 72.0, 1.0,
    ),
    PropertyDescriptor::bare("font-weight", Category::Typography, "400").with_range(
        100.0, 900.0, 100.0,
    ),
    PropertyDescriptor::freeform("color", Category::Typography, "#000000"),
    PropertyDescriptor::length("letter-spacing", Category::Typography, "normal"),
    PropertyDescriptor::ratio("line-height", Category::Typography, "1.5").with_range(
        0.5, 3.0, 0.1,
    ),
    PropertyDescriptor::keyword(
        "text-align",
        Category::Typography,
        "left",
        &["left", "center", "right", "justify"],
    ),
    PropertyDescriptor::keyword(
        "text-decoration",
        Category::Typography,
        "none",
        &["none", "underline", "line-through", "overline"],
    ),
    // Decoration
    PropertyDescriptor::freeform("background-color", Category::Decoration, "transparent"),
    PropertyDescriptor::freeform("box-shadow", Category::Decoration, "none"),
    PropertyDescriptor::length("border-width", Category::Decoration, "0px").non_negative(),
    PropertyDescriptor::freeform("border-color", Category::Decoration, "#000000"),
    PropertyDescriptor::keyword(
        "border-style",
        Category::Decoration,
        "solid",
        &["solid", "dashed", "dotted", "double", "none"],
    ),
    PropertyDescriptor::length("border-top-left-radius", Category::Decoration, "0px"),
    PropertyDescriptor::length("border-top-right-radius", Category::Decoration, "0px"),
    PropertyDescriptor::length("border-bottom-left-radius", Category::Decoration, "0px"),
    PropertyDescriptor::length("border-bottom-right-radius", Category::Decoration, "0px"),
    // Extra
    PropertyDescriptor::ratio("opacity", Category::Extra, "1").with_range(0.0, 1.0, 0.1),
    PropertyDescriptor::bare("z-index", Category::Extra, "auto"),
];

/// The full ordered Tracked Property Set.
pub fn all_properties() -> &'static [PropertyDescriptor] {
    &TRACKED_PROPERTIES
}

/// Look up a property by its canonical CSS name.
pub fn describe(name: &str) -> Option<&'static PropertyDescriptor> {
    TRACKED_PROPERTIES
        .iter()
        .find(|property| property.name == name)
}

/// Tracked properties belonging to `category`, in registry order.
pub fn properties_in(category: Category) -> impl Iterator<Item = &'static PropertyDescriptor> {
    TRACKED_PROPERTIES
        .iter()
        .filter(move |property| property.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_has_forty_unique_properties() {
        let names: HashSet<&str> = all_properties().iter().map(|p| p.name).collect();
        assert_eq!(names.len(), all_properties().len());
        assert_eq!(all_properties().len(), 40);
    }

    #[test]
    fn describe_finds_tracked_properties_only() {
        let width = describe("width").unwrap();
        assert_eq!(width.category, Category::Dimension);
        assert!(width.numeric);
        assert_eq!(width.unit, Unit::Px);

        assert!(describe("float").is_none());
        assert!(describe("WIDTH").is_none());
    }

    #[test]
    fn registry_order_follows_panel_sections() {
        let categories: Vec<Category> = all_properties().iter().map(|p| p.category).collect();
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(deduped, Category::ALL.to_vec());
    }

    #[test]
    fn select_defaults_appear_in_their_own_options() {
        for property in all_properties() {
            if !property.options.is_empty() {
                assert!(
                    property.options.contains(&property.default_value),
                    "{} default '{}' missing from options",
                    property.name,
                    property.default_value
                );
            }
        }
    }

    #[test]
    fn ratio_unit_marks_the_unitless_decimals() {
        assert_eq!(describe("opacity").unwrap().unit, Unit::Ratio);
        assert_eq!(describe("line-height").unwrap().unit, Unit::Ratio);
        assert_eq!(describe("font-weight").unwrap().unit, Unit::None);
        assert_eq!(describe("font-size").unwrap().unit, Unit::Px);
    }

    #[test]
    fn positional_offsets_carry_empty_defaults() {
        for name in ["top", "right", "bottom", "left"] {
            assert_eq!(describe(name).unwrap().default_value, "");
        }
    }

    #[test]
    fn flex_projection_lives_in_the_display_section() {
        for name in [names::FLEX_DIRECTION, names::ALIGN_ITEMS, names::JUSTIFY_CONTENT] {
            assert_eq!(describe(name).unwrap().category, Category::Display);
        }
    }
}
