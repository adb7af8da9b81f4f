//! Category options: the fixed built-in set plus user-defined customs.
//!
//! A category pairs a human-readable label with a normalized value key.
//! Values must stay unique across the combined built-in + custom set;
//! the custom store skips duplicates on insert.

use serde::{Deserialize, Serialize};

/// A selectable vehicle category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    /// Human-readable label
    pub label: String,

    /// Normalized key (lowercase, whitespace collapsed to `_`)
    pub value: String,
}

impl CategoryOption {
    /// Build an option from a free-form label, deriving the value key.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_string();
        let value = normalize_value(&label);
        Self { label, value }
    }
}

/// The fixed built-in category set, in display order.
pub const BUILTIN_CATEGORIES: &[(&str, &str)] = &[
    ("Muscle", "muscle"),
    ("Sports", "sports"),
    ("Super", "super"),
    ("Sedan", "sedan"),
    ("Coupe", "coupe"),
    ("Compact", "compact"),
    ("SUV", "suv"),
    ("Offroad", "offroad"),
    ("Motorcycle", "motorcycle"),
    ("Van", "van"),
    ("Truck", "truck"),
];

/// Built-in categories as owned options.
#[must_use]
pub fn builtin_categories() -> Vec<CategoryOption> {
    BUILTIN_CATEGORIES
        .iter()
        .map(|&(label, value)| CategoryOption {
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// Normalize a label into a category value key.
///
/// Lowercases and collapses each whitespace run into a single
/// underscore: `"Off Road Racer"` becomes `off_road_racer`.
#[must_use]
pub fn normalize_value(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
