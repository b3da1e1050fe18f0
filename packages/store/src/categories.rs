//! # Food categories
//!
//! The fixed set of categories a location can be reported under, plus the
//! `custom` escape hatch that carries a free-text label on the location
//! itself. Category ids are stored as plain strings in the database so that
//! documents written by older clients (or with unknown ids) still render:
//! label resolution falls back to the raw id string.

use serde::{Deserialize, Serialize};

/// A category in the fixed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Stable id stored on location records: "free_khana", "tran", ...
    pub id: &'static str,
    /// Human-facing label shown on cards, chips and map pins.
    pub label: &'static str,
    /// Marker/badge colour as a CSS hex string.
    pub color: &'static str,
}

/// All known categories, in display order. `custom` is always last.
pub const CATEGORIES: [Category; 5] = [
    Category { id: "free_khana", label: "ফ্রি খানা 😋", color: "#ef4444" },
    Category { id: "tran", label: "গরিবের ত্রাণ 📦", color: "#3b82f6" },
    Category { id: "jilapi", label: "মসজিদে জিলাপি 🥨", color: "#10b981" },
    Category { id: "biriyani", label: "মসজিদে বিরিয়ানি 🍛", color: "#f59e0b" },
    Category { id: "custom", label: "অন্যান্য (কাস্টম) ✨", color: "#8b5cf6" },
];

/// Look up a category by its stable id.
pub fn find(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Resolve the display label for a location's category.
///
/// A `custom` location displays its own label; a known id displays the
/// enumerated label; an unknown id displays the raw id string as a last
/// resort rather than hiding the record.
pub fn display_label<'a>(category: &'a str, custom_category: Option<&'a str>) -> &'a str {
    if category == "custom" {
        if let Some(label) = custom_category.filter(|l| !l.trim().is_empty()) {
            return label;
        }
    }
    find(category).map(|c| c.label).unwrap_or(category)
}

/// Badge/marker colour for a category id. Unknown ids share the custom colour.
pub fn color(category: &str) -> &'static str {
    find(category).map(|c| c.color).unwrap_or("#8b5cf6")
}

/// Client-side category filter over an already-fetched location list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// The "all" sentinel: everything passes through.
    #[default]
    All,
    /// Only locations whose category id equals this value.
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => category == id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_label_wins_over_raw_id() {
        assert_eq!(display_label("custom", Some("Biriyani Mela")), "Biriyani Mela");
    }

    #[test]
    fn custom_without_label_falls_back_to_enumerated_label() {
        // A custom location should never display the literal string "custom".
        assert_eq!(display_label("custom", None), "অন্যান্য (কাস্টম) ✨");
        assert_eq!(display_label("custom", Some("   ")), "অন্যান্য (কাস্টম) ✨");
    }

    #[test]
    fn known_id_resolves_to_label() {
        assert_eq!(display_label("free_khana", None), "ফ্রি খানা 😋");
        assert_eq!(display_label("tran", Some("ignored")), "গরিবের ত্রাণ 📦");
    }

    #[test]
    fn unknown_id_displays_raw_string() {
        assert_eq!(display_label("street_iftar", None), "street_iftar");
    }

    #[test]
    fn filter_all_passes_everything() {
        let f = CategoryFilter::All;
        assert!(f.matches("free_khana"));
        assert!(f.matches("anything"));
    }

    #[test]
    fn filter_only_matches_exact_id() {
        let f = CategoryFilter::Only("jilapi".to_string());
        assert!(f.matches("jilapi"));
        assert!(!f.matches("biriyani"));
    }
}
