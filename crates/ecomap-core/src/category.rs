//! Fixed category registry.
//!
//! Category styling is data, not per-category rendering logic: every entry
//! carries its icon token and CSS color tokens, and the client only ever
//! looks them up by id.

/// A point classification with its display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    /// Icon token; the client maps this to a concrete icon glyph.
    pub icon: &'static str,
    /// Accent color for labels and the marker glyph.
    pub color: &'static str,
    /// Background color for the map marker.
    pub marker_bg: &'static str,
}

/// The fixed category set. Loaded once at build time, never mutated or
/// persisted.
pub const CATEGORIES: [Category; 6] = [
    Category {
        id: "plastic",
        label: "Plastic",
        icon: "recycle",
        color: "#2563eb",
        marker_bg: "#dbeafe",
    },
    Category {
        id: "paper",
        label: "Paper",
        icon: "newspaper",
        color: "#d97706",
        marker_bg: "#fef3c7",
    },
    Category {
        id: "electronics",
        label: "Electronics",
        icon: "cpu",
        color: "#7c3aed",
        marker_bg: "#ede9fe",
    },
    Category {
        id: "glass",
        label: "Glass",
        icon: "wine",
        color: "#059669",
        marker_bg: "#d1fae5",
    },
    Category {
        id: "metal",
        label: "Metal",
        icon: "wrench",
        color: "#475569",
        marker_bg: "#e2e8f0",
    },
    Category {
        id: "organic",
        label: "Organic",
        icon: "leaf",
        color: "#65a30d",
        marker_bg: "#ecfccb",
    },
];

impl Category {
    pub fn find(id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|category| category.id == id)
    }

    /// All category ids, the "no filter applied" baseline selection.
    pub fn all_ids() -> Vec<String> {
        CATEGORIES.iter().map(|c| c.id.to_owned()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_the_six_fixed_categories() {
        let ids: Vec<_> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            ["plastic", "paper", "electronics", "glass", "metal", "organic"]
        );
    }

    #[test]
    fn lookup_by_id() {
        let glass = Category::find("glass").unwrap();
        assert_eq!(glass.label, "Glass");
        assert!(Category::find("cardboard").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = CATEGORIES.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATEGORIES.len());
    }
}
