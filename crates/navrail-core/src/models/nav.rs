//! Navigation route tables
//!
//! Both tables are fixed at definition time. Icons are logical names resolved
//! by the embedding application's icon registry.

use serde::Serialize;

/// A navigation target with display title, logical icon name, and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub title: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

/// Logo label shown next to the brand mark while the panel is open.
pub const BRAND_TITLE: &str = "TensorFlow";

/// Primary navigation, rendered at the top of the panel.
pub const PRIMARY_NAV: &[NavEntry] = &[
    NavEntry {
        title: "Home",
        icon: "house",
        path: "/",
    },
    NavEntry {
        title: "Sales",
        icon: "chart-line",
        path: "/sales",
    },
    NavEntry {
        title: "Costs",
        icon: "chart-column",
        path: "/costs",
    },
    NavEntry {
        title: "Payments",
        icon: "wallet",
        path: "/payments",
    },
    NavEntry {
        title: "Finances",
        icon: "chart-pie",
        path: "/finances",
    },
    NavEntry {
        title: "Messages",
        icon: "envelope",
        path: "/messages",
    },
];

/// Secondary navigation, pinned to the bottom of the panel.
pub const FOOTER_NAV: &[NavEntry] = &[
    NavEntry {
        title: "Settings",
        icon: "sliders",
        path: "/settings",
    },
    NavEntry {
        title: "Support",
        icon: "phone-volume",
        path: "/support",
    },
];

/// Iterate the primary entries followed by the footer entries.
pub fn all_entries() -> impl Iterator<Item = &'static NavEntry> {
    PRIMARY_NAV.iter().chain(FOOTER_NAV.iter())
}

/// Look up an entry by its display title.
pub fn find(title: &str) -> Option<&'static NavEntry> {
    all_entries().find(|entry| entry.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(PRIMARY_NAV.len(), 6);
        assert_eq!(FOOTER_NAV.len(), 2);
        assert_eq!(all_entries().count(), 8);
    }

    #[test]
    fn test_titles_are_unique() {
        let titles: HashSet<&str> = all_entries().map(|entry| entry.title).collect();
        assert_eq!(titles.len(), all_entries().count());
    }

    #[test]
    fn test_every_path_is_absolute() {
        for entry in all_entries() {
            assert!(
                entry.path.starts_with('/'),
                "path for {} is not absolute: {}",
                entry.title,
                entry.path
            );
        }
    }

    #[test]
    fn test_primary_order() {
        let titles: Vec<&str> = PRIMARY_NAV.iter().map(|entry| entry.title).collect();
        assert_eq!(
            titles,
            ["Home", "Sales", "Costs", "Payments", "Finances", "Messages"]
        );
    }

    #[test]
    fn test_find_by_title() {
        assert_eq!(find("Support").map(|entry| entry.path), Some("/support"));
        assert_eq!(find("Home").map(|entry| entry.icon), Some("house"));
        assert!(find("Billing").is_none());
    }
}
