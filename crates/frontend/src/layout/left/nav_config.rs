//! Static navigation tree of the sidebar and its expand/collapse state.
//!
//! Entry names double as page names (for leaves) and i18n label keys.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub icon: &'static str,
    pub children: &'static [NavEntry],
}

impl NavEntry {
    const fn leaf(name: &'static str, icon: &'static str) -> Self {
        Self {
            name,
            icon,
            children: &[],
        }
    }

    const fn group(name: &'static str, icon: &'static str, children: &'static [NavEntry]) -> Self {
        Self {
            name,
            icon,
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

pub const DEFAULT_PAGE: &str = "leads";

pub static NAV: &[NavEntry] = &[
    NavEntry::leaf("leads", "leads"),
    NavEntry::leaf("deals", "deals"),
    NavEntry::group(
        "inventory",
        "inventory",
        &[
            NavEntry::leaf("units", "key"),
            NavEntry::leaf("projects", "building"),
            NavEntry::leaf("developers", "building"),
            NavEntry::leaf("owners", "users"),
        ],
    ),
    NavEntry::group(
        "catalog",
        "products",
        &[
            NavEntry::leaf("products", "products"),
            NavEntry::leaf("productCategories", "tag"),
            NavEntry::leaf("suppliers", "suppliers"),
        ],
    ),
    NavEntry::group(
        "serviceCatalog",
        "services",
        &[
            NavEntry::leaf("services", "services"),
            NavEntry::leaf("servicePackages", "layers"),
            NavEntry::leaf("serviceProviders", "suppliers"),
        ],
    ),
    NavEntry::group(
        "marketing",
        "megaphone",
        &[
            NavEntry::leaf("campaigns", "megaphone"),
            NavEntry::leaf("integrationAccounts", "plug"),
        ],
    ),
    NavEntry::leaf("users", "users"),
];

/// Leaf names, in sidebar order
pub fn page_names() -> Vec<&'static str> {
    fn walk(entries: &[NavEntry], out: &mut Vec<&'static str>) {
        for entry in entries {
            if entry.has_children() {
                walk(entry.children, out);
            } else {
                out.push(entry.name);
            }
        }
    }
    let mut out = Vec::new();
    walk(NAV, &mut out);
    out
}

pub fn is_known_page(name: &str) -> bool {
    page_names().contains(&name)
}

/// Leaves match by name; parents are active while one of their children is
pub fn is_entry_active(entry: &NavEntry, current_page: &str) -> bool {
    entry.name == current_page
        || entry
            .children
            .iter()
            .any(|child| is_entry_active(child, current_page))
}

/// Below the breakpoint the sidebar is an overlay that closes after a pick
pub fn should_close_after_select(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width < breakpoint
}

/// Which parents are expanded, keyed by entry name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    expanded: HashSet<String>,
}

impl SidebarState {
    /// Parents holding `current_page` start expanded
    pub fn for_page(current_page: &str) -> Self {
        let expanded = NAV
            .iter()
            .filter(|e| e.has_children() && is_entry_active(e, current_page))
            .map(|e| e.name.to_string())
            .collect();
        Self { expanded }
    }

    pub fn toggle(&mut self, name: &str) {
        if !self.expanded.remove(name) {
            self.expanded.insert(name.to_string());
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_only_that_entry() {
        let mut state = SidebarState::default();
        state.toggle("inventory");
        assert!(state.is_expanded("inventory"));
        assert!(!state.is_expanded("catalog"));

        state.toggle("catalog");
        state.toggle("inventory");
        assert!(!state.is_expanded("inventory"));
        assert!(state.is_expanded("catalog"));
    }

    #[test]
    fn test_parent_active_through_child() {
        let inventory = NAV.iter().find(|e| e.name == "inventory").unwrap();
        assert!(is_entry_active(inventory, "owners"));
        assert!(!is_entry_active(inventory, "leads"));

        let leads = NAV[0];
        assert!(is_entry_active(&leads, "leads"));
        assert!(!is_entry_active(&leads, "deals"));
    }

    #[test]
    fn test_every_entity_page_is_reachable() {
        let pages = page_names();
        assert_eq!(pages.len(), 15);
        assert!(pages.contains(&"integrationAccounts"));
        assert!(!is_known_page("inventory"));
    }

    #[test]
    fn test_close_after_select_below_breakpoint() {
        assert!(should_close_after_select(500.0, 768.0));
        assert!(!should_close_after_select(768.0, 768.0));
        assert!(!should_close_after_select(1280.0, 768.0));
    }

    #[test]
    fn test_initial_expansion_follows_page() {
        let state = SidebarState::for_page("servicePackages");
        assert!(state.is_expanded("serviceCatalog"));
        assert!(!state.is_expanded("inventory"));
    }
}
