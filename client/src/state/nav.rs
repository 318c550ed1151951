//! Fixed site navigation and current-location matching.
//!
//! The list is shared by the header, the mobile panel and the footer so all
//! three render the same entries in the same order.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One navigation entry: a label and the path it links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavItem {
    /// Whether this entry is the current page. Exact match only.
    pub fn is_active(&self, pathname: &str) -> bool {
        self.path == pathname
    }

    /// Path without the leading slash, as used for router segments.
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

/// Site navigation, in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", path: "/home" },
    NavItem { label: "Investment Solutions", path: "/solutions" },
    NavItem { label: "Performance", path: "/performance" },
    NavItem { label: "About Us", path: "/about" },
    NavItem { label: "Contact", path: "/contact" },
];

/// Build the URL for a named page: `"/"` followed by the lowercased name with
/// spaces turned into dashes.
pub fn page_url(page_name: &str) -> String {
    format!("/{}", page_name.to_lowercase().replace(' ', "-"))
}

/// Index of the entry matching `pathname`, if any.
pub fn active_index(pathname: &str) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| item.is_active(pathname))
}
