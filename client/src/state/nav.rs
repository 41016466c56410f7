//! Fixed navigation entries rendered by the dock.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Page served when the location path has no file segment.
pub const DEFAULT_PAGE: &str = "index.html";

/// Inline glyph drawn inside a dock item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Help,
    Gallery,
    Star,
    Team,
}

/// One navigation target in the dock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub href: &'static str,
    pub icon: NavIcon,
    pub label: &'static str,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { href: "index.html", icon: NavIcon::Home, label: "Home" },
    NavEntry { href: "contact.html", icon: NavIcon::Help, label: "Get Help" },
    NavEntry { href: "photos.html", icon: NavIcon::Gallery, label: "Our Work" },
    NavEntry { href: "reviews.html", icon: NavIcon::Star, label: "Reviews" },
    NavEntry { href: "team.html", icon: NavIcon::Team, label: "Our Team" },
];

/// Reduce a location pathname to the page file it names.
///
/// `/site/team.html` becomes `team.html`; a trailing slash or empty path
/// means the index page.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => DEFAULT_PAGE,
    }
}

impl NavEntry {
    /// Whether this entry links to `page`.
    pub fn is_active(&self, page: &str) -> bool {
        self.href == page
    }
}

/// Index of the entry matching `page`, if any.
pub fn active_index(entries: &[NavEntry], page: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.is_active(page))
}
