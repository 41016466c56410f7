use super::*;

// =============================================================
// current_page
// =============================================================

#[test]
fn current_page_takes_last_segment() {
    assert_eq!(current_page("/team.html"), "team.html");
    assert_eq!(current_page("/site/nested/photos.html"), "photos.html");
}

#[test]
fn current_page_defaults_to_index_for_directory_paths() {
    assert_eq!(current_page("/"), DEFAULT_PAGE);
    assert_eq!(current_page(""), DEFAULT_PAGE);
    assert_eq!(current_page("/site/"), DEFAULT_PAGE);
}

#[test]
fn current_page_without_slash_is_returned_as_is() {
    assert_eq!(current_page("reviews.html"), "reviews.html");
}

// =============================================================
// NAV_ENTRIES
// =============================================================

#[test]
fn nav_entries_are_the_five_site_pages_in_order() {
    let hrefs = NAV_ENTRIES.iter().map(|e| e.href).collect::<Vec<_>>();
    assert_eq!(hrefs, vec!["index.html", "contact.html", "photos.html", "reviews.html", "team.html"]);
}

#[test]
fn nav_entries_have_distinct_targets() {
    for (i, a) in NAV_ENTRIES.iter().enumerate() {
        for b in &NAV_ENTRIES[i + 1..] {
            assert_ne!(a.href, b.href);
        }
    }
}

// =============================================================
// Active marking
// =============================================================

#[test]
fn exactly_one_entry_active_for_each_configured_page() {
    for entry in NAV_ENTRIES {
        let active = NAV_ENTRIES
            .iter()
            .filter(|e| e.is_active(entry.href))
            .collect::<Vec<_>>();
        assert_eq!(active.len(), 1, "page {}", entry.href);
        assert_eq!(active[0].href, entry.href);
    }
}

#[test]
fn no_entry_active_for_unknown_page() {
    assert!(NAV_ENTRIES.iter().all(|e| !e.is_active("pricing.html")));
    assert_eq!(active_index(NAV_ENTRIES, "pricing.html"), None);
}

#[test]
fn team_page_load_marks_only_our_team() {
    let page = current_page("/team.html");
    let idx = active_index(NAV_ENTRIES, page);
    assert_eq!(idx, Some(4));
    assert_eq!(NAV_ENTRIES[4].label, "Our Team");
    assert_eq!(NAV_ENTRIES.iter().filter(|e| e.is_active(page)).count(), 1);
}

#[test]
fn root_path_marks_home() {
    let page = current_page("/");
    assert_eq!(active_index(NAV_ENTRIES, page), Some(0));
}
