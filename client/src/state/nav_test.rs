use super::*;

// =============================================================
// NAV_ITEMS
// =============================================================

#[test]
fn nav_items_are_in_display_order() {
    let labels: Vec<&str> = NAV_ITEMS.iter().map(|item| item.label).collect();
    assert_eq!(
        labels,
        ["Home", "Investment Solutions", "Performance", "About Us", "Contact"]
    );
}

#[test]
fn nav_item_paths_follow_page_url_convention() {
    let pages = ["Home", "Solutions", "Performance", "About", "Contact"];
    for (item, page) in NAV_ITEMS.iter().zip(pages) {
        assert_eq!(item.path, page_url(page));
    }
}

#[test]
fn nav_item_paths_are_distinct() {
    for (i, a) in NAV_ITEMS.iter().enumerate() {
        for (j, b) in NAV_ITEMS.iter().enumerate() {
            if i != j {
                assert_ne!(a.path, b.path);
            }
        }
    }
}

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(NAV_ITEMS[1].segment(), "solutions");
}

// =============================================================
// page_url
// =============================================================

#[test]
fn page_url_lowercases_name() {
    assert_eq!(page_url("Home"), "/home");
}

#[test]
fn page_url_dashes_spaces() {
    assert_eq!(page_url("Investor Relations"), "/investor-relations");
}

// =============================================================
// active matching
// =============================================================

#[test]
fn exactly_one_entry_active_for_each_nav_path() {
    for (index, item) in NAV_ITEMS.iter().enumerate() {
        let active: Vec<usize> = NAV_ITEMS
            .iter()
            .enumerate()
            .filter(|(_, other)| other.is_active(item.path))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![index]);
        assert_eq!(active_index(item.path), Some(index));
    }
}

#[test]
fn unknown_path_marks_nothing_active() {
    assert_eq!(active_index("/careers"), None);
    assert!(NAV_ITEMS.iter().all(|item| !item.is_active("/careers")));
}

#[test]
fn root_path_marks_nothing_active() {
    assert_eq!(active_index("/"), None);
}

#[test]
fn prefix_and_suffix_paths_do_not_match() {
    assert_eq!(active_index("/performance/2024"), None);
    assert_eq!(active_index("/perf"), None);
    assert_eq!(active_index("/home/"), None);
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(active_index("/Home"), None);
}
