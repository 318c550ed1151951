use client::state::nav::NAV_ITEMS;
use leptos_axum::generate_route_list;

fn routed_paths() -> Vec<String> {
    generate_route_list(client::app::App)
        .iter()
        .map(|listing| listing.path().to_owned())
        .collect()
}

#[test]
fn every_navigation_entry_has_a_route() {
    let paths = routed_paths();
    for item in NAV_ITEMS {
        assert!(paths.iter().any(|p| p == item.path), "no route for {}", item.path);
    }
}

#[test]
fn bare_root_is_routed() {
    assert!(routed_paths().iter().any(|p| p == "/"));
}
