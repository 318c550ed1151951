//! Site navigation link list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered three times per page (desktop header, mobile panel, footer) from
//! the same fixed list. Links are plain anchors; the router intercepts them
//! for client-side navigation.

use leptos::prelude::*;

use crate::state::nav::{NAV_ITEMS, NavItem};

#[cfg(test)]
#[path = "nav_links_test.rs"]
mod nav_links_test;

/// Where a navigation list is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPlacement {
    Desktop,
    Mobile,
    Footer,
}

/// The five site links for one placement.
///
/// `on_navigate` runs after a link is activated, before the router handles
/// the navigation.
#[component]
pub fn NavLinks(
    placement: NavPlacement,
    #[prop(into)] pathname: Signal<String>,
    #[prop(optional)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    NAV_ITEMS
        .iter()
        .map(|item| nav_link(*item, placement, pathname, on_navigate))
        .collect_view()
}

fn nav_link(
    item: NavItem,
    placement: NavPlacement,
    pathname: Signal<String>,
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let class = move || nav_link_class(placement, pathname.with(|path| item.is_active(path)));

    view! {
        <a
            href=item.path
            class=class
            on:click=move |_| activate(on_navigate)
        >
            {item.label}
        </a>
    }
}

/// Link activation: notify the owner before the router navigates.
fn activate(on_navigate: Option<Callback<()>>) {
    if let Some(cb) = on_navigate {
        cb.run(());
    }
}

/// Link class for a placement. Footer links never show the active marker.
fn nav_link_class(placement: NavPlacement, active: bool) -> &'static str {
    match (placement, active) {
        (NavPlacement::Desktop, false) => "site-nav__link",
        (NavPlacement::Desktop, true) => "site-nav__link site-nav__link--active",
        (NavPlacement::Mobile, false) => "site-nav__link site-nav__link--block",
        (NavPlacement::Mobile, true) => "site-nav__link site-nav__link--block site-nav__link--active",
        (NavPlacement::Footer, _) => "site-footer__link",
    }
}
