//! Page chrome wrapping every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SiteLayout` sits directly under the `Router`. It is the only place that
//! reads the router location and the only owner of the mobile menu state;
//! everything below receives those as props.

use leptos::prelude::*;
use leptos_meta::Style;
use leptos_router::hooks::use_location;

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::menu::MenuState;

#[cfg(test)]
#[path = "site_layout_test.rs"]
mod site_layout_test;

/// Theme variables, gradient helpers and the badge pulse keyframes.
const THEME_CSS: &str = include_str!("../../style/theme.css");

/// Header, body slot and footer around `children`.
#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    let location = use_location();
    let pathname: Signal<String> = location.pathname.into();
    let menu = RwSignal::new(MenuState::default());

    view! {
        <Style id="site-theme">{THEME_CSS}</Style>
        <div class="site">
            <SiteHeader pathname=pathname menu=menu/>
            <PageBody>{children()}</PageBody>
            <SiteFooter pathname=pathname/>
        </div>
    }
}

/// Body region. Children are rendered as given.
#[component]
pub fn PageBody(children: Children) -> impl IntoView {
    view! { <main class="site-main">{children()}</main> }
}
