//! Top navigation bar with the brand mark, desktop links and the mobile panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the current path from `SiteLayout` and writes the layout's menu
//! signal. Desktop links are hidden on narrow viewports by CSS; the toggle and
//! mobile panel are hidden on wide ones.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{CloseIcon, MenuIcon, TrendingUpIcon};
use crate::components::nav_links::{NavLinks, NavPlacement};
use crate::content::{BRAND_DOMAIN, BRAND_NAME, INVESTOR_LOGIN_LABEL};
use crate::state::menu::MenuState;
use crate::state::nav::page_url;

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

/// Site header. `menu` is owned by the enclosing layout.
#[component]
pub fn SiteHeader(#[prop(into)] pathname: Signal<String>, menu: RwSignal<MenuState>) -> impl IntoView {
    let menu_open = move || menu.with(|m| m.open);
    let on_toggle = Callback::new(move |_: MouseEvent| toggle_menu(menu));
    let on_navigate = Callback::new(move |()| close_menu(menu));

    view! {
        <nav class="site-nav primary-gradient">
            <div class="site-nav__inner">
                <div class="site-nav__bar">
                    <a href=page_url("Home") class="site-brand">
                        <div class="site-brand__mark success-gradient">
                            <TrendingUpIcon class="site-brand__icon"/>
                        </div>
                        <div>
                            <h1 class="site-brand__name">{BRAND_NAME}</h1>
                            <p class="site-brand__domain">{BRAND_DOMAIN}</p>
                        </div>
                    </a>

                    <div class="site-nav__desktop">
                        <NavLinks placement=NavPlacement::Desktop pathname=pathname/>
                        <Button class="site-nav__login">{INVESTOR_LOGIN_LABEL}</Button>
                    </div>

                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="site-nav__toggle"
                        title="Toggle navigation menu"
                        on_click=on_toggle
                    >
                        {move || toggle_glyph(menu_open())}
                    </Button>
                </div>
            </div>

            <Show when=menu_open>
                <div class="site-nav__mobile">
                    <div class="site-nav__mobile-links">
                        <NavLinks placement=NavPlacement::Mobile pathname=pathname on_navigate=on_navigate/>
                        <Button size=ButtonSize::Block class="site-nav__login">{INVESTOR_LOGIN_LABEL}</Button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

/// Toggle button handler.
fn toggle_menu(menu: RwSignal<MenuState>) {
    menu.update(MenuState::toggle);
}

/// Mobile link handler; the panel never stays open across navigation.
fn close_menu(menu: RwSignal<MenuState>) {
    menu.update(MenuState::close);
}

/// Close glyph while the panel is open, menu glyph otherwise.
fn toggle_glyph(open: bool) -> AnyView {
    if open {
        view! { <CloseIcon class="site-nav__toggle-icon site-nav__toggle-icon--close"/> }.into_any()
    } else {
        view! { <MenuIcon class="site-nav__toggle-icon site-nav__toggle-icon--open"/> }.into_any()
    }
}
