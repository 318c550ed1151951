//! # client
//!
//! Leptos frontend for the NovoVentureCap public website.
//!
//! The crate is built around one layout component, `SiteLayout`, which wraps
//! every page in the site chrome: navigation header with a collapsible mobile
//! panel, the page body slot, and the footer. The navigation list and brand
//! copy are static; the only runtime state is whether the mobile menu is open.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("hydrating site layout");
    }
    leptos::mount::hydrate_body(app::App);
}
