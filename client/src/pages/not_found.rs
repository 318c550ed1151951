//! Fallback page for paths with no route.

use leptos::prelude::*;

use super::PageIntro;
use crate::state::nav::page_url;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageIntro title="Page not found" lede="The page you requested does not exist.">
            <a class="text-emerald" href=page_url("Home")>"Return home"</a>
        </PageIntro>
    }
}
