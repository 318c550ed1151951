//! Overview of the firm's investment offerings.

use leptos::prelude::*;

use super::PageIntro;

#[component]
pub fn SolutionsPage() -> impl IntoView {
    view! {
        <PageIntro
            title="Investment Solutions"
            lede="Separately managed accounts, multi-asset strategies and bespoke mandates built around each client's objectives."
        />
    }
}
