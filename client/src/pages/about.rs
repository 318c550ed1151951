//! Firm background page.

use leptos::prelude::*;

use super::PageIntro;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageIntro
            title="About Us"
            lede="An independent adviser combining quantitative research with fundamental conviction."
        />
    }
}
