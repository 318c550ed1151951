//! Investor relations contact details.

use leptos::prelude::*;

use super::PageIntro;
use crate::content::{CONTACT_EMAIL, CONTACT_PHONE};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageIntro title="Contact" lede="Speak with our investor relations team.">
            <p class="text-emerald">{CONTACT_PHONE}</p>
            <p class="text-emerald">{CONTACT_EMAIL}</p>
        </PageIntro>
    }
}
