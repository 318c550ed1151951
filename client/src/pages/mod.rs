//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! Pages are the opaque content `SiteLayout` renders in its body slot. They
//! share one intro block so the chrome can be exercised end to end.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod performance;
pub mod solutions;

use leptos::prelude::*;

/// Title + lede block used at the top of each page.
#[component]
pub fn PageIntro(
    title: &'static str,
    lede: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="page">
            <h2 class="page__title">{title}</h2>
            <p class="page__lede">{lede}</p>
            {children.map(|children| children())}
        </section>
    }
}
