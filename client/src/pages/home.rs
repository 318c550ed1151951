//! Landing page with the firm's headline pitch.

use leptos::prelude::*;

use super::PageIntro;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageIntro
            title="Consistent alpha, disciplined risk"
            lede="Institutional-grade portfolio management for institutions and high-net-worth investors."
        >
            <span class="performance-badge hover-lift">"Outperforming benchmarks since inception"</span>
        </PageIntro>
    }
}
