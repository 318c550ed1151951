//! Strategy performance summary.

use leptos::prelude::*;

use super::PageIntro;

#[component]
pub fn PerformancePage() -> impl IntoView {
    view! {
        <PageIntro
            title="Performance"
            lede="Net-of-fee results across our flagship strategies. Past performance does not guarantee future results."
        />
    }
}
