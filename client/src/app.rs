//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_layout::SiteLayout;
use crate::content::{BRAND_NAME, FOOTER_BLURB};
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, not_found::NotFoundPage,
    performance::PerformancePage, solutions::SolutionsPage,
};
use crate::state::nav::NAV_ITEMS;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every route renders inside `SiteLayout`. The bare root shows the home page
/// but highlights no navigation entry, since matching is exact.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let [home, solutions, performance, about, contact] = NAV_ITEMS;

    view! {
        <Stylesheet id="leptos" href="/pkg/novovcap.css"/>
        <Title text=BRAND_NAME/>
        <Meta name="description" content=FOOTER_BLURB/>

        <Router>
            <SiteLayout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment(home.segment()) view=HomePage/>
                    <Route path=StaticSegment(solutions.segment()) view=SolutionsPage/>
                    <Route path=StaticSegment(performance.segment()) view=PerformancePage/>
                    <Route path=StaticSegment(about.segment()) view=AboutPage/>
                    <Route path=StaticSegment(contact.segment()) view=ContactPage/>
                </Routes>
            </SiteLayout>
        </Router>
    }
}
