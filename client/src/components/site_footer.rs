//! Site footer: brand blurb, navigation column, contact column and the
//! regulatory bottom bar.

use leptos::prelude::*;

use crate::components::icons::TrendingUpIcon;
use crate::components::nav_links::{NavLinks, NavPlacement};
use crate::content::{
    BRAND_DOMAIN, BRAND_NAME, CONTACT_EMAIL, CONTACT_HEADQUARTERS, CONTACT_LOCATION, CONTACT_PHONE, COPYRIGHT,
    DISCLOSURES, FOOTER_BLURB,
};

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

#[component]
pub fn SiteFooter(#[prop(into)] pathname: Signal<String>) -> impl IntoView {
    view! {
        <footer class="site-footer primary-gradient">
            <div class="site-footer__inner">
                <div class="site-footer__grid">
                    <div class="site-footer__about">
                        <div class="site-footer__brand">
                            <div class="site-brand__mark success-gradient">
                                <TrendingUpIcon class="site-brand__icon"/>
                            </div>
                            <div>
                                <h3 class="site-footer__brand-name">{BRAND_NAME}</h3>
                                <p class="site-footer__brand-domain">{BRAND_DOMAIN}</p>
                            </div>
                        </div>
                        <p class="site-footer__blurb">{FOOTER_BLURB}</p>
                    </div>

                    <div class="site-footer__column">
                        <h4 class="site-footer__heading">"Navigation"</h4>
                        <div class="site-footer__links">
                            <NavLinks placement=NavPlacement::Footer pathname=pathname/>
                        </div>
                    </div>

                    <div class="site-footer__column">
                        <h4 class="site-footer__heading">"Contact"</h4>
                        <div class="site-footer__contact">
                            <p class="site-footer__contact-title">{CONTACT_HEADQUARTERS}</p>
                            <p>{CONTACT_LOCATION}</p>
                            <p class="site-footer__contact-accent">{CONTACT_PHONE}</p>
                            <p class="site-footer__contact-accent">{CONTACT_EMAIL}</p>
                        </div>
                    </div>
                </div>

                <div class="site-footer__bottom">
                    <p class="site-footer__copyright">{COPYRIGHT}</p>
                    <div class="site-footer__disclosures">
                        {DISCLOSURES
                            .iter()
                            .map(|text| view! { <span class="site-footer__disclosure">{*text}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
