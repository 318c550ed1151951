//! Inline SVG glyphs used by the site chrome.
//!
//! Stroke-style 24x24 icons; colour follows `currentColor` so the parent's
//! text colour applies.

use leptos::prelude::*;

/// Shared SVG frame for stroke icons.
#[component]
pub fn Icon(#[prop(into)] class: String, children: Children) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

/// Upward trend line, used as the brand mark.
#[component]
pub fn TrendingUpIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <polyline points="22 7 13.5 15.5 8.5 10.5 2 17"></polyline>
            <polyline points="16 7 22 7 22 13"></polyline>
        </Icon>
    }
}

/// Three horizontal bars.
#[component]
pub fn MenuIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <line x1="4" y1="6" x2="20" y2="6"></line>
            <line x1="4" y1="12" x2="20" y2="12"></line>
            <line x1="4" y1="18" x2="20" y2="18"></line>
        </Icon>
    }
}

/// Diagonal cross.
#[component]
pub fn CloseIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M18 6 6 18"></path>
            <path d="m6 6 12 12"></path>
        </Icon>
    }
}
