//! Generic button control.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled emerald gradient.
    #[default]
    Primary,
    /// Transparent until hovered.
    Ghost,
}

/// Footprint of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    /// Square, sized for a single glyph.
    Icon,
    /// Full container width.
    Block,
}

/// Button with a variant/size class scheme and an optional click callback.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = button_class(variant, size, &class);

    view! {
        <button
            type="button"
            class=classes
            title=title
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

/// Compose the class list for a button. `extra` is appended verbatim.
fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Ghost => "btn--ghost",
    };
    let size_class = match size {
        ButtonSize::Default => "",
        ButtonSize::Icon => " btn--icon",
        ButtonSize::Block => " btn--block",
    };
    let extra = extra.trim();
    if extra.is_empty() {
        format!("btn {variant_class}{size_class}")
    } else {
        format!("btn {variant_class}{size_class} {extra}")
    }
}
