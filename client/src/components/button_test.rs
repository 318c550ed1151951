use super::*;

#[test]
fn default_button_is_primary_without_size_modifier() {
    assert_eq!(button_class(ButtonVariant::default(), ButtonSize::default(), ""), "btn btn--primary");
}

#[test]
fn ghost_icon_button_classes() {
    assert_eq!(
        button_class(ButtonVariant::Ghost, ButtonSize::Icon, ""),
        "btn btn--ghost btn--icon"
    );
}

#[test]
fn block_button_appends_extra_classes() {
    assert_eq!(
        button_class(ButtonVariant::Primary, ButtonSize::Block, "site-nav__login"),
        "btn btn--primary btn--block site-nav__login"
    );
}

#[test]
fn whitespace_only_extra_is_ignored() {
    assert_eq!(button_class(ButtonVariant::Ghost, ButtonSize::Default, "   "), "btn btn--ghost");
}

#[test]
fn button_renders_children_and_title() {
    let html = view! {
        <Button variant=ButtonVariant::Ghost title="Open menu">"Menu"</Button>
    }
    .to_html();
    assert!(html.contains("btn btn--ghost"));
    assert!(html.contains("title=\"Open menu\""));
    assert!(html.contains("Menu"));
}
