//! Site chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SiteLayout` is the only component pages interact with. It composes the
//! header, body slot and footer from the modules below, which in turn build on
//! the `button` and `icons` primitives.

pub mod button;
pub mod icons;
pub mod nav_links;
pub mod site_footer;
pub mod site_header;
pub mod site_layout;
