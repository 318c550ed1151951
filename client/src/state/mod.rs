//! Site state modules.
//!
//! DESIGN
//! ======
//! `nav` holds the fixed navigation list and location matching; `menu` holds
//! the mobile menu visibility owned by one `SiteLayout` instance. Neither
//! touches the browser, so both are plain data and test without a DOM.

pub mod menu;
pub mod nav;
