//! icy_strap provides dropdown and navbar components for icy_ui front-ends.
//!
//! Components are plain Rust values. A host feeds them [`Interaction`]s
//! produced by its overlay layer (clicks on a toggle, key presses, clicks
//! outside of the component) and renders the [`Node`] tree they produce.
//!
//! # Dropdowns
//! A [`Dropdown`] keeps track of whether its menu is shown. The state is
//! either owned by the dropdown or delegated to the application:
//!
//! ```
//! use icy_strap::{Interaction, Ownership, Source};
//! use icy_strap::widget::dropdown;
//!
//! let mut menu = dropdown::<&str>(Ownership::Owned(false))
//!     .on_toggle(|open, _: &Interaction, metadata| {
//!         println!("open: {open} ({})", metadata.source);
//!     });
//!
//! let metadata = menu.toggle(&Interaction::click("toggle"))?;
//! assert_eq!(metadata.source, Source::Click);
//!
//! let metadata = menu.toggle(&Interaction::outside_click())?;
//! assert_eq!(metadata.source, Source::RootClose);
//! # Ok::<(), icy_strap::Error>(())
//! ```
//!
//! Selecting an item notifies the listener of the enclosing component
//! first, then the listener of the dropdown, and always closes the menu
//! with [`Source::Select`].
//!
//! # Navbar brands
//! ```
//! use icy_strap::widget::navbar_brand;
//!
//! let brand = navbar_brand().href("/").push("icy");
//!
//! assert_eq!(brand.view().to_string(), "<a class=\"navbar-brand\" href=\"/\">icy</a>");
//! ```
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/iced-rs/iced/9ab6923e943f784985e9ef9ca28b10278297225d/docs/logo.svg"
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_strap_core as core;
pub use icy_strap_widget as widget;

pub use crate::core::{
    Child, Classes, Error, Fault, Id, Interaction, Kind, Metadata, Node, Origin, Outcome, Prefix,
    Result, Scope, Source, Tag,
};
pub use crate::widget::{Ambient, Disclosure, Dropdown, NavbarBrand, Ownership, Relay};

pub mod dropdown {
    //! Dropdowns toggle a menu of selectable items.
    pub use crate::widget::dropdown::{Direction, Divider, Dropdown, Header, Item};
}
