//! Use the built-in components of icy_strap.
//!
//! Components render into a [`Node`](core::Node) tree and react to
//! [`Interaction`](core::Interaction)s handed to them by the host. Dropdowns
//! hold their open state through a [`Disclosure`] and route item selections
//! through a [`Relay`].
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/iced-rs/iced/9ab6923e943f784985e9ef9ca28b10278297225d/docs/logo.svg"
)]
pub use icy_strap_core as core;

mod helpers;

pub mod disclosure;
pub mod dropdown;
pub mod navbar_brand;
pub mod selection;

pub use disclosure::{Disclosure, OnToggle, Ownership};
pub use dropdown::Dropdown;
pub use helpers::*;
pub use navbar_brand::NavbarBrand;
pub use selection::{Ambient, OnSelect, Relay};
