//! The core library of icy_strap.
//!
//! This library holds basic types that can be reused by the components of
//! icy_strap and by hosts embedding them: the [`Interaction`]s a component
//! reacts to, the toggle [`Source`] reported with every visibility change,
//! class lists, and the [`Node`] tree components render into.
//!
//! It does not depend on any rendering or windowing library.
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/iced-rs/iced/9ab6923e943f784985e9ef9ca28b10278297225d/docs/logo.svg"
)]
pub mod class;
pub mod interaction;
pub mod node;
pub mod prefix;
pub mod toggle;

mod error;
mod id;

pub use class::Classes;
pub use error::{Error, Fault, Outcome, Result, Scope};
pub use id::Id;
pub use interaction::{Interaction, Kind, Origin};
pub use node::{Child, Node, Tag};
pub use prefix::Prefix;
pub use smol_str::SmolStr;
pub use toggle::{Metadata, Source};
