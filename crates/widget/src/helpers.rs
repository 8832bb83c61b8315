//! Helper functions to create components.
use crate::core::{Interaction, Outcome, SmolStr};
use crate::disclosure::Ownership;
use crate::dropdown::{Divider, Dropdown, Header, Item};
use crate::navbar_brand::NavbarBrand;
use crate::selection::Ambient;

/// Creates a new [`Dropdown`] with the given [`Ownership`] of its open state.
pub fn dropdown<'a, K: 'a>(ownership: Ownership<'a>) -> Dropdown<'a, K> {
    Dropdown::new(ownership)
}

/// Creates a new dropdown [`Item`].
pub fn dropdown_item<K>(key: K, label: impl Into<SmolStr>) -> Item<K> {
    Item::new(key, label)
}

/// Creates a new dropdown [`Header`].
pub fn dropdown_header(label: impl Into<SmolStr>) -> Header {
    Header::new(label)
}

/// Creates a new dropdown [`Divider`].
pub fn dropdown_divider() -> Divider {
    Divider::new()
}

/// Creates a new [`NavbarBrand`].
pub fn navbar_brand() -> NavbarBrand {
    NavbarBrand::new()
}

/// Creates an [`Ambient`] selection listener for the components nested
/// inside a container, like a navigation bar.
pub fn on_select<'a, K>(listener: impl FnMut(&K, &Interaction) -> Outcome + 'a) -> Ambient<'a, K> {
    Ambient::new(listener)
}
