//! Resolve the class prefix of a component.
//!
//! Every component renders its main class from a prefix. A component uses its
//! own default unless a custom prefix is set on it directly.
use smol_str::SmolStr;

use std::fmt;

/// The class prefix of a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(SmolStr);

impl Prefix {
    /// The default prefix of a dropdown.
    pub const DROPDOWN: &'static str = "dropdown";

    /// The default prefix of a dropdown item.
    pub const DROPDOWN_ITEM: &'static str = "dropdown-item";

    /// The default prefix of a dropdown header.
    pub const DROPDOWN_HEADER: &'static str = "dropdown-header";

    /// The default prefix of a dropdown divider.
    pub const DROPDOWN_DIVIDER: &'static str = "dropdown-divider";

    /// The default prefix of a navbar brand.
    pub const NAVBAR_BRAND: &'static str = "navbar-brand";

    /// Creates a new [`Prefix`].
    pub fn new(prefix: impl Into<SmolStr>) -> Self {
        Self(prefix.into())
    }

    /// Resolves a custom prefix against the default of a component.
    ///
    /// Empty custom prefixes fall back to the default.
    pub fn resolve(custom: Option<&str>, default: &'static str) -> Self {
        match custom {
            Some(custom) if !custom.trim().is_empty() => Self::new(custom.trim()),
            _ => Self(SmolStr::new_static(default)),
        }
    }

    /// Returns the prefix as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the class name of a part of the component, like `dropdown-item`.
    pub fn part(&self, part: &str) -> SmolStr {
        SmolStr::from(format!("{}-{part}", self.0))
    }

    /// Returns the selector matching every enabled item of the component.
    ///
    /// Items are marked with the `{prefix}-item` class; an item is excluded
    /// when it is marked disabled either by class or by attribute.
    pub fn item_selector(&self) -> String {
        format!(".{}:not(.disabled):not(:disabled)", self.part("item"))
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let resolve = |custom: Option<&str>| Prefix::resolve(custom, Prefix::DROPDOWN);

        assert_eq!(resolve(None).as_str(), "dropdown");
        assert_eq!(resolve(Some("")).as_str(), "dropdown");
        assert_eq!(resolve(Some("menu")).as_str(), "menu");
    }

    #[test]
    fn test_item_selector() {
        let prefix = Prefix::resolve(None, Prefix::DROPDOWN);

        assert_eq!(
            prefix.item_selector(),
            ".dropdown-item:not(.disabled):not(:disabled)"
        );
        assert_eq!(
            Prefix::new("my-menu").item_selector(),
            ".my-menu-item:not(.disabled):not(:disabled)"
        );
    }
}
