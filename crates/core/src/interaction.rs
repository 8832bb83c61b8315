//! Describe the user interactions that drive components.
//!
//! An [`Interaction`] is produced by the overlay layer (clicks on the toggle,
//! key presses, clicks outside of the component) and handed to the component
//! that has to react to it.
use crate::Id;
use crate::toggle::Source;

use smol_str::SmolStr;

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    /// The type classifier of the interaction.
    pub kind: Kind,

    /// Where the interaction was dispatched.
    pub origin: Origin,
}

impl Interaction {
    /// Creates a new [`Interaction`].
    pub fn new(kind: Kind, origin: Origin) -> Self {
        Self { kind, origin }
    }

    /// A click on the element with the given [`Id`].
    pub fn click(target: impl Into<Id>) -> Self {
        Self::new(Kind::Click, Origin::Element(target.into()))
    }

    /// A key press on the element with the given [`Id`].
    pub fn key_down(target: impl Into<Id>) -> Self {
        Self::new(Kind::KeyDown, Origin::Element(target.into()))
    }

    /// A click dispatched on the document root, outside of any component.
    pub fn outside_click() -> Self {
        Self::new(Kind::Click, Origin::Root)
    }

    /// Returns `true` if the interaction was dispatched on the document root.
    pub fn is_from_root(&self) -> bool {
        matches!(self.origin, Origin::Root)
    }
}

/// The type classifier of an [`Interaction`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A click or tap.
    Click,

    /// A key was pressed.
    KeyDown,

    /// A key was released.
    KeyUp,

    /// A mouse button was pressed.
    MouseDown,

    /// Any other interaction, named by the host.
    Other(SmolStr),
}

impl Kind {
    /// Returns the toggle [`Source`] this kind maps to, if any.
    pub fn source(&self) -> Option<Source> {
        match self {
            Kind::Click => Some(Source::Click),
            Kind::KeyDown => Some(Source::Keydown),
            Kind::KeyUp | Kind::MouseDown | Kind::Other(_) => None,
        }
    }
}

/// Where an [`Interaction`] was dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The document root.
    Root,

    /// A rendered element.
    Element(Id),
}
