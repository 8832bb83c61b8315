//! Describe why the visibility of a disclosure changed.
use std::fmt;

/// The reason a toggle request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// A menu item was selected.
    Select,

    /// The toggle was clicked.
    Click,

    /// The user clicked outside of the component.
    RootClose,

    /// A key was pressed while the component had focus.
    Keydown,
}

impl Source {
    /// Returns the canonical name of the [`Source`].
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Select => "select",
            Source::Click => "click",
            Source::RootClose => "rootClose",
            Source::Keydown => "keydown",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The metadata delivered alongside every toggle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    /// The [`Source`] of the request.
    pub source: Source,
}

impl Metadata {
    /// Creates new [`Metadata`] with the given [`Source`].
    pub fn new(source: Source) -> Self {
        Self { source }
    }
}

impl From<Source> for Metadata {
    fn from(source: Source) -> Self {
        Self::new(source)
    }
}
