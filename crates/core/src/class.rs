//! Build lists of class names.
use smol_str::SmolStr;

use std::fmt;

/// An ordered list of class names.
///
/// Empty names are skipped and duplicates are kept, so the rendered output
/// reflects exactly what was pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classes {
    names: Vec<SmolStr>,
}

impl Classes {
    /// Creates an empty list of [`Classes`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every whitespace-separated name in `names`.
    pub fn push(&mut self, names: impl AsRef<str>) {
        self.names
            .extend(names.as_ref().split_whitespace().map(SmolStr::new));
    }

    /// Appends `name` only if `condition` holds.
    pub fn push_if(&mut self, condition: bool, name: impl AsRef<str>) {
        if condition {
            self.push(name);
        }
    }

    /// Appends every name in `names`, builder style.
    #[must_use]
    pub fn with(mut self, names: impl AsRef<str>) -> Self {
        self.push(names);
        self
    }

    /// Appends `name` if `condition` holds, builder style.
    #[must_use]
    pub fn with_if(mut self, condition: bool, name: impl AsRef<str>) -> Self {
        self.push_if(condition, name);
        self
    }

    /// Returns `true` if the list contains `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|class| class == name)
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns an iterator over the class names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(SmolStr::as_str)
    }
}

impl fmt::Display for Classes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            f.write_str(name)?;
        }

        Ok(())
    }
}

impl From<&str> for Classes {
    fn from(names: &str) -> Self {
        Self::new().with(names)
    }
}

impl From<String> for Classes {
    fn from(names: String) -> Self {
        Self::new().with(names)
    }
}
