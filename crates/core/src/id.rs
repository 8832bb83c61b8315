use smol_str::SmolStr;

use std::fmt;
use std::sync::atomic::{self, AtomicU64};

/// The identifier of a rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id(Internal);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Internal {
    Unique(u64),
    Custom(SmolStr),
}

static COUNT: AtomicU64 = AtomicU64::new(0);

impl Id {
    /// Creates a custom [`Id`].
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(Internal::Custom(id.into()))
    }

    /// Creates a unique [`Id`].
    ///
    /// This function produces a different [`Id`] every time it is called.
    pub fn unique() -> Self {
        let id = COUNT.fetch_add(1, atomic::Ordering::Relaxed);

        Self(Internal::Unique(id))
    }
}

impl From<&'static str> for Id {
    fn from(id: &'static str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Internal::Unique(id) => write!(f, "icy-strap-{id}"),
            Internal::Custom(id) => f.write_str(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_differ() {
        assert_ne!(Id::unique(), Id::unique());
    }

    #[test]
    fn test_custom_display() {
        assert_eq!(Id::new("menu").to_string(), "menu");
        assert_eq!(Id::from("menu"), Id::new("menu"));
    }
}
