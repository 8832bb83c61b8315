//! Own or mirror the open state of a disclosure.
//!
//! A [`Disclosure`] mediates every visibility change of a menu through
//! [`Disclosure::request_toggle`]. The request computes the toggle [`Source`]
//! and delivers exactly one notification; whoever holds the state decides
//! what to do with it.
use crate::core::{Error, Interaction, Metadata, Result, Source};

/// The single outward notification channel of a [`Disclosure`].
pub type OnToggle<'a> = Box<dyn FnMut(bool, &Interaction, Metadata) + 'a>;

/// Who holds the open state of a [`Disclosure`].
///
/// The strategy is picked at construction and stays fixed for the lifetime
/// of the [`Disclosure`].
pub enum Ownership<'a> {
    /// The [`Disclosure`] holds the state itself, starting at the given value.
    Owned(bool),

    /// An external owner holds the state.
    ///
    /// `get` reads the current value and `set` receives every requested
    /// change. The [`Disclosure`] never mutates the value on its own.
    Delegated {
        /// Reads the current state.
        get: Box<dyn Fn() -> bool + 'a>,
        /// Receives every requested change.
        set: OnToggle<'a>,
    },
}

impl<'a> Ownership<'a> {
    /// Creates a [`Ownership::Delegated`] strategy.
    pub fn delegated(
        get: impl Fn() -> bool + 'a,
        set: impl FnMut(bool, &Interaction, Metadata) + 'a,
    ) -> Self {
        Self::Delegated {
            get: Box::new(get),
            set: Box::new(set),
        }
    }
}

impl Default for Ownership<'_> {
    fn default() -> Self {
        Self::Owned(false)
    }
}

impl std::fmt::Debug for Ownership<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owned(open) => f.debug_tuple("Owned").field(open).finish(),
            Self::Delegated { get, .. } => f
                .debug_struct("Delegated")
                .field("open", &get())
                .finish_non_exhaustive(),
        }
    }
}

/// The open state of a menu attached to a toggle.
pub struct Disclosure<'a> {
    ownership: Ownership<'a>,
    on_toggle: Option<OnToggle<'a>>,
}

impl<'a> Disclosure<'a> {
    /// Creates a new [`Disclosure`] with the given [`Ownership`].
    pub fn new(ownership: Ownership<'a>) -> Self {
        Self {
            ownership,
            on_toggle: None,
        }
    }

    /// Creates a [`Disclosure`] that owns its state.
    pub fn owned(open: bool) -> Self {
        Self::new(Ownership::Owned(open))
    }

    /// Creates a [`Disclosure`] whose state is held by an external owner.
    pub fn delegated(
        get: impl Fn() -> bool + 'a,
        set: impl FnMut(bool, &Interaction, Metadata) + 'a,
    ) -> Self {
        Self::new(Ownership::delegated(get, set))
    }

    /// Sets the listener notified of every change of an owned [`Disclosure`].
    ///
    /// A delegated [`Disclosure`] already reports to its setter, so the
    /// listener is ignored in that case.
    pub fn on_toggle(mut self, on_toggle: impl FnMut(bool, &Interaction, Metadata) + 'a) -> Self {
        self.set_on_toggle(on_toggle);
        self
    }

    pub(crate) fn set_on_toggle(
        &mut self,
        on_toggle: impl FnMut(bool, &Interaction, Metadata) + 'a,
    ) {
        match self.ownership {
            Ownership::Owned(_) => self.on_toggle = Some(Box::new(on_toggle)),
            Ownership::Delegated { .. } => {
                log::warn!("ignoring toggle listener of a delegated disclosure");
            }
        }
    }

    /// Returns whether the menu is currently open.
    pub fn is_open(&self) -> bool {
        match &self.ownership {
            Ownership::Owned(open) => *open,
            Ownership::Delegated { get, .. } => get(),
        }
    }

    /// Returns `true` if the state is held by an external owner.
    pub fn is_delegated(&self) -> bool {
        matches!(self.ownership, Ownership::Delegated { .. })
    }

    /// Requests the menu to become open or closed.
    ///
    /// The [`Source`] is the explicit one if given, or the one derived from
    /// the kind of the [`Interaction`]. An interaction dispatched on the
    /// document root always reports [`Source::RootClose`].
    ///
    /// Exactly one notification is delivered per call, even if the state
    /// does not change.
    ///
    /// # Panics
    /// In debug builds, if no explicit source is given and the interaction
    /// kind does not map to one. Release builds return
    /// [`Error::IndeterminateSource`] instead and deliver nothing.
    pub fn request_toggle(
        &mut self,
        next_open: bool,
        interaction: &Interaction,
        source: Option<Source>,
    ) -> Result<Metadata> {
        let source = if interaction.is_from_root() {
            Source::RootClose
        } else if let Some(source) = source.or_else(|| interaction.kind.source()) {
            source
        } else {
            log::error!("cannot derive a toggle source from {:?}", interaction.kind);
            debug_assert!(
                false,
                "toggle requested without a source for {:?}",
                interaction.kind
            );

            return Err(Error::IndeterminateSource {
                kind: format!("{:?}", interaction.kind),
            });
        };

        let metadata = Metadata::new(source);

        log::debug!("disclosure toggle requested: open={next_open} source={source}");

        match &mut self.ownership {
            Ownership::Owned(open) => {
                *open = next_open;

                if let Some(on_toggle) = &mut self.on_toggle {
                    on_toggle(next_open, interaction, metadata);
                }
            }
            Ownership::Delegated { set, .. } => set(next_open, interaction, metadata),
        }

        Ok(metadata)
    }
}

impl Default for Disclosure<'_> {
    fn default() -> Self {
        Self::new(Ownership::default())
    }
}

impl std::fmt::Debug for Disclosure<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disclosure")
            .field("ownership", &self.ownership)
            .field("on_toggle", &self.on_toggle.is_some())
            .finish()
    }
}
