//! Relay item selections to listeners and close the menu.
//!
//! A selection is first reported to the [`Ambient`] listener established by
//! an enclosing component, then to the local listener of the component, and
//! finally closes the menu with [`Source::Select`].
//!
//! A listener reports a failure by returning a [`Fault`]. Faults never stop
//! the remaining listeners or the close; the first one is returned once the
//! menu has been closed. Panics are not caught and unwind past the close.
use crate::core::{Error, Fault, Interaction, Metadata, Outcome, Result, Scope, Source};
use crate::disclosure::Disclosure;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A listener notified of every selection with its key and [`Interaction`].
pub type OnSelect<'a, K> = Box<dyn FnMut(&K, &Interaction) -> Outcome + 'a>;

/// A selection listener established by an enclosing component.
///
/// An [`Ambient`] is handed down explicitly to the components nested inside
/// the one that created it. Cloning it shares the same listener.
pub struct Ambient<'a, K> {
    listener: Rc<RefCell<dyn FnMut(&K, &Interaction) -> Outcome + 'a>>,
}

impl<'a, K> Ambient<'a, K> {
    /// Creates a new [`Ambient`] listener.
    pub fn new(listener: impl FnMut(&K, &Interaction) -> Outcome + 'a) -> Self {
        Self {
            listener: Rc::new(RefCell::new(listener)),
        }
    }

    /// Notifies the listener of a selection.
    ///
    /// # Panics
    /// If the listener selects through the same [`Ambient`] while running.
    pub fn notify(&self, key: &K, interaction: &Interaction) -> Outcome {
        let mut listener = self.listener.borrow_mut();

        (*listener)(key, interaction)
    }
}

impl<K> Clone for Ambient<'_, K> {
    fn clone(&self) -> Self {
        Self {
            listener: Rc::clone(&self.listener),
        }
    }
}

impl<K> fmt::Debug for Ambient<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ambient").finish_non_exhaustive()
    }
}

/// Turns item selections into listener notifications and a close request.
pub struct Relay<'a, K> {
    disclosure: Disclosure<'a>,
    ambient: Option<Ambient<'a, K>>,
    on_select: Option<OnSelect<'a, K>>,
}

impl<'a, K> Relay<'a, K> {
    /// Creates a new [`Relay`] closing the given [`Disclosure`].
    pub fn new(disclosure: Disclosure<'a>) -> Self {
        Self {
            disclosure,
            ambient: None,
            on_select: None,
        }
    }

    /// Sets the [`Ambient`] listener of the enclosing component.
    pub fn ambient(mut self, ambient: Ambient<'a, K>) -> Self {
        self.ambient = Some(ambient);
        self
    }

    /// Sets the local selection listener.
    pub fn on_select(mut self, on_select: impl FnMut(&K, &Interaction) -> Outcome + 'a) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    pub(crate) fn set_ambient(&mut self, ambient: Ambient<'a, K>) {
        self.ambient = Some(ambient);
    }

    pub(crate) fn set_on_select(
        &mut self,
        on_select: impl FnMut(&K, &Interaction) -> Outcome + 'a,
    ) {
        self.on_select = Some(Box::new(on_select));
    }

    /// Returns the [`Disclosure`] closed by this [`Relay`].
    pub fn disclosure(&self) -> &Disclosure<'a> {
        &self.disclosure
    }

    /// Returns the [`Disclosure`] closed by this [`Relay`], mutably.
    pub fn disclosure_mut(&mut self) -> &mut Disclosure<'a> {
        &mut self.disclosure
    }

    /// Relays the selection of `key`.
    ///
    /// The ambient listener runs first, then the local one; both run even
    /// if the other fails. The menu is then closed with [`Source::Select`],
    /// unless the interaction was dispatched on the document root, which
    /// always reports [`Source::RootClose`].
    ///
    /// Returns the [`Metadata`] of the close, or the first listener fault
    /// as an [`Error::Listener`].
    pub fn relay(&mut self, key: &K, interaction: &Interaction) -> Result<Metadata> {
        log::debug!(
            "relaying selection: ambient={} local={}",
            self.ambient.is_some(),
            self.on_select.is_some()
        );

        let mut first_fault: Option<Error> = None;

        let mut record = |scope: Scope, fault: Fault| {
            if first_fault.is_some() {
                log::warn!("{scope:?} selection listener failed: {fault}");
            } else {
                first_fault = Some(Error::Listener {
                    scope,
                    source: fault,
                });
            }
        };

        if let Some(ambient) = &self.ambient
            && let Err(fault) = ambient.notify(key, interaction)
        {
            record(Scope::Ambient, fault);
        }

        if let Some(on_select) = &mut self.on_select
            && let Err(fault) = on_select(key, interaction)
        {
            record(Scope::Local, fault);
        }

        let metadata = self
            .disclosure
            .request_toggle(false, interaction, Some(Source::Select))?;

        match first_fault {
            Some(error) => Err(error),
            None => Ok(metadata),
        }
    }
}

impl<'a, K: 'a> Relay<'a, K> {
    /// Shares the [`Relay`] with nested components as an [`Ambient`]
    /// listener.
    ///
    /// Selections reported through the returned [`Ambient`] run the full
    /// relay, closing the menu.
    pub fn share(relay: &Rc<RefCell<Self>>) -> Ambient<'a, K> {
        let relay = Rc::clone(relay);

        Ambient::new(move |key: &K, interaction: &Interaction| {
            relay
                .borrow_mut()
                .relay(key, interaction)
                .map(|_| ())
                .map_err(Fault::from)
        })
    }
}

impl<K> fmt::Debug for Relay<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relay")
            .field("disclosure", &self.disclosure)
            .field("ambient", &self.ambient.is_some())
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}
