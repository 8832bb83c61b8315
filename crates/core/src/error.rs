/// A boxed error returned by a selection listener.
pub type Fault = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The result of a listener invocation.
pub type Outcome = std::result::Result<(), Fault>;

/// A specialized [`Result`] type for component operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which listener of a selection produced a [`Fault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The listener registered by an enclosing component.
    Ambient,

    /// The listener supplied to the component itself.
    Local,
}

/// An error produced by a component.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A toggle was requested without an explicit source, and the
    /// interaction kind does not map to one.
    #[error("cannot derive a toggle source from interaction kind {kind}")]
    IndeterminateSource {
        /// The name of the unmapped interaction kind.
        kind: String,
    },

    /// A selection listener failed.
    ///
    /// The menu is closed before this error is returned.
    #[error("{scope:?} selection listener failed")]
    Listener {
        /// The listener that failed.
        scope: Scope,

        /// The underlying fault.
        #[source]
        source: Fault,
    },
}
