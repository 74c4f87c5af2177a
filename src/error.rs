//! Error handling primitives for the BMP388 register transport.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus link could not be brought up during initialization.
    Init(E),
    /// A bus transfer reported failure.
    Transport(E),
    /// The attachment configuration is invalid.
    InvalidConfig,
}

impl<E> Error<E> {
    /// Returns the underlying bus error, if any.
    pub fn bus_error(&self) -> Option<&E> {
        match self {
            Self::Init(err) | Self::Transport(err) => Some(err),
            Self::InvalidConfig => None,
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Transport(err)
    }
}
