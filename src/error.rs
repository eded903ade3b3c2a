use core::fmt;

/// Errors returned by the driver. `E` is the error type of the underlying `DisplayInterface`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The transport failed to complete a write.
    Interface(E),
    /// The driver was asked to talk to the display before `ViewText32::init` was called.
    NotInitialized,
}

impl<E> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Interface(_) => f.write_str("display interface write failed"),
            Error::NotInitialized => f.write_str("display used before initialization"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}
