use std::io;

use thiserror::Error;

/// Soft-failure sentinel returned by [`Counter::read`] when an open counter
/// could not deliver a value. Kept as a return value rather than an error so
/// polling callers can tolerate occasional misses without unwinding.
///
/// [`Counter::read`]: crate::count::Counter::read
pub const READ_FAILED: i64 = -1;

#[derive(Debug, Error)]
pub enum Error {
    /// The counter resource could not be opened or armed (permission denied,
    /// unsupported event, fd limits). The handle stays usable; the caller
    /// may retry [`Counter::start`].
    ///
    /// [`Counter::start`]: crate::count::Counter::start
    #[error("counter unavailable")]
    Unavailable(#[source] io::Error),

    /// The operation needs an open counter, but no `start` has succeeded
    /// since the handle was constructed or last closed.
    #[error("counter not started")]
    NotStarted,
}

pub type Result<T> = std::result::Result<T, Error>;
