// crates/shared-kernel/src/error.rs
use std::io;

use thiserror::Error;

/// An I/O failure that has been taken out of the `io::Result` channel.
///
/// The original [`io::Error`] is kept as the [`source`](std::error::Error::source) exactly as it
/// was returned, so callers inspecting the cause chain see the same kind and message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct UncheckedIoError {
    message: String,
    #[source]
    source: io::Error,
}

pub type Result<T> = std::result::Result<T, UncheckedIoError>;

impl UncheckedIoError {
    /// Wraps `source`, using its display text as the message.
    pub fn new(source: io::Error) -> Self {
        Self { message: source.to_string(), source }
    }

    pub fn with_message(message: impl Into<String>, source: io::Error) -> Self {
        Self { message: message.into(), source }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped error, unchanged.
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    pub fn into_io_error(self) -> io::Error {
        self.source
    }

    /// Message, kind and wrapped error on one line.
    pub fn describe(&self) -> String {
        format!("{} (caused by {:?}: {})", self.message, self.kind(), self.source)
    }

    /// Raises `self` as a panic payload.
    ///
    /// The payload can be recovered with [`std::panic::catch_unwind`] followed by
    /// `downcast::<UncheckedIoError>()`. The default panic hook cannot print a struct payload;
    /// see [`install_panic_hook`](crate::install_panic_hook).
    #[track_caller]
    pub fn raise(self) -> ! {
        #[cfg(feature = "log")]
        log::error!("raising unchecked I/O error: {}", self.describe());
        std::panic::panic_any(self)
    }
}

impl From<io::Error> for UncheckedIoError {
    fn from(err: io::Error) -> Self {
        Self::new(err)
    }
}

impl From<UncheckedIoError> for io::Error {
    fn from(err: UncheckedIoError) -> Self {
        err.into_io_error()
    }
}

/// Extension trait to take an `io::Result` out of the checked channel.
///
/// `wrap*` keep a `Result` with the wrapped error; `uncheck*` raise it as a panic.
/// Message closures run only on the error path.
pub trait UncheckExt<T> {
    fn wrap(self) -> Result<T>;
    fn wrap_with<F, M>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> M,
        M: Into<String>;
    fn uncheck(self) -> T;
    fn uncheck_with<F, M>(self, f: F) -> T
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T> UncheckExt<T> for io::Result<T> {
    fn wrap(self) -> Result<T> {
        self.map_err(|e| logged(UncheckedIoError::new(e)))
    }

    fn wrap_with<F, M>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        self.map_err(|e| logged(UncheckedIoError::with_message(f(), e)))
    }

    #[track_caller]
    fn uncheck(self) -> T {
        match self.wrap() {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }

    #[track_caller]
    fn uncheck_with<F, M>(self, f: F) -> T
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        match self.wrap_with(f) {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }
}

fn logged(err: UncheckedIoError) -> UncheckedIoError {
    #[cfg(feature = "log")]
    log::debug!("unchecking I/O error: {}", err.describe());
    err
}
