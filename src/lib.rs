//! # uncheck_io
//!
//! Adapters that take `std::io::Error` out of the `io::Result` channel.
//!
//! - [`uncheck`]: free functions over closures of arity 0 to 4
//! - [`UncheckExt`]: the same conversion as methods on `io::Result`
//!
//! A failed operation raises a panic whose payload is an [`UncheckedIoError`], holding an
//! optional custom message and the original error as its source. The default panic hook shows
//! such a payload only as `Box<dyn Any>`; [`install_panic_hook`] prints it in full.

#![allow(clippy::multiple_crate_versions)]

pub mod uncheck;

pub use uncheck_io_shared_kernel::{Result, UncheckExt, UncheckedIoError, install_panic_hook, payload_message};
