// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{Result, UncheckExt, UncheckedIoError};
pub use panic_hook::{install_panic_hook, payload_message};

pub mod error;
pub mod panic_hook;
