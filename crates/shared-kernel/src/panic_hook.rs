// crates/shared-kernel/src/panic_hook.rs
use std::{any::Any, panic, thread};

use crate::UncheckedIoError;

/// Text for a panic payload raised by [`UncheckedIoError::raise`], if it is one.
pub fn payload_message(payload: &(dyn Any + Send)) -> Option<String> {
    payload.downcast_ref::<UncheckedIoError>().map(UncheckedIoError::describe)
}

/// Installs a panic hook that prints [`UncheckedIoError`] payloads with their message and cause.
///
/// Other payloads are handed to the hook that was installed before.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| match payload_message(info.payload()) {
        Some(message) => {
            let location = info.location().map(|l| format!(" at {l}")).unwrap_or_default();
            let current = thread::current();
            eprintln!("thread '{}' panicked{location}:\n{message}", current.name().unwrap_or("<unnamed>"));
        }
        None => previous(info),
    }));
}
