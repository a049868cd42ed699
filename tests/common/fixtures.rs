#![allow(dead_code)]
// tests/common/fixtures.rs
//! Byte sources and panic capture helpers.

use std::{
    io::{self, Cursor, Read},
    panic::{self, AssertUnwindSafe},
};

use uncheck_io::UncheckedIoError;

pub const CAUSE_MESSAGE: &str = "CauseMessage";
pub const CUSTOM_MESSAGE: &str = "Custom message";
pub const BYTES: &[u8] = b"ab";

pub fn new_source() -> Cursor<&'static [u8]> {
    Cursor::new(BYTES)
}

pub fn read_byte(reader: &mut impl Read) -> io::Result<u8> {
    let mut byte = [0u8; 1];
    reader.read_exact(&mut byte)?;
    Ok(byte[0])
}

/// Skips up to `n` bytes, returning how many were skipped.
pub fn skip(reader: &mut impl Read, n: u64) -> io::Result<u64> {
    io::copy(&mut reader.take(n), &mut io::sink())
}

/// Runs `f`, which must raise an [`UncheckedIoError`], and returns the payload.
pub fn catch_unchecked<R>(f: impl FnOnce() -> R) -> UncheckedIoError {
    let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("operation completed without raising"),
        Err(payload) => payload,
    };
    match payload.downcast::<UncheckedIoError>() {
        Ok(err) => *err,
        Err(_) => panic!("panic payload is not an UncheckedIoError"),
    }
}

pub fn assert_unchecked(err: &UncheckedIoError, message: &str) {
    assert_eq!(err.message(), message);
    assert_eq!(err.kind(), io::ErrorKind::Other);
    assert_eq!(err.io_error().to_string(), CAUSE_MESSAGE);
}
