#![allow(dead_code)]
// tests/common/mocks.rs
//! Readers that fail on demand.

use std::io::{self, Read};

/// A reader whose every `read` fails with the configured error.
pub struct BrokenReader {
    kind: io::ErrorKind,
    message: &'static str,
}

impl BrokenReader {
    pub fn new(kind: io::ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    pub fn other(message: &'static str) -> Self {
        Self::new(io::ErrorKind::Other, message)
    }
}

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(self.kind, self.message))
    }
}
