//! Free-function adapters over fallible I/O closures.
//!
//! Each function invokes its closure exactly once with the given arguments. On `Ok` the value
//! is returned unchanged; on `Err` the [`io::Error`] is wrapped in an
//! [`UncheckedIoError`](crate::UncheckedIoError) and raised as a panic payload. Panics from the closure itself pass through untouched.
//!
//! ```
//! use std::io::{Cursor, Read};
//!
//! let mut source = Cursor::new(b"ab".to_vec());
//! let mut byte = [0u8; 1];
//! let n = uncheck_io::uncheck::get(|| source.read(&mut byte));
//! assert_eq!((n, byte[0]), (1, b'a'));
//! ```

use std::cmp::Ordering;
use std::io;

use uncheck_io_shared_kernel::{Result, UncheckExt};

/// Runs an action that produces no value.
#[track_caller]
pub fn run<F>(action: F)
where
    F: FnOnce() -> io::Result<()>,
{
    action().uncheck();
}

/// Like [`run`], with `message` used for the raised error.
#[track_caller]
pub fn run_with<F, S, M>(action: F, message: S)
where
    F: FnOnce() -> io::Result<()>,
    S: FnOnce() -> M,
    M: Into<String>,
{
    action().uncheck_with(message);
}

#[track_caller]
pub fn get<T, F>(supplier: F) -> T
where
    F: FnOnce() -> io::Result<T>,
{
    supplier().uncheck()
}

/// Like [`get`], with `message` used for the raised error. `message` is not called on success.
#[track_caller]
pub fn get_with<T, F, S, M>(supplier: F, message: S) -> T
where
    F: FnOnce() -> io::Result<T>,
    S: FnOnce() -> M,
    M: Into<String>,
{
    supplier().uncheck_with(message)
}

/// Non-panicking form of [`get`].
pub fn try_get<T, F>(supplier: F) -> Result<T>
where
    F: FnOnce() -> io::Result<T>,
{
    supplier().wrap()
}

/// Non-panicking form of [`get_with`].
pub fn try_get_with<T, F, S, M>(supplier: F, message: S) -> Result<T>
where
    F: FnOnce() -> io::Result<T>,
    S: FnOnce() -> M,
    M: Into<String>,
{
    supplier().wrap_with(message)
}

#[track_caller]
pub fn accept<A, F>(consumer: F, a: A)
where
    F: FnOnce(A) -> io::Result<()>,
{
    consumer(a).uncheck();
}

#[track_caller]
pub fn accept2<A, B, F>(consumer: F, a: A, b: B)
where
    F: FnOnce(A, B) -> io::Result<()>,
{
    consumer(a, b).uncheck();
}

#[track_caller]
pub fn accept3<A, B, C, F>(consumer: F, a: A, b: B, c: C)
where
    F: FnOnce(A, B, C) -> io::Result<()>,
{
    consumer(a, b, c).uncheck();
}

#[track_caller]
pub fn apply<A, R, F>(function: F, a: A) -> R
where
    F: FnOnce(A) -> io::Result<R>,
{
    function(a).uncheck()
}

#[track_caller]
pub fn apply2<A, B, R, F>(function: F, a: A, b: B) -> R
where
    F: FnOnce(A, B) -> io::Result<R>,
{
    function(a, b).uncheck()
}

#[track_caller]
pub fn apply3<A, B, C, R, F>(function: F, a: A, b: B, c: C) -> R
where
    F: FnOnce(A, B, C) -> io::Result<R>,
{
    function(a, b, c).uncheck()
}

#[track_caller]
pub fn apply4<A, B, C, D, R, F>(function: F, a: A, b: B, c: C, d: D) -> R
where
    F: FnOnce(A, B, C, D) -> io::Result<R>,
{
    function(a, b, c, d).uncheck()
}

/// Evaluates a fallible predicate.
#[track_caller]
pub fn test<A, F>(predicate: F, a: A) -> bool
where
    F: FnOnce(A) -> io::Result<bool>,
{
    predicate(a).uncheck()
}

/// Evaluates a fallible comparator, e.g. one that orders paths by file size.
#[track_caller]
pub fn compare<A, F>(comparator: F, a: A, b: A) -> Ordering
where
    F: FnOnce(A, A) -> io::Result<Ordering>,
{
    comparator(a, b).uncheck()
}
