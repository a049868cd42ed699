// tests/common/mod.rs
//! Shared test utilities.

pub mod fixtures;
pub mod mocks;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mocks::*;
