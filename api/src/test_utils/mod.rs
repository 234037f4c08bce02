//! Test utilities
//!
//! Fixture factories for building directories in known states. The
//! production store is already in-memory, so tests use the real adapter
//! rather than mocks.

pub mod fixtures;

pub use fixtures::*;
