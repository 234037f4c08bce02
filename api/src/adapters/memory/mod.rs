//! In-memory adapter
//!
//! The directory is process-local state: created at startup from the seed
//! set, gone when the process exits.

pub mod directory;
pub mod seed;

pub use directory::InMemoryActivityDirectory;
pub use seed::seed_activities;
