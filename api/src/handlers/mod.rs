//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod activities;

pub use activities::{list_activities, signup, unregister};
