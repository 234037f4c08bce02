//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::adapters::InMemoryActivityDirectory;
use crate::app::RosterService;
use crate::domain::entities::Activity;
use crate::AppState;

/// Chess Club with an empty roster
pub fn chess_club() -> Activity {
    Activity::new(
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
    )
}

/// Directory holding a single activity
pub fn directory_with(name: &str, activity: Activity) -> InMemoryActivityDirectory {
    let mut activities = BTreeMap::new();
    activities.insert(name.to_string(), activity);
    InMemoryActivityDirectory::new(activities)
}

/// App state backed by the given directory
pub fn state_with(directory: InMemoryActivityDirectory) -> AppState {
    AppState {
        roster_service: Arc::new(RosterService::new(Arc::new(directory))),
    }
}
