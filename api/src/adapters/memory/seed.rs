//! Startup seed data
//!
//! The directory's membership is fixed for the life of the process; this is
//! the set it starts with. Rosters carry the students already signed up
//! before the service came online.

use std::collections::BTreeMap;

use crate::domain::entities::Activity;

/// Build the initial activity directory
pub fn seed_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();

    activities.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    activities.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    activities.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
    );
    activities.insert(
        "Soccer Team".to_string(),
        Activity::new(
            "Join the school soccer team and compete in inter-school matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(&["liam@mergington.edu", "noah@mergington.edu"]),
    );
    activities.insert(
        "Basketball Team".to_string(),
        Activity::new(
            "Practice and compete with the school basketball team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(&["ava@mergington.edu", "mia@mergington.edu"]),
    );
    activities.insert(
        "Art Club".to_string(),
        Activity::new(
            "Explore painting, drawing and other visual arts",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(&["amelia@mergington.edu", "harper@mergington.edu"]),
    );
    activities.insert(
        "Drama Club".to_string(),
        Activity::new(
            "Act, direct and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
        )
        .with_participants(&["ella@mergington.edu", "scarlett@mergington.edu"]),
    );
    activities.insert(
        "Math Club".to_string(),
        Activity::new(
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(&["james@mergington.edu", "benjamin@mergington.edu"]),
    );
    activities.insert(
        "Debate Team".to_string(),
        Activity::new(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(&["charlotte@mergington.edu", "henry@mergington.edu"]),
    );

    activities
}
