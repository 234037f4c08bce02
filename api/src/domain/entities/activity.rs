//! Activity domain entity
//!
//! An extracurricular activity with a roster of signed-up students.
//! Activities are keyed by name in the directory, so the name is not a
//! field of the record itself.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// An extracurricular activity offered by the school
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Student emails. Each email appears at most once; insertion order is
    /// preserved in responses but carries no meaning.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Pre-populate the roster (used by the startup seed)
    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Check whether a student is already on the roster
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Add a student to the roster
    ///
    /// Capacity is intentionally not enforced; `max_participants` is
    /// informational only.
    pub fn signup(&mut self, email: &str) -> Result<(), DomainError> {
        if self.is_registered(email) {
            return Err(DomainError::AlreadySignedUp);
        }
        self.participants.push(email.to_string());
        Ok(())
    }

    /// Remove a student from the roster
    pub fn unregister(&mut self, email: &str) -> Result<(), DomainError> {
        if !self.is_registered(email) {
            return Err(DomainError::NotSignedUp);
        }
        self.participants.retain(|p| p != email);
        Ok(())
    }
}
