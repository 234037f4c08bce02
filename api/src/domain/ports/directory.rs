//! Activity directory port trait
//!
//! Defines the interface to the activity store. The directory's membership
//! is fixed for the life of the process; only rosters mutate.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::entities::Activity;
use crate::error::DomainError;

/// Store holding every activity, keyed by name
#[async_trait]
pub trait ActivityDirectory: Send + Sync {
    /// Read-only snapshot of the full directory
    async fn snapshot(&self) -> Result<BTreeMap<String, Activity>, DomainError>;

    /// Look up a single activity by exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, DomainError>;

    /// Add a student to an activity's roster
    ///
    /// Fails with `ActivityNotFound` for an unknown name and
    /// `AlreadySignedUp` for a duplicate email. The check-then-mutate
    /// sequence must be atomic with respect to concurrent calls.
    async fn signup(&self, activity_name: &str, email: &str) -> Result<(), DomainError>;

    /// Remove a student from an activity's roster
    ///
    /// Fails with `ActivityNotFound` for an unknown name and `NotSignedUp`
    /// if the email is not on the roster. Same atomicity requirement as
    /// `signup`.
    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), DomainError>;
}
