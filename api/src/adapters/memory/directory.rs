//! In-memory activity directory
//!
//! A `RwLock` around the whole map. Mutations hold the write lock for the
//! entire check-then-mutate sequence, so concurrent signups and unregisters
//! against the same activity cannot race each other.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::Activity;
use crate::domain::ports::ActivityDirectory;
use crate::error::DomainError;

pub struct InMemoryActivityDirectory {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl InMemoryActivityDirectory {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, Activity>>, DomainError> {
        self.activities
            .read()
            .map_err(|_| DomainError::Internal("activity directory lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Activity>>, DomainError> {
        self.activities
            .write()
            .map_err(|_| DomainError::Internal("activity directory lock poisoned".to_string()))
    }
}

#[async_trait]
impl ActivityDirectory for InMemoryActivityDirectory {
    async fn snapshot(&self) -> Result<BTreeMap<String, Activity>, DomainError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, DomainError> {
        Ok(self.read()?.get(name).cloned())
    }

    async fn signup(&self, activity_name: &str, email: &str) -> Result<(), DomainError> {
        let mut activities = self.write()?;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DomainError::ActivityNotFound)?;
        activity.signup(email)
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), DomainError> {
        let mut activities = self.write()?;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DomainError::ActivityNotFound)?;
        activity.unregister(email)
    }
}
