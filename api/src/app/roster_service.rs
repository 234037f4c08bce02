//! Roster service
//!
//! Orchestrates signup and unregister operations against the activity
//! directory and produces the confirmation messages returned to callers.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::Activity;
use crate::domain::ports::ActivityDirectory;
use crate::error::AppError;

/// Service for listing activities and managing rosters
pub struct RosterService<D>
where
    D: ActivityDirectory,
{
    directory: Arc<D>,
}

impl<D> RosterService<D>
where
    D: ActivityDirectory,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// List every activity keyed by name
    pub async fn list_activities(&self) -> Result<BTreeMap<String, Activity>, AppError> {
        Ok(self.directory.snapshot().await?)
    }

    /// Enroll a student in an activity
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<String, AppError> {
        validate_activity_name(activity_name)?;

        self.directory.signup(activity_name, email).await?;
        tracing::info!("Signed up {} for {}", email, activity_name);

        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Remove a student from an activity
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<String, AppError> {
        validate_activity_name(activity_name)?;

        self.directory.unregister(activity_name, email).await?;
        tracing::info!("Unregistered {} from {}", email, activity_name);

        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}

fn validate_activity_name(activity_name: &str) -> Result<(), AppError> {
    if activity_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Activity name must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::test_utils::{chess_club, directory_with};

    fn service_with(
        name: &str,
        activity: Activity,
    ) -> RosterService<crate::adapters::InMemoryActivityDirectory> {
        RosterService::new(Arc::new(directory_with(name, activity)))
    }

    #[tokio::test]
    async fn list_activities_returns_directory() {
        let service = service_with("Chess Club", chess_club());

        let activities = service.list_activities().await.unwrap();
        assert_eq!(activities.len(), 1);
        assert!(activities.contains_key("Chess Club"));
    }

    #[tokio::test]
    async fn signup_returns_confirmation_message() {
        let service = service_with("Chess Club", chess_club());

        let message = service
            .signup("Chess Club", "test@mergington.edu")
            .await
            .unwrap();
        assert_eq!(message, "Signed up test@mergington.edu for Chess Club");

        let activities = service.list_activities().await.unwrap();
        assert!(activities["Chess Club"].is_registered("test@mergington.edu"));
    }

    #[tokio::test]
    async fn signup_twice_fails() {
        let service = service_with("Chess Club", chess_club());
        service
            .signup("Chess Club", "test@mergington.edu")
            .await
            .unwrap();

        let err = service
            .signup("Chess Club", "test@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::AlreadySignedUp)
        ));
    }

    #[tokio::test]
    async fn signup_unknown_activity_fails() {
        let service = service_with("Chess Club", chess_club());

        let err = service
            .signup("Knitting Circle", "test@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::ActivityNotFound)
        ));
    }

    #[tokio::test]
    async fn unregister_returns_confirmation_message() {
        let service = service_with(
            "Chess Club",
            chess_club().with_participants(&["test@mergington.edu"]),
        );

        let message = service
            .unregister("Chess Club", "test@mergington.edu")
            .await
            .unwrap();
        assert_eq!(message, "Unregistered test@mergington.edu from Chess Club");

        let activities = service.list_activities().await.unwrap();
        assert!(activities["Chess Club"].participants.is_empty());
    }

    #[tokio::test]
    async fn unregister_without_signup_fails() {
        let service = service_with("Chess Club", chess_club());

        let err = service
            .unregister("Chess Club", "test@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::NotSignedUp)));
    }

    #[tokio::test]
    async fn blank_activity_name_is_rejected() {
        let service = service_with("Chess Club", chess_club());

        let err = service.signup("  ", "test@mergington.edu").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = service.unregister("", "test@mergington.edu").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
