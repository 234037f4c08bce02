//! Activity handlers
//!
//! Endpoints for listing activities and managing sign-ups.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Activity;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for signup and unregister
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// Student email. Presence is required; format is not validated.
    pub email: String,
}

/// Confirmation message returned by roster mutations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /activities
///
/// Return the full directory as a JSON object keyed by activity name.
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Activity>>, AppError> {
    let activities = state.roster_service.list_activities().await?;
    Ok(Json(activities))
}

/// POST /activities/:name/signup?email=E
///
/// Enroll a student in an activity.
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.roster_service.signup(&name, &query.email).await?;
    Ok(Json(MessageResponse { message }))
}

/// DELETE /activities/:name/unregister?email=E
///
/// Remove a student from an activity.
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.roster_service.unregister(&name, &query.email).await?;
    Ok(Json(MessageResponse { message }))
}
