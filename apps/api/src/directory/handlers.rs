//! Axum route handlers for the Alumni Directory API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::directory::{sign_up, ProfileUpdate};
use crate::errors::AppError;
use crate::models::alumni::AlumniRecord;
use crate::response::ActionResponse;
use crate::state::AppState;

/// GET /api/v1/alumni
pub async fn handle_list_alumni(
    State(state): State<AppState>,
) -> Result<Json<ActionResponse<Vec<AlumniRecord>>>, AppError> {
    let alumni = state.directory.list().await?;
    Ok(Json(ActionResponse::success("Alumni loaded.", alumni)))
}

/// GET /api/v1/alumni/:id
pub async fn handle_get_alumnus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse<AlumniRecord>>, AppError> {
    let alumnus = state
        .directory
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Alumnus {id} not found")))?;
    Ok(Json(ActionResponse::success("Alumnus loaded.", alumnus)))
}

/// POST /api/v1/alumni/signup
///
/// Creates a placeholder profile at the top of the directory. The caller
/// keeps the returned id as its session identity.
pub async fn handle_sign_up(
    State(state): State<AppState>,
) -> Result<Json<ActionResponse<AlumniRecord>>, AppError> {
    let alumnus = sign_up(state.directory.as_ref()).await?;
    Ok(Json(ActionResponse::success("Welcome aboard.", alumnus)))
}

/// PUT /api/v1/alumni/:id
pub async fn handle_update_alumnus(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<ActionResponse<AlumniRecord>>, AppError> {
    if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::validation("name", "Name cannot be empty."));
    }

    let existing = state
        .directory
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Alumnus {id} not found")))?;

    let updated = update.apply(existing);
    if !state.directory.update(updated.clone()).await? {
        return Err(AppError::NotFound(format!("Alumnus {id} not found")));
    }

    Ok(Json(ActionResponse::success("Profile updated.", updated)))
}
