//! Axum route handlers for the Event Board API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::event::Event;
use crate::response::ActionResponse;
use crate::state::AppState;

/// GET /api/v1/events
pub async fn handle_list_events(State(state): State<AppState>) -> Json<ActionResponse<Vec<Event>>> {
    Json(ActionResponse::success("Events loaded.", state.events.list().await))
}

/// POST /api/v1/events/:id/rsvp
pub async fn handle_rsvp(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse<Event>>, AppError> {
    let event = state
        .events
        .rsvp(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Event {id} not found")))?;
    Ok(Json(ActionResponse::success("RSVP recorded.", event)))
}
