//! Axum route handler for the Event Invitation API.

use axum::{extract::State, Form, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::invitations::{generate_invitation, validate_event_details, EventInvitation};
use crate::response::ActionResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InvitationForm {
    #[serde(rename = "eventDetails")]
    pub event_details: Option<String>,
}

/// POST /api/v1/events/invitation
pub async fn handle_generate_invitation(
    State(state): State<AppState>,
    Form(form): Form<InvitationForm>,
) -> Result<Json<ActionResponse<EventInvitation>>, AppError> {
    let details = validate_event_details(form.event_details.as_deref())?;
    let invitation = generate_invitation(&details, &state.llm).await?;
    Ok(Json(ActionResponse::success(
        "Invitation generated successfully.",
        invitation,
    )))
}
