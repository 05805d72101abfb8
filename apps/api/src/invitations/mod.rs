//! Event Invitation: drafts an alumni invitation from free-text event details.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::prompts::json_system;
use crate::llm_client::LlmClient;

pub mod handlers;
pub mod prompts;

use prompts::{INVITATION_PERSONA, INVITATION_PROMPT_TEMPLATE};

pub const MIN_EVENT_DETAILS_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInvitation {
    pub subject: String,
    pub invitation: String,
}

pub fn validate_event_details(raw: Option<&str>) -> Result<String, AppError> {
    let details = raw.map(str::trim).unwrap_or_default();
    if details.chars().count() < MIN_EVENT_DETAILS_CHARS {
        return Err(AppError::validation(
            "eventDetails",
            "Please provide some event details.",
        ));
    }
    Ok(details.to_string())
}

pub fn build_invitation_prompt(event_details: &str) -> String {
    INVITATION_PROMPT_TEMPLATE.replace("{event_details}", event_details)
}

/// Generates an invitation via the LLM. Single attempt.
pub async fn generate_invitation(
    event_details: &str,
    llm: &LlmClient,
) -> Result<EventInvitation, AppError> {
    let prompt = build_invitation_prompt(event_details);
    let invitation: EventInvitation = llm
        .call_json(&prompt, &json_system(INVITATION_PERSONA))
        .await
        .map_err(|e| AppError::Llm(format!("Invitation generation failed: {e}")))?;

    check_invitation(invitation)
}

fn check_invitation(invitation: EventInvitation) -> Result<EventInvitation, AppError> {
    if invitation.invitation.trim().is_empty() {
        return Err(AppError::Llm("Invitation generation returned an empty body".to_string()));
    }
    Ok(EventInvitation {
        subject: invitation.subject.trim().to_string(),
        invitation: invitation.invitation.trim().to_string(),
    })
}
