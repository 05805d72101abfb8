//! Axum route handler for the Profile Enrichment API.

use axum::{extract::State, Form, Json};
use serde::{Deserialize, Serialize};

use crate::enrichment::{enrich_profile, validate_linkedin_url, EnrichedProfile};
use crate::errors::AppError;
use crate::models::alumni::AlumniRecord;
use crate::response::ActionResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnrichForm {
    #[serde(rename = "linkedinUrl")]
    pub linkedin_url: Option<String>,
    /// When set, the enriched fields are saved to this alumnus.
    #[serde(rename = "alumniId")]
    pub alumni_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnrichmentOutcome {
    pub profile: EnrichedProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alumnus: Option<AlumniRecord>,
}

/// POST /api/v1/profile/enrich
pub async fn handle_enrich_profile(
    State(state): State<AppState>,
    Form(form): Form<EnrichForm>,
) -> Result<Json<ActionResponse<EnrichmentOutcome>>, AppError> {
    let url = validate_linkedin_url(form.linkedin_url.as_deref())?;

    // Resolve the target before spending an LLM call on it.
    let target = match form.alumni_id.as_deref().filter(|id| !id.trim().is_empty()) {
        Some(id) => Some(
            state
                .directory
                .get(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Alumnus {id} not found")))?,
        ),
        None => None,
    };

    let profile = enrich_profile(&url, &state.llm).await?;

    let alumnus = match target {
        Some(existing) => {
            let updated = profile.clone().into_update(&url).apply(existing);
            state.directory.update(updated.clone()).await?;
            Some(updated)
        }
        None => None,
    };

    Ok(Json(ActionResponse::success(
        "Profile enriched successfully.",
        EnrichmentOutcome { profile, alumnus },
    )))
}
