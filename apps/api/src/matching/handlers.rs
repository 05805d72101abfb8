//! Axum route handler for the Mentor Matching API.

use axum::{extract::State, Form, Json};

use crate::errors::AppError;
use crate::matching::find_mentors;
use crate::matching::validator::{validate_match_request, MatchForm};
use crate::models::alumni::AlumniRecord;
use crate::response::ActionResponse;
use crate::state::AppState;

/// POST /api/v1/mentors/match
///
/// Form fields: `skillsAndInterests`, optional `allAlumni` (JSON array).
/// Returns up to five mentors, best first. `notice` is set when the submitted
/// alumni list was unusable and the bundled defaults were matched instead.
pub async fn handle_match_mentors(
    State(state): State<AppState>,
    Form(form): Form<MatchForm>,
) -> Result<Json<ActionResponse<Vec<AlumniRecord>>>, AppError> {
    let query = validate_match_request(form, state.directory.as_ref()).await?;
    let result = find_mentors(&query, state.oracle.as_ref(), state.match_cache.as_deref()).await?;

    let notice = result.notice();
    Ok(Json(
        ActionResponse::success("Mentors found successfully.", result.mentors).with_notice(notice),
    ))
}
