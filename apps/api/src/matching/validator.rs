//! Match Request Validator: turns the raw matching form into a `MatchQuery`.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{info, warn};

use crate::directory::seed::default_alumni;
use crate::directory::AlumniRepository;
use crate::matching::{MatchError, MatchQuery, PoolSource};
use crate::models::alumni::{placeholder_avatar, AlumniRecord};

/// Minimum length of the student description, counted after trimming.
pub const MIN_QUERY_CHARS: usize = 10;

/// The two free-text fields of the mentor matching form.
#[derive(Debug, Default, Deserialize)]
pub struct MatchForm {
    #[serde(rename = "skillsAndInterests")]
    pub skills_and_interests: Option<String>,
    /// Serialized candidate pool (JSON array of alumni).
    #[serde(rename = "allAlumni")]
    pub all_alumni: Option<String>,
}

/// Validates the form and resolves its candidate pool.
///
/// - no `allAlumni` → pool read from `directory`
/// - `allAlumni` unreadable or empty → bundled default alumni, logged and
///   flagged as `PoolSource::BundledFallback`
pub async fn validate_match_request(
    form: MatchForm,
    directory: &dyn AlumniRepository,
) -> Result<MatchQuery, MatchError> {
    let skills_and_interests = validate_skills_and_interests(form.skills_and_interests.as_deref())?;

    let (pool, pool_source) = match form.all_alumni.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_candidate_pool(raw),
        _ => (directory.list().await?, PoolSource::Directory),
    };

    let candidate_pool = prepare_pool(pool)?;

    info!(
        pool_size = candidate_pool.len(),
        ?pool_source,
        "Match request validated"
    );

    Ok(MatchQuery {
        skills_and_interests,
        candidate_pool,
        pool_source,
    })
}

fn validate_skills_and_interests(raw: Option<&str>) -> Result<String, MatchError> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.chars().count() < MIN_QUERY_CHARS {
        return Err(MatchError::Validation {
            field: "skillsAndInterests",
            message: "Please describe your skills and interests.".to_string(),
        });
    }
    Ok(text.to_string())
}

/// Parses a submitted pool, falling back to the bundled defaults when it is
/// malformed or empty.
pub fn parse_candidate_pool(raw: &str) -> (Vec<AlumniRecord>, PoolSource) {
    match serde_json::from_str::<Vec<AlumniRecord>>(raw) {
        Ok(pool) if !pool.is_empty() => (pool, PoolSource::Submitted),
        Ok(_) => {
            warn!("Submitted alumni list is empty; using bundled default alumni");
            (default_alumni(), PoolSource::BundledFallback)
        }
        Err(e) => {
            warn!("Submitted alumni list could not be parsed ({e}); using bundled default alumni");
            (default_alumni(), PoolSource::BundledFallback)
        }
    }
}

/// Fills missing ids and avatars deterministically, strips stale scores, and
/// enforces a non-empty pool with unique ids.
fn prepare_pool(pool: Vec<AlumniRecord>) -> Result<Vec<AlumniRecord>, MatchError> {
    if pool.is_empty() {
        return Err(MatchError::Validation {
            field: "allAlumni",
            message: "No alumni are available to match against.".to_string(),
        });
    }

    let mut seen = HashSet::new();
    pool.into_iter()
        .enumerate()
        .map(|(index, mut record)| {
            if record.id.trim().is_empty() {
                record.id = format!("alumni-{index}");
            }
            if record.avatar_url.trim().is_empty() {
                record.avatar_url = placeholder_avatar(&record.id);
            }
            record.match_score = None;

            if !seen.insert(record.id.clone()) {
                return Err(MatchError::Validation {
                    field: "allAlumni",
                    message: format!("Duplicate alumni id '{}'.", record.id),
                });
            }
            Ok(record)
        })
        .collect()
}
