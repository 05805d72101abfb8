//! Result Normalizer: reconciles the oracle's ranked list with the pool.
//!
//! Per entry, in oracle order:
//! - identity: exact (case-sensitive) `name` + `email` match against the pool
//!   reuses the member's `id` and `avatarUrl`; otherwise the entry gets
//!   `mentor-<index>` and a matching placeholder avatar, `<index>` being its
//!   0-based position in the oracle's list
//! - `skills`: list or comma-delimited string → ordered list
//! - `graduationYear` / `matchScore`: coerced to integers
//!
//! Entries that fail coercion are dropped without affecting the rest. The
//! result is capped at `MAX_MATCHES` after dropping.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::coerce::{coerce_integer, coerce_score, CoercionError, SkillsField};
use crate::matching::MAX_MATCHES;
use crate::models::alumni::{placeholder_avatar, AlumniRecord};

/// One oracle selection before coercion. Every field is optional because the
/// oracle is not trusted to follow the schema.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMentor {
    name: Option<String>,
    email: Option<String>,
    graduation_year: Option<Value>,
    current_role: Option<String>,
    skills: Option<SkillsField>,
    #[serde(rename = "linkedinURL", alias = "linkedinUrl")]
    linkedin_url: Option<String>,
    short_bio: Option<String>,
    match_score: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
enum DropReason {
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error("entry is not a mentor object: {0}")]
    Malformed(String),

    #[error("duplicate selection of '{0}'")]
    Duplicate(String),
}

/// Produces display-ready mentors from the oracle's raw ranked list.
pub fn normalize(ranked: Vec<Value>, pool: &[AlumniRecord]) -> Vec<AlumniRecord> {
    let mut seen_ids = HashSet::new();
    let mut mentors = Vec::with_capacity(MAX_MATCHES);

    for (index, entry) in ranked.into_iter().enumerate() {
        if mentors.len() == MAX_MATCHES {
            break;
        }
        match normalize_entry(index, entry, pool) {
            Ok(mentor) if !seen_ids.insert(mentor.id.clone()) => {
                debug!(index, "Dropping ranked entry: {}", DropReason::Duplicate(mentor.id));
            }
            Ok(mentor) => mentors.push(mentor),
            Err(reason) => debug!(index, "Dropping ranked entry: {reason}"),
        }
    }

    mentors
}

fn normalize_entry(
    index: usize,
    entry: Value,
    pool: &[AlumniRecord],
) -> Result<AlumniRecord, DropReason> {
    let raw: RawMentor =
        serde_json::from_value(entry).map_err(|e| DropReason::Malformed(e.to_string()))?;

    let name = raw
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or(CoercionError::Missing("name"))?;
    let email = raw.email.unwrap_or_default();

    let canonical = pool.iter().find(|a| a.name == name && a.email == email);

    let match_score = coerce_score("matchScore", raw.match_score.as_ref())?;

    let graduation_year = match coerce_integer("graduationYear", raw.graduation_year.as_ref()) {
        Ok(year) => i32::try_from(year).map_err(|_| CoercionError::NotAnInteger {
            field: "graduationYear",
            value: year.to_string(),
        })?,
        Err(CoercionError::Missing(_)) if canonical.is_some() => {
            canonical.map(|a| a.graduation_year).unwrap_or_default()
        }
        Err(e) => return Err(e.into()),
    };

    let skills = match (raw.skills, canonical) {
        (Some(skills), _) => skills.into_list(),
        (None, Some(a)) => a.skills.clone(),
        (None, None) => Vec::new(),
    };

    let (id, avatar_url) = match canonical {
        Some(a) => (a.id.clone(), a.avatar_url.clone()),
        None => {
            let id = format!("mentor-{index}");
            let avatar = placeholder_avatar(&id);
            (id, avatar)
        }
    };

    Ok(AlumniRecord {
        id,
        current_role: backfill(raw.current_role, canonical.map(|a| a.current_role.as_str())),
        linkedin_url: backfill(raw.linkedin_url, canonical.map(|a| a.linkedin_url.as_str())),
        short_bio: backfill(raw.short_bio, canonical.map(|a| a.short_bio.as_str())),
        name,
        email,
        graduation_year,
        skills,
        avatar_url,
        match_score: Some(match_score),
    })
}

/// Oracle value when non-blank, else the pool member's value.
fn backfill(value: Option<String>, fallback: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| fallback.map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed::default_alumni;
    use serde_json::json;

    fn selection(a: &AlumniRecord, score: u8) -> Value {
        json!({
            "name": a.name,
            "email": a.email,
            "graduationYear": a.graduation_year,
            "currentRole": a.current_role,
            "skills": a.skills,
            "linkedinURL": a.linkedin_url,
            "shortBio": a.short_bio,
            "matchScore": score,
        })
    }

    #[test]
    fn test_never_more_than_five() {
        let pool = default_alumni();
        let ranked: Vec<Value> = pool.iter().map(|a| selection(a, 50)).collect();
        assert_eq!(ranked.len(), 10);

        let mentors = normalize(ranked, &pool);
        assert_eq!(mentors.len(), MAX_MATCHES);
        let ids: Vec<&str> = mentors.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_identity_resolves_to_pool_member() {
        let pool = default_alumni();
        let ranked = vec![selection(&pool[7], 91), selection(&pool[2], 64)];

        let mentors = normalize(ranked, &pool);
        assert_eq!(mentors[0].id, pool[7].id);
        assert_eq!(mentors[0].avatar_url, pool[7].avatar_url);
        assert_eq!(mentors[0].match_score, Some(91));
        assert_eq!(mentors[1].id, pool[2].id);
        assert_eq!(mentors[1].avatar_url, pool[2].avatar_url);
    }

    #[test]
    fn test_identity_match_is_case_sensitive() {
        let pool = default_alumni();
        let mut entry = selection(&pool[0], 80);
        entry["email"] = json!(pool[0].email.to_uppercase());

        let mentors = normalize(vec![entry], &pool);
        assert_eq!(mentors[0].id, "mentor-0");
        assert_eq!(mentors[0].avatar_url, placeholder_avatar("mentor-0"));
    }

    #[test]
    fn test_oracle_supplied_id_is_ignored() {
        let pool = default_alumni();
        let mut entry = selection(&pool[1], 70);
        entry["id"] = json!("invented-42");
        entry["avatarUrl"] = json!("https://evil.example.com/x.png");

        let mentors = normalize(vec![entry], &pool);
        assert_eq!(mentors[0].id, pool[1].id);
        assert_eq!(mentors[0].avatar_url, pool[1].avatar_url);
    }

    #[test]
    fn test_unknown_mentor_gets_positional_placeholder() {
        let pool = default_alumni();
        let ranked = vec![
            selection(&pool[0], 90),
            json!({
                "name": "Invented Person",
                "email": "nobody@example.com",
                "graduationYear": 2001,
                "currentRole": "Wizard",
                "skills": ["Magic"],
                "matchScore": 40
            }),
        ];

        let mentors = normalize(ranked, &pool);
        assert_eq!(mentors[1].id, "mentor-1");
        assert_eq!(
            mentors[1].avatar_url,
            "https://picsum.photos/seed/mentor-1/200/200"
        );
    }

    #[test]
    fn test_delimited_skills_become_list() {
        let pool = default_alumni();
        let mut entry = selection(&pool[5], 77);
        entry["skills"] = json!("Go, Rust, SQL");

        let mentors = normalize(vec![entry], &pool);
        assert_eq!(mentors[0].skills, vec!["Go", "Rust", "SQL"]);
    }

    #[test]
    fn test_unparseable_year_drops_only_that_entry() {
        let pool = default_alumni();
        let mut bad = selection(&pool[1], 88);
        bad["graduationYear"] = json!("unknown");
        let ranked = vec![selection(&pool[0], 95), bad, selection(&pool[2], 60)];

        let mentors = normalize(ranked, &pool);
        let ids: Vec<&str> = mentors.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(mentors[1].match_score, Some(60));
    }

    #[test]
    fn test_string_year_is_coerced() {
        let pool = default_alumni();
        let mut entry = selection(&pool[3], 55);
        entry["graduationYear"] = json!("2010");

        let mentors = normalize(vec![entry], &pool);
        assert_eq!(mentors[0].graduation_year, 2010);
    }

    #[test]
    fn test_missing_year_backfills_from_pool() {
        let pool = default_alumni();
        let mut entry = selection(&pool[4], 55);
        entry.as_object_mut().unwrap().remove("graduationYear");

        let mentors = normalize(vec![entry], &pool);
        assert_eq!(mentors[0].graduation_year, pool[4].graduation_year);
    }

    #[test]
    fn test_missing_year_for_unknown_mentor_is_dropped() {
        let entry = json!({"name": "Stranger", "email": "s@example.com", "matchScore": 50});
        assert!(normalize(vec![entry], &default_alumni()).is_empty());
    }

    #[test]
    fn test_missing_score_is_dropped() {
        let pool = default_alumni();
        let mut entry = selection(&pool[0], 10);
        entry["matchScore"] = Value::Null;
        assert!(normalize(vec![entry], &pool).is_empty());
    }

    #[test]
    fn test_non_object_entries_are_dropped() {
        let pool = default_alumni();
        let ranked = vec![json!("Aisha Khan"), selection(&pool[0], 80)];
        let mentors = normalize(ranked, &pool);
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].id, "1");
    }

    #[test]
    fn test_duplicate_selection_is_dropped() {
        let pool = default_alumni();
        let ranked = vec![selection(&pool[0], 80), selection(&pool[0], 70)];
        let mentors = normalize(ranked, &pool);
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].match_score, Some(80));
    }

    #[test]
    fn test_dropped_entries_do_not_count_toward_cap() {
        let pool = default_alumni();
        let mut ranked = vec![json!({"name": ""})];
        ranked.extend(pool.iter().take(6).map(|a| selection(a, 50)));

        let mentors = normalize(ranked, &pool);
        assert_eq!(mentors.len(), MAX_MATCHES);
        assert_eq!(mentors[0].id, "1");
    }

    #[test]
    fn test_omitted_bio_backfills_from_pool() {
        let pool = default_alumni();
        let mut entry = selection(&pool[6], 66);
        entry["shortBio"] = json!("");
        entry.as_object_mut().unwrap().remove("linkedinURL");

        let mentors = normalize(vec![entry], &pool);
        assert_eq!(mentors[0].short_bio, pool[6].short_bio);
        assert_eq!(mentors[0].linkedin_url, pool[6].linkedin_url);
    }
}
