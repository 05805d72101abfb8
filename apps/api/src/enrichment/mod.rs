//! Profile Enrichment: drafts profile fields from a LinkedIn URL via the LLM.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::coerce::SkillsField;
use crate::directory::ProfileUpdate;
use crate::errors::AppError;
use crate::llm_client::prompts::json_system;
use crate::llm_client::LlmClient;

pub mod handlers;
pub mod prompts;

use prompts::{ENRICHMENT_PERSONA, ENRICHMENT_PROMPT_TEMPLATE};

const INVALID_URL_MESSAGE: &str = "Please enter a valid LinkedIn URL.";

/// Profile fields inferred by the model. Unknown fields are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProfile {
    pub name: Option<String>,
    pub current_role: Option<String>,
    pub skills: Vec<String>,
    pub short_bio: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnrichedProfile {
    name: Option<String>,
    current_role: Option<String>,
    skills: Option<SkillsField>,
    short_bio: Option<String>,
}

impl From<RawEnrichedProfile> for EnrichedProfile {
    fn from(raw: RawEnrichedProfile) -> Self {
        let non_blank = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        EnrichedProfile {
            name: non_blank(raw.name),
            current_role: non_blank(raw.current_role),
            skills: raw.skills.map(SkillsField::into_list).unwrap_or_default(),
            short_bio: non_blank(raw.short_bio),
        }
    }
}

impl EnrichedProfile {
    /// Profile edit that fills in every field the model could determine.
    pub fn into_update(self, linkedin_url: &Url) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name,
            current_role: self.current_role,
            skills: (!self.skills.is_empty()).then_some(SkillsField::List(self.skills)),
            short_bio: self.short_bio,
            linkedin_url: Some(linkedin_url.to_string()),
            ..ProfileUpdate::default()
        }
    }
}

/// Accepts absolute http(s) URLs only.
pub fn validate_linkedin_url(raw: Option<&str>) -> Result<Url, AppError> {
    let invalid = || AppError::validation("linkedinUrl", INVALID_URL_MESSAGE);

    let url = Url::parse(raw.map(str::trim).unwrap_or_default()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(url)
}

pub fn build_enrichment_prompt(linkedin_url: &Url) -> String {
    ENRICHMENT_PROMPT_TEMPLATE.replace("{linkedin_url}", linkedin_url.as_str())
}

/// Asks the LLM for profile fields. Single attempt.
pub async fn enrich_profile(linkedin_url: &Url, llm: &LlmClient) -> Result<EnrichedProfile, AppError> {
    let prompt = build_enrichment_prompt(linkedin_url);
    let raw: RawEnrichedProfile = llm
        .call_json(&prompt, &json_system(ENRICHMENT_PERSONA))
        .await
        .map_err(|e| AppError::Llm(format!("Profile enrichment failed: {e}")))?;
    Ok(raw.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::new_alumnus;
    use uuid::Uuid;

    #[test]
    fn test_valid_linkedin_url_is_accepted() {
        let url = validate_linkedin_url(Some(" https://www.linkedin.com/in/mei-lin ")).unwrap();
        assert_eq!(url.host_str(), Some("www.linkedin.com"));
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        for raw in [None, Some(""), Some("linkedin.com/in/x"), Some("ftp://example.com/x"), Some("mailto:a@b.c")] {
            let err = validate_linkedin_url(raw).unwrap_err();
            assert!(
                matches!(err, AppError::Validation { ref field, .. } if field == "linkedinUrl"),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_raw_profile_coerces_skills_and_blanks() {
        let raw: RawEnrichedProfile = serde_json::from_str(
            r#"{"name": "Mei Lin", "currentRole": "  ", "skills": "Python, PyTorch", "shortBio": null}"#,
        )
        .unwrap();
        let profile = EnrichedProfile::from(raw);
        assert_eq!(profile.name.as_deref(), Some("Mei Lin"));
        assert_eq!(profile.current_role, None);
        assert_eq!(profile.skills, vec!["Python", "PyTorch"]);
        assert_eq!(profile.short_bio, None);
    }

    #[test]
    fn test_update_keeps_unknown_fields() {
        let url = validate_linkedin_url(Some("https://www.linkedin.com/in/mei-lin")).unwrap();
        let profile = EnrichedProfile {
            name: None,
            current_role: Some("ML Engineer at Vectorworks".to_string()),
            skills: vec![],
            short_bio: None,
        };
        let record = profile
            .into_update(&url)
            .apply(new_alumnus(Uuid::new_v4(), 2020));

        assert_eq!(record.name, "New Alumnus");
        assert_eq!(record.current_role, "ML Engineer at Vectorworks");
        assert!(record.skills.is_empty());
        assert_eq!(record.linkedin_url, "https://www.linkedin.com/in/mei-lin");
    }

    #[test]
    fn test_prompt_embeds_url() {
        let url = validate_linkedin_url(Some("https://www.linkedin.com/in/mei-lin")).unwrap();
        assert!(build_enrichment_prompt(&url).contains("https://www.linkedin.com/in/mei-lin"));
    }
}
