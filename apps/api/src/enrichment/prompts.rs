// LLM prompt constants for the Profile Enrichment module.

pub const ENRICHMENT_PERSONA: &str =
    "You are a careful assistant that drafts alumni directory profiles from public professional profiles.";

/// Enrichment prompt template. Replace `{linkedin_url}` before sending.
pub const ENRICHMENT_PROMPT_TEMPLATE: &str = r#"Draft an alumni directory profile for the person at this LinkedIn URL:
{linkedin_url}

Return a JSON object with this EXACT schema:
{
  "name": "Full name, or null if unknown",
  "currentRole": "Current job title and employer, or null if unknown",
  "skills": ["Skill one", "Skill two"],
  "shortBio": "One or two sentences in the third person, or null if unknown"
}

RULES:
1. Only state what can reasonably be inferred from the profile. Use null for anything you cannot determine.
2. `skills` is a list of at most 8 concise skill names. Use an empty list if none can be determined.
3. Do NOT fabricate employers, titles, or accomplishments."#;
