//! Mentor Matching Invoker: the ranking oracle capability.
//!
//! `AppState` carries an `Arc<dyn RankingOracle>`, swapped at startup via
//! `RANKING_BACKEND`. Implementations return the oracle's raw ranked list;
//! coercion and identity resolution happen in `normalizer`.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::llm_client::prompts::{fill_template, json_system};
use crate::llm_client::LlmClient;
use crate::matching::prompts::{MENTOR_MATCH_PERSONA, MENTOR_MATCH_PROMPT_TEMPLATE};
use crate::matching::{MatchError, MAX_MATCHES};
use crate::models::alumni::AlumniRecord;

#[async_trait]
pub trait RankingOracle: Send + Sync {
    /// Ranks `pool` against `query`, best first. Entries are loosely typed.
    async fn rank(&self, query: &str, pool: &[AlumniRecord]) -> Result<Vec<Value>, MatchError>;

    /// Backend label, used in logs and cache keys.
    fn backend(&self) -> &'static str;
}

#[derive(Debug, Deserialize)]
struct OracleResponse {
    #[serde(rename = "mentorMatches", default)]
    mentor_matches: Vec<Value>,
}

/// Ranking via Claude. One attempt per request; failures surface as
/// `MatchError::MatchingService`.
pub struct LlmRankingOracle(pub LlmClient);

#[async_trait]
impl RankingOracle for LlmRankingOracle {
    async fn rank(&self, query: &str, pool: &[AlumniRecord]) -> Result<Vec<Value>, MatchError> {
        let prompt = build_ranking_prompt(query, pool)?;
        let system = json_system(MENTOR_MATCH_PERSONA);

        let response: OracleResponse = self
            .0
            .call_json(&prompt, &system)
            .await
            .map_err(|e| MatchError::MatchingService(format!("mentor ranking failed: {e}")))?;

        Ok(response.mentor_matches)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Fills the ranking template with the query and the full candidate pool.
pub fn build_ranking_prompt(query: &str, pool: &[AlumniRecord]) -> Result<String, MatchError> {
    let candidates: Vec<AlumniRecord> = pool.iter().map(AlumniRecord::without_score).collect();
    let alumni_json = serde_json::to_string_pretty(&candidates)
        .map_err(|e| MatchError::MatchingService(format!("failed to encode alumni: {e}")))?;

    let max_matches = MAX_MATCHES.to_string();
    Ok(fill_template(
        MENTOR_MATCH_PROMPT_TEMPLATE,
        &[
            ("max_matches", max_matches.as_str()),
            ("skills_and_interests", query),
            ("alumni_json", alumni_json.as_str()),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed::default_alumni;

    #[test]
    fn test_prompt_carries_full_pool_and_query() {
        let pool = default_alumni();
        let prompt = build_ranking_prompt("interested in cloud computing", &pool).unwrap();

        for alumnus in &pool {
            assert!(prompt.contains(&alumnus.email), "missing {}", alumnus.email);
        }
        assert!(prompt.contains("\"interested in cloud computing\""));
        assert!(prompt.contains("top 5 alumni"));
        assert!(prompt.contains("Do NOT invent"));
        assert!(!prompt.contains("{alumni_json}"));
    }

    #[test]
    fn test_placeholder_text_in_pool_or_query_is_left_alone() {
        let mut pool = default_alumni();
        pool[0].short_bio = "Ask me about {skills_and_interests} and {alumni_json}.".to_string();
        let query = "cloud computing, not {max_matches}";
        let prompt = build_ranking_prompt(query, &pool).unwrap();

        assert!(prompt.contains("Ask me about {skills_and_interests} and {alumni_json}."));
        assert!(prompt.contains("\"cloud computing, not {max_matches}\""));
        assert_eq!(prompt.matches(query).count(), 1);
    }

    #[test]
    fn test_prompt_strips_existing_scores() {
        let mut pool = default_alumni();
        pool[0].match_score = Some(99);
        let prompt = build_ranking_prompt("interested in cloud computing", &pool).unwrap();
        assert!(!prompt.contains("\"matchScore\": 99"));
    }

    #[test]
    fn test_oracle_response_tolerates_missing_list() {
        let response: OracleResponse = serde_json::from_str("{}").unwrap();
        assert!(response.mentor_matches.is_empty());
    }
}
