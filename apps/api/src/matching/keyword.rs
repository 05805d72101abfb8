//! Deterministic keyword ranking backend. No LLM call.
//!
//! Algorithm:
//! 1. Tokenize the query, drop filler words, expand a few umbrella terms
//!    ("cloud" → aws, serverless, ...).
//! 2. Per alumnus: each skill sharing a term scores `SKILL_POINTS`, each
//!    matching term in the role scores `ROLE_POINTS` (max 2), each in the
//!    bio `BIO_POINTS` (max 2). Capped at 100.
//! 3. Zero scores are excluded; ties keep pool order; top `MAX_MATCHES` returned.

use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::matching::oracle::RankingOracle;
use crate::matching::{MatchError, MAX_MATCHES};
use crate::models::alumni::AlumniRecord;

const SKILL_POINTS: u32 = 25;
const ROLE_POINTS: u32 = 10;
const BIO_POINTS: u32 = 5;
const MAX_ROLE_HITS: u32 = 2;
const MAX_BIO_HITS: u32 = 2;

const STOPWORDS: &[&str] = &[
    "a", "about", "also", "am", "an", "and", "any", "are", "as", "at", "be", "but", "by", "can",
    "for", "from", "get", "have", "how", "i", "im", "in", "interested", "into", "is", "it",
    "keen", "learn", "learning", "like", "looking", "me", "more", "my", "of", "on", "or",
    "some", "specifically", "that", "the", "to", "want", "with", "would",
];

/// Umbrella terms and the concrete skills they imply.
const RELATED_TERMS: &[(&str, &[&str])] = &[
    ("cloud", &["aws", "azure", "gcp", "google", "serverless", "kubernetes", "terraform", "devops"]),
    ("infrastructure", &["kubernetes", "terraform", "aws", "devops"]),
    ("ai", &["machine", "ml", "pytorch", "tensorflow", "mlops"]),
    ("frontend", &["react", "typescript", "javascript", "css", "accessibility"]),
    ("web", &["react", "typescript", "javascript"]),
    ("data", &["sql", "statistics", "analytics", "visualization"]),
    ("security", &["penetration", "cryptography", "appsec"]),
    ("mobile", &["swift", "kotlin", "ios", "android"]),
    ("startup", &["entrepreneurship", "fundraising"]),
    ("product", &["roadmapping", "research"]),
    ("reliability", &["observability", "incident", "sre"]),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordRankingOracle;

#[async_trait]
impl RankingOracle for KeywordRankingOracle {
    async fn rank(&self, query: &str, pool: &[AlumniRecord]) -> Result<Vec<Value>, MatchError> {
        Ok(rank_by_keywords(query, pool))
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

fn rank_by_keywords(query: &str, pool: &[AlumniRecord]) -> Vec<Value> {
    let terms = query_terms(query);

    let mut scored: Vec<(u32, &AlumniRecord)> = pool
        .iter()
        .map(|alumnus| (score_alumnus(alumnus, &terms), alumnus))
        .filter(|(score, _)| *score > 0)
        .collect();

    // stable: ties keep pool order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(MAX_MATCHES)
        .map(|(score, a)| {
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
        })
        .collect()
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn query_terms(query: &str) -> HashSet<String> {
    let mut terms: HashSet<String> = tokenize(query)
        .filter(|t| !STOPWORDS.contains(&t.as_str()))
        .collect();

    let expansions: Vec<&str> = RELATED_TERMS
        .iter()
        .filter(|(umbrella, _)| terms.contains(*umbrella))
        .flat_map(|(_, related)| related.iter().copied())
        .collect();
    terms.extend(expansions.into_iter().map(str::to_string));

    terms
}

fn score_alumnus(alumnus: &AlumniRecord, terms: &HashSet<String>) -> u32 {
    let skill_hits = alumnus
        .skills
        .iter()
        .filter(|skill| tokenize(skill).any(|t| terms.contains(&t)))
        .count() as u32;

    let role_hits = distinct_hits(&alumnus.current_role, terms).min(MAX_ROLE_HITS);
    let bio_hits = distinct_hits(&alumnus.short_bio, terms).min(MAX_BIO_HITS);

    (skill_hits * SKILL_POINTS + role_hits * ROLE_POINTS + bio_hits * BIO_POINTS).min(100)
}

fn distinct_hits(text: &str, terms: &HashSet<String>) -> u32 {
    tokenize(text)
        .filter(|t| terms.contains(t))
        .collect::<HashSet<_>>()
        .len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed::default_alumni;

    fn score_of(ranked: &[Value], email: &str) -> Option<u64> {
        ranked
            .iter()
            .find(|v| v["email"] == email)
            .and_then(|v| v["matchScore"].as_u64())
    }

    #[test]
    fn test_stopwords_are_dropped() {
        let terms = query_terms("I am interested in Rust and Kafka");
        assert!(terms.contains("rust"));
        assert!(terms.contains("kafka"));
        assert!(!terms.contains("interested"));
        assert!(!terms.contains("i"));
    }

    #[test]
    fn test_umbrella_terms_expand() {
        let terms = query_terms("cloud computing");
        assert!(terms.contains("aws"));
        assert!(terms.contains("serverless"));
    }

    #[test]
    fn test_skill_match_outranks_bio_match() {
        let pool = default_alumni();
        // Tom Becker lists Rust as a skill; Sofia Rossi only has "workshop" in the bio.
        let ranked = rank_by_keywords("rust and workshop teaching", &pool);
        let tom = score_of(&ranked, "tom.becker@example.com").unwrap();
        let sofia = score_of(&ranked, "sofia.rossi@example.com").unwrap();
        assert!(tom > sofia);
        assert_eq!(ranked[0]["email"], "tom.becker@example.com");
    }

    #[test]
    fn test_zero_scores_are_excluded() {
        let ranked = rank_by_keywords("underwater basket weaving", &default_alumni());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_returns_at_most_five() {
        let pool: Vec<AlumniRecord> = (0..8)
            .map(|i| AlumniRecord {
                id: i.to_string(),
                name: format!("Person {i}"),
                email: format!("p{i}@example.com"),
                graduation_year: 2010 + i,
                current_role: "Engineer".to_string(),
                skills: vec!["Rust".to_string()],
                linkedin_url: String::new(),
                short_bio: String::new(),
                avatar_url: String::new(),
                match_score: None,
            })
            .collect();
        let ranked = rank_by_keywords("rust", &pool);
        assert_eq!(ranked.len(), MAX_MATCHES);
        // ties keep pool order
        assert_eq!(ranked[0]["email"], "p0@example.com");
        assert_eq!(ranked[4]["email"], "p4@example.com");
    }

    #[test]
    fn test_score_is_capped_at_100() {
        let alumnus = AlumniRecord {
            id: "x".to_string(),
            name: "X".to_string(),
            email: "x@example.com".to_string(),
            graduation_year: 2010,
            current_role: "Rust Go Engineer".to_string(),
            skills: ["Rust", "Go", "SQL", "Kafka", "Redis"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            linkedin_url: String::new(),
            short_bio: "Rust Go SQL".to_string(),
            avatar_url: String::new(),
            match_score: None,
        };
        let terms = query_terms("rust go sql kafka redis");
        assert_eq!(score_alumnus(&alumnus, &terms), 100);
    }
}
