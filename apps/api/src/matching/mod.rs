//! Mentor Matching: ranks alumni against a student's skills and interests.
//!
//! Pipeline: form → `validator` → (`cache`) → `RankingOracle` → `normalizer`.
//! The oracle is trusted for ranking and scores only. Identity fields in its
//! output are always reconciled against the candidate pool.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::errors::AppError;
use crate::models::alumni::AlumniRecord;

pub mod cache;
pub mod handlers;
pub mod keyword;
pub mod normalizer;
pub mod oracle;
pub mod prompts;
pub mod validator;

use cache::{cache_key, MatchCache};
use normalizer::normalize;
use oracle::RankingOracle;

/// Upper bound on mentors returned per request.
pub const MAX_MATCHES: usize = 5;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("ranking oracle failed: {0}")]
    MatchingService(String),

    #[error("alumni directory unavailable: {0}")]
    Directory(#[from] anyhow::Error),
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::Validation { field, message } => AppError::validation(field, message),
            MatchError::MatchingService(msg) => AppError::MatchingService(msg),
            MatchError::Directory(e) => AppError::Internal(e),
        }
    }
}

/// Where a request's candidate pool came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PoolSource {
    /// Parsed from the submitted `allAlumni` field.
    Submitted,
    /// No pool was submitted; read from the alumni directory.
    Directory,
    /// A pool was submitted but could not be used; the bundled defaults stood in.
    BundledFallback,
}

/// A validated matching request. Build through `validator::validate_match_request`.
#[derive(Debug, Clone)]
pub struct MatchQuery {
    pub skills_and_interests: String,
    /// Non-empty, unique ids, every record has an avatar.
    pub candidate_pool: Vec<AlumniRecord>,
    pub pool_source: PoolSource,
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Best match first, at most `MAX_MATCHES`, each with `match_score` set.
    pub mentors: Vec<AlumniRecord>,
    pub pool_source: PoolSource,
}

impl MatchResult {
    /// Caller-facing explanation when the bundled fallback pool was used.
    pub fn notice(&self) -> Option<String> {
        (self.pool_source == PoolSource::BundledFallback).then(|| {
            "The submitted alumni list could not be read, so matches were drawn from the default alumni directory."
                .to_string()
        })
    }
}

/// Runs one matching request: cache lookup, a single oracle call, normalization.
pub async fn find_mentors(
    query: &MatchQuery,
    oracle: &dyn RankingOracle,
    cache: Option<&dyn MatchCache>,
) -> Result<MatchResult, MatchError> {
    let key = cache.and_then(|_| {
        cache_key(
            oracle.backend(),
            &query.skills_and_interests,
            &query.candidate_pool,
        )
    });

    if let (Some(cache), Some(key)) = (cache, key.as_deref()) {
        if let Some(mentors) = cache.get(key).await {
            info!(key, "Mentor match served from cache");
            return Ok(MatchResult {
                mentors,
                pool_source: query.pool_source,
            });
        }
    }

    let ranked = oracle
        .rank(&query.skills_and_interests, &query.candidate_pool)
        .await?;
    let returned = ranked.len();
    let mentors = normalize(ranked, &query.candidate_pool);

    info!(
        backend = oracle.backend(),
        pool_size = query.candidate_pool.len(),
        returned,
        kept = mentors.len(),
        "Mentor matching completed"
    );

    if let (Some(cache), Some(key)) = (cache, key.as_deref()) {
        cache.put(key, &mentors).await;
    }

    Ok(MatchResult {
        mentors,
        pool_source: query.pool_source,
    })
}
