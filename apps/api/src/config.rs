use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which `RankingOracle` backend ranks mentor candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingBackend {
    Llm,
    Keyword,
}

impl FromStr for RankingBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "llm" => Ok(RankingBackend::Llm),
            "keyword" => Ok(RankingBackend::Keyword),
            other => bail!("RANKING_BACKEND must be 'llm' or 'keyword', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub anthropic_api_url: Option<String>,
    pub ranking_backend: RankingBackend,
    /// Postgres-backed directory when set, in-memory otherwise.
    pub database_url: Option<String>,
    /// Match result cache is disabled when unset.
    pub redis_url: Option<String>,
    pub match_cache_ttl_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            anthropic_api_url: optional_env("ANTHROPIC_API_URL"),
            ranking_backend: optional_env("RANKING_BACKEND")
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or(RankingBackend::Llm),
            database_url: optional_env("DATABASE_URL"),
            redis_url: optional_env("REDIS_URL"),
            match_cache_ttl_secs: optional_env("MATCH_CACHE_TTL_SECS")
                .unwrap_or_else(|| "3600".to_string())
                .parse::<u64>()
                .context("MATCH_CACHE_TTL_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_backend_parses_case_insensitively() {
        assert_eq!("LLM".parse::<RankingBackend>().unwrap(), RankingBackend::Llm);
        assert_eq!(
            " keyword ".parse::<RankingBackend>().unwrap(),
            RankingBackend::Keyword
        );
    }

    #[test]
    fn test_ranking_backend_rejects_unknown() {
        let err = "vector".parse::<RankingBackend>().unwrap_err();
        assert!(err.to_string().contains("vector"));
    }
}
