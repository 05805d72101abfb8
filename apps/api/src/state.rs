use std::sync::Arc;

use crate::directory::AlumniRepository;
use crate::events::EventBoard;
use crate::llm_client::LlmClient;
use crate::matching::cache::MatchCache;
use crate::matching::oracle::RankingOracle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Alumni storage. In-memory or Postgres, chosen by DATABASE_URL.
    pub directory: Arc<dyn AlumniRepository>,
    pub events: Arc<EventBoard>,
    /// Pluggable ranking oracle. Default: LlmRankingOracle. Swap via RANKING_BACKEND.
    pub oracle: Arc<dyn RankingOracle>,
    /// Present only when REDIS_URL is configured.
    pub match_cache: Option<Arc<dyn MatchCache>>,
    pub llm: LlmClient,
}
