mod coerce;
mod config;
mod db;
mod directory;
mod enrichment;
mod errors;
mod events;
mod invitations;
mod llm_client;
mod matching;
mod models;
mod response;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, RankingBackend};
use crate::db::create_pool;
use crate::directory::postgres::PgDirectory;
use crate::directory::{AlumniRepository, InMemoryDirectory};
use crate::events::EventBoard;
use crate::llm_client::LlmClient;
use crate::matching::cache::{MatchCache, RedisMatchCache};
use crate::matching::keyword::KeywordRankingOracle;
use crate::matching::oracle::{LlmRankingOracle, RankingOracle};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AlumniLink API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize alumni directory
    let directory = build_directory(&config).await?;
    info!("Alumni directory initialized (backend: {})", directory.backend());

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.anthropic_api_url.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize ranking oracle (LlmRankingOracle by default, swap via RANKING_BACKEND)
    let oracle: Arc<dyn RankingOracle> = match config.ranking_backend {
        RankingBackend::Llm => Arc::new(LlmRankingOracle(llm.clone())),
        RankingBackend::Keyword => Arc::new(KeywordRankingOracle),
    };
    info!("Ranking oracle: {}", oracle.backend());

    // Initialize match cache (optional)
    let match_cache = build_match_cache(&config).await;

    let state = AppState {
        directory,
        events: Arc::new(EventBoard::seeded()),
        oracle,
        match_cache,
        llm,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the dashboard origin once it is configurable

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Postgres directory when DATABASE_URL is set, seeded in-memory directory otherwise.
async fn build_directory(config: &Config) -> Result<Arc<dyn AlumniRepository>> {
    match &config.database_url {
        Some(url) => {
            let directory = PgDirectory::new(create_pool(url).await?);
            directory.init().await?;
            Ok(Arc::new(directory))
        }
        None => Ok(Arc::new(InMemoryDirectory::seeded())),
    }
}

/// The cache is an optimization; an unreachable Redis disables it instead of
/// failing startup.
async fn build_match_cache(config: &Config) -> Option<Arc<dyn MatchCache>> {
    let url = config.redis_url.as_deref()?;
    match RedisMatchCache::connect(url, config.match_cache_ttl_secs).await {
        Ok(cache) => Some(Arc::new(cache)),
        Err(e) => {
            warn!("Mentor match cache disabled: {e}");
            None
        }
    }
}
