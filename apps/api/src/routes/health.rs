use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, and the active backends.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "alumnilink-api",
        "rankingBackend": state.oracle.backend(),
        "directoryBackend": state.directory.backend(),
        "matchCache": state.match_cache.is_some()
    }))
}
