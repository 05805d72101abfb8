pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::directory::handlers as directory;
use crate::enrichment::handlers as enrichment;
use crate::events::handlers as events;
use crate::invitations::handlers as invitations;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Mentor matching
        .route("/api/v1/mentors/match", post(matching::handle_match_mentors))
        // Alumni directory
        .route("/api/v1/alumni", get(directory::handle_list_alumni))
        .route("/api/v1/alumni/signup", post(directory::handle_sign_up))
        .route(
            "/api/v1/alumni/:id",
            get(directory::handle_get_alumnus).put(directory::handle_update_alumnus),
        )
        .route("/api/v1/profile/enrich", post(enrichment::handle_enrich_profile))
        // Events
        .route("/api/v1/events", get(events::handle_list_events))
        .route(
            "/api/v1/events/invitation",
            post(invitations::handle_generate_invitation),
        )
        .route("/api/v1/events/:id/rsvp", post(events::handle_rsvp))
        .with_state(state)
}
