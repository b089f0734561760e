pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::insights::handlers as insights;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/chat", post(chat::handle_chat))
        .route("/api/v1/jobs/search", get(jobs::handle_job_search))
        .route("/api/v1/salary", get(insights::handle_salary))
        .route("/api/v1/migration", get(insights::handle_tracked_companies))
        .route("/api/v1/migration/:company", get(insights::handle_migration))
        .route("/api/v1/skills/gap", post(insights::handle_skill_gap))
        .with_state(state)
}
