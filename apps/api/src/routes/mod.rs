pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::education::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/explain", post(handlers::handle_explain))
        .route("/api/v1/quiz", post(handlers::handle_quiz))
        .route("/api/v1/flashcards", post(handlers::handle_flashcards))
        .route("/api/v1/summarize", post(handlers::handle_summarize))
        .with_state(state)
}
