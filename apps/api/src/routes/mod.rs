pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::puzzle::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/generate-word-search",
            post(handlers::handle_generate_word_search),
        )
        .with_state(state)
}
