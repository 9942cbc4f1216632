//! Axum route handlers for the Word Search API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::puzzle::generator::{generate_puzzle, PuzzleResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WordSearchRequest {
    pub topic: String,
}

/// POST /generate-word-search
///
/// Builds a word-search grid for the topic and returns it with the answer coordinates.
pub async fn handle_generate_word_search(
    State(state): State<AppState>,
    Json(request): Json<WordSearchRequest>,
) -> Result<Json<PuzzleResult>, AppError> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let puzzle = generate_puzzle(state.word_source.as_ref(), topic, &state.puzzle).await?;

    Ok(Json(puzzle))
}
