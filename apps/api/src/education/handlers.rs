//! Axum route handlers for the education API.
//!
//! Handlers are thin: deserialize the request, call the service, return
//! the artifact verbatim. Input guards live in the service, not here.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::education::models::{ConceptExplanation, FlashcardSet, Quiz, StudyNotes};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub topic: String,
    #[serde(default = "default_question_count")]
    pub question_count: usize,
}

fn default_question_count() -> usize {
    5
}

#[derive(Debug, Deserialize)]
pub struct FlashcardsRequest {
    pub content: String,
    #[serde(default = "default_card_count")]
    pub card_count: usize,
}

fn default_card_count() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

/// POST /api/v1/explain
pub async fn handle_explain(
    State(state): State<AppState>,
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ConceptExplanation>, AppError> {
    let explanation = state.service.explain_concept(&request.topic).await?;
    Ok(Json(explanation))
}

/// POST /api/v1/quiz
pub async fn handle_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<Quiz>, AppError> {
    let quiz = state
        .service
        .generate_quiz(&request.topic, request.question_count)
        .await?;
    Ok(Json(quiz))
}

/// POST /api/v1/flashcards
pub async fn handle_flashcards(
    State(state): State<AppState>,
    Json(request): Json<FlashcardsRequest>,
) -> Result<Json<FlashcardSet>, AppError> {
    let set = state
        .service
        .create_flashcards(&request.content, request.card_count)
        .await?;
    Ok(Json(set))
}

/// POST /api/v1/summarize
pub async fn handle_summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<StudyNotes>, AppError> {
    let notes = state.service.summarize_notes(&request.text).await?;
    Ok(Json(notes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_request_defaults_to_five_questions() {
        let request: QuizRequest =
            serde_json::from_str(r#"{"topic": "gravity"}"#).unwrap();
        assert_eq!(request.question_count, 5);
    }

    #[test]
    fn test_quiz_request_honors_explicit_count() {
        let request: QuizRequest =
            serde_json::from_str(r#"{"topic": "gravity", "question_count": 8}"#).unwrap();
        assert_eq!(request.question_count, 8);
    }

    #[test]
    fn test_flashcards_request_defaults_to_ten_cards() {
        let request: FlashcardsRequest =
            serde_json::from_str(r#"{"content": "cell biology notes"}"#).unwrap();
        assert_eq!(request.card_count, 10);
    }

    #[test]
    fn test_flashcards_request_honors_explicit_count() {
        let request: FlashcardsRequest =
            serde_json::from_str(r#"{"content": "notes", "card_count": 25}"#).unwrap();
        assert_eq!(request.card_count, 25);
    }
}
