//! Education Service — the four generation operations.
//!
//! Each operation is a prompt template plus a schema tag: fill the
//! template, hand it to the backend with the target shape, decode the
//! result. The backend owns the schema contract, so the service does no
//! post-decode validation, no retry, and no post-processing — a decoded
//! artifact is returned to the caller unchanged.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::education::models::{ConceptExplanation, FlashcardSet, Quiz, StudyNotes};
use crate::education::prompts::{
    CONCEPT_EXPLANATION_SCHEMA, EXPLAIN_PROMPT_TEMPLATE, FLASHCARDS_PROMPT_TEMPLATE,
    FLASHCARD_SET_SCHEMA, QUIZ_PROMPT_TEMPLATE, QUIZ_SCHEMA, STUDY_NOTES_SCHEMA,
    SUMMARIZE_PROMPT_TEMPLATE,
};
use crate::errors::AppError;
use crate::llm_client::{GenerationBackend, LlmError, ResponseSchema};

/// The education content generator.
///
/// Holds nothing but the backend session handle — no interior mutability,
/// no locking. Concurrent calls interleave at the backend's discretion
/// with no ordering guarantee between their completions.
#[derive(Clone)]
pub struct EducationService {
    backend: Arc<dyn GenerationBackend>,
}

impl EducationService {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Passes the warm-up hint through to the backend.
    pub async fn prewarm(&self) {
        self.backend.prewarm().await;
    }

    /// Explains `topic` in simple terms with key terms, one real-world
    /// example, and a difficulty rating.
    pub async fn explain_concept(&self, topic: &str) -> Result<ConceptExplanation, AppError> {
        let topic = require_text(topic, "topic")?;
        let prompt = EXPLAIN_PROMPT_TEMPLATE.replace("{topic}", topic);
        self.respond(&prompt, &CONCEPT_EXPLANATION_SCHEMA).await
    }

    /// Generates a `question_count`-question multiple choice quiz about
    /// `topic`, 4 options per question, one correct index each.
    pub async fn generate_quiz(
        &self,
        topic: &str,
        question_count: usize,
    ) -> Result<Quiz, AppError> {
        let topic = require_text(topic, "topic")?;
        let prompt = QUIZ_PROMPT_TEMPLATE
            .replace("{question_count}", &question_count.to_string())
            .replace("{topic}", topic);
        let quiz: Quiz = self.respond(&prompt, &QUIZ_SCHEMA).await?;
        info!(
            "Generated quiz \"{}\" with {} questions",
            quiz.title,
            quiz.questions.len()
        );
        Ok(quiz)
    }

    /// Derives `card_count` flashcards from `content`, grouped by category.
    pub async fn create_flashcards(
        &self,
        content: &str,
        card_count: usize,
    ) -> Result<FlashcardSet, AppError> {
        let content = require_text(content, "content")?;
        let prompt = FLASHCARDS_PROMPT_TEMPLATE
            .replace("{card_count}", &card_count.to_string())
            .replace("{content}", content);
        let set: FlashcardSet = self.respond(&prompt, &FLASHCARD_SET_SCHEMA).await?;
        info!(
            "Created flashcard set \"{}\" with {} cards",
            set.title,
            set.cards.len()
        );
        Ok(set)
    }

    /// Condenses pasted study material into key points, a summary, and
    /// the concepts worth remembering.
    pub async fn summarize_notes(&self, text: &str) -> Result<StudyNotes, AppError> {
        let text = require_text(text, "text")?;
        let prompt = SUMMARIZE_PROMPT_TEMPLATE.replace("{text}", text);
        self.respond(&prompt, &STUDY_NOTES_SCHEMA).await
    }

    /// One backend call, one typed decode. A shape mismatch is a breach
    /// of the backend's schema contract and surfaces as a generation
    /// failure like any other backend error.
    async fn respond<T: DeserializeOwned>(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<T, AppError> {
        let value = self.backend.generate(prompt, schema).await?;
        serde_json::from_value(value).map_err(|e| AppError::Generation(LlmError::Parse(e)))
    }
}

/// Caller-side blank guard: trims and rejects empty/whitespace-only input
/// before any backend call is made.
fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyInput(field.to_string()));
    }
    Ok(trimmed)
}
