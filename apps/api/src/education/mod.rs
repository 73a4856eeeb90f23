// Education content generation: explanations, quizzes, flashcards, summaries.
// All LLM calls go through llm_client — no direct API calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
