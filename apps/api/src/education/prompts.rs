// All prompt constants and schema exemplars for the education service.
// Cross-cutting JSON discipline lives in llm_client::prompts; the session
// instructions below are fixed once at backend construction.

use crate::llm_client::ResponseSchema;

/// Session instructions shared by every generation call.
pub const EDUCATOR_SYSTEM: &str = "You are Galileo, a brilliant educator and scientist. \
    Your role is to make complex concepts accessible and engaging for students. \
    Always provide clear, accurate, and educational content. \
    When creating structured responses, follow the exact format requested. \
    Be encouraging and supportive in your explanations.";

/// Concept explanation prompt. Replace `{topic}` before sending.
pub const EXPLAIN_PROMPT_TEMPLATE: &str = r#"Explain the concept "{topic}" in simple terms suitable for students.
Provide key terms, one real-world example, and rate the difficulty level (Beginner/Intermediate/Advanced).
Focus on making complex ideas accessible and engaging."#;

pub const CONCEPT_EXPLANATION_SCHEMA: ResponseSchema = ResponseSchema {
    name: "ConceptExplanation",
    shape: r#"{
  "concept": "Photosynthesis",
  "simpleExplanation": "Plants use sunlight, water, and air to make their own food.",
  "keyTerms": ["chlorophyll", "glucose", "chloroplast"],
  "realWorldExample": "A houseplant growing toward a sunny window.",
  "difficultyLevel": "Beginner"
}"#,
};

/// Quiz prompt. Replace `{question_count}` and `{topic}` before sending.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Create a {question_count}-question multiple choice quiz about "{topic}".
The quiz must contain exactly {question_count} questions.
Each question must have exactly 4 options with exactly one correct answer (index 0-3).
Include an educational explanation for each correct answer.
Make questions appropriately challenging but fair."#;

pub const QUIZ_SCHEMA: ResponseSchema = ResponseSchema {
    name: "Quiz",
    shape: r#"{
  "title": "Cell Biology Basics",
  "subject": "Biology",
  "questions": [
    {
      "question": "Which organelle produces most of a cell's ATP?",
      "options": ["Nucleus", "Mitochondrion", "Ribosome", "Golgi apparatus"],
      "correctAnswer": 1,
      "explanation": "Mitochondria run cellular respiration, which produces ATP."
    }
  ]
}"#,
};

/// Flashcard prompt. Replace `{card_count}` and `{content}` before sending.
pub const FLASHCARDS_PROMPT_TEMPLATE: &str = r#"Create {card_count} flashcards from this content: "{content}"
The set must contain exactly {card_count} cards.
Each flashcard must have a clear question or term on the front and a concise answer or definition on the back.
Organize cards by logical categories and focus on the most important concepts."#;

pub const FLASHCARD_SET_SCHEMA: ResponseSchema = ResponseSchema {
    name: "FlashcardSet",
    shape: r#"{
  "title": "World War II Key Events",
  "subject": "History",
  "cards": [
    {
      "front": "When did World War II end in Europe?",
      "back": "May 8, 1945 (V-E Day)",
      "category": "Dates"
    }
  ]
}"#,
};

/// Note summarization prompt. Replace `{text}` before sending.
pub const SUMMARIZE_PROMPT_TEMPLATE: &str = r#"Summarize this study material into key points: "{text}"
Extract the most important concepts and create a concise summary.
Organize information in a student-friendly format with clear key points and important concepts."#;

pub const STUDY_NOTES_SCHEMA: ResponseSchema = ResponseSchema {
    name: "StudyNotes",
    shape: r#"{
  "title": "Photosynthesis",
  "keyPoints": ["Light energy is converted to chemical energy", "Occurs in chloroplasts"],
  "summary": "Plants capture sunlight and turn it into glucose through photosynthesis.",
  "importantConcepts": ["chlorophyll", "ATP", "glucose"]
}"#,
};
