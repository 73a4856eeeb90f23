//! Artifact records produced by the generation backend.
//!
//! Field names are camelCase on the wire — this is the decode contract
//! shared with the schema exemplars in `education::prompts`. Every record
//! is created fresh per request, owned by the caller, never persisted.

use serde::{Deserialize, Serialize};

/// A student-friendly explanation of a single concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptExplanation {
    pub concept: String,
    pub simple_explanation: String,
    pub key_terms: Vec<String>,
    pub real_world_example: String,
    /// Expected one of Beginner / Intermediate / Advanced. Advisory only —
    /// the backend is instructed but the value is not enforced.
    pub difficulty_level: String,
}

/// A multiple-choice quiz with as many questions as the caller requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub title: String,
    pub subject: String,
    pub questions: Vec<Question>,
}

/// One quiz question. `correct_answer` indexes into `options`
/// (expected length 4; the prompt demands an index in 0-3).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

/// A set of flashcards derived from caller-supplied content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardSet {
    pub title: String,
    pub subject: String,
    pub cards: Vec<Flashcard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    pub category: String,
}

/// A condensed study summary of pasted notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyNotes {
    pub title: String,
    pub key_points: Vec<String>,
    pub summary: String,
    pub important_concepts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_deserializes_from_camel_case_wire_shape() {
        let json = r#"{
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
        }"#;

        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.title, "Cell Biology Basics");
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].correct_answer, 1);
        assert_eq!(quiz.questions[0].options.len(), 4);
    }

    #[test]
    fn test_question_without_correct_answer_fails_deserialization() {
        let bad_json = r#"{
            "question": "What is 2 + 2?",
            "options": ["3", "4", "5", "6"],
            "explanation": "Basic arithmetic."
        }"#;
        let result: Result<Question, _> = serde_json::from_str(bad_json);
        assert!(
            result.is_err(),
            "Question without correctAnswer must fail deserialization"
        );
    }

    #[test]
    fn test_negative_correct_answer_fails_deserialization() {
        let bad_json = r#"{
            "question": "What is 2 + 2?",
            "options": ["3", "4", "5", "6"],
            "correctAnswer": -1,
            "explanation": "Basic arithmetic."
        }"#;
        let result: Result<Question, _> = serde_json::from_str(bad_json);
        assert!(result.is_err(), "correctAnswer must be a non-negative index");
    }

    #[test]
    fn test_concept_explanation_round_trips() {
        let explanation = ConceptExplanation {
            concept: "Gravity".to_string(),
            simple_explanation: "Objects with mass pull on each other.".to_string(),
            key_terms: vec!["mass".to_string(), "force".to_string()],
            real_world_example: "An apple falling from a tree.".to_string(),
            difficulty_level: "Beginner".to_string(),
        };

        let json = serde_json::to_string(&explanation).unwrap();
        assert!(json.contains("simpleExplanation"));
        assert!(json.contains("difficultyLevel"));

        let recovered: ConceptExplanation = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.concept, explanation.concept);
        assert_eq!(recovered.key_terms, explanation.key_terms);
    }

    #[test]
    fn test_flashcard_set_serializes_cards_in_order() {
        let set = FlashcardSet {
            title: "Spanish Vocabulary".to_string(),
            subject: "Spanish".to_string(),
            cards: vec![
                Flashcard {
                    front: "la manzana".to_string(),
                    back: "the apple".to_string(),
                    category: "Food".to_string(),
                },
                Flashcard {
                    front: "el perro".to_string(),
                    back: "the dog".to_string(),
                    category: "Animals".to_string(),
                },
            ],
        };

        let json = serde_json::to_string(&set).unwrap();
        let recovered: FlashcardSet = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.cards.len(), 2);
        assert_eq!(recovered.cards[0].front, "la manzana");
        assert_eq!(recovered.cards[1].category, "Animals");
    }

    #[test]
    fn test_study_notes_deserializes_key_points_and_concepts() {
        let json = r#"{
            "title": "Photosynthesis",
            "keyPoints": ["Light energy becomes chemical energy", "Occurs in chloroplasts"],
            "summary": "Plants convert light into glucose.",
            "importantConcepts": ["chlorophyll", "ATP"]
        }"#;

        let notes: StudyNotes = serde_json::from_str(json).unwrap();
        assert_eq!(notes.key_points.len(), 2);
        assert_eq!(notes.important_concepts, vec!["chlorophyll", "ATP"]);
    }
}
