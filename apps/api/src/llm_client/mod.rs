/// LLM Client — the single point of entry for all model calls in Galileo.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Everything goes through the `GenerationBackend` trait, so the model
/// runtime (hosted API, local runtime, test stub) is swappable without
/// touching the education service.
///
/// Model: claude-sonnet-4-5 (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls in Galileo.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A named JSON exemplar of the record shape the backend must produce.
///
/// The education service tags every call with one of these; the backend
/// owns making the output conform (for the Messages API implementation,
/// by embedding the exemplar in the prompt and parsing the reply).
#[derive(Debug, Clone, Copy)]
pub struct ResponseSchema {
    pub name: &'static str,
    /// JSON exemplar embedded verbatim in the generation prompt.
    pub shape: &'static str,
}

/// Opaque generation capability: fixed session instructions, one prompt in,
/// one schema-conforming value out.
///
/// Carried by `EducationService` as `Arc<dyn GenerationBackend>`.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, prompt: &str, schema: &ResponseSchema) -> Result<Value, LlmError>;

    /// Backend-dependent warm-up hint, issued once before first use.
    async fn prewarm(&self) {}
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// The Anthropic-backed generation session.
///
/// Holds the fixed system instructions for its entire lifetime — one
/// session per service instance, never shared across instances. Each
/// `generate` is a single request: no retry, no backoff, no client-side
/// timeout. Backend failures surface unchanged to the caller.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    system: String,
}

impl LlmClient {
    /// Creates a session bound to `instructions`. The JSON-only output
    /// discipline is appended here: operation prompts describe content,
    /// the backend enforces the output contract.
    pub fn new(api_key: String, instructions: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            system: format!("{instructions}\n\n{}", prompts::JSON_ONLY_SYSTEM),
        }
    }

    /// Makes one call to the Claude API, returning the full response object.
    async fn call(&self, prompt: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system: &self.system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl GenerationBackend for LlmClient {
    async fn generate(&self, prompt: &str, schema: &ResponseSchema) -> Result<Value, LlmError> {
        let prompt = build_schema_prompt(prompt, schema);
        let response = self.call(&prompt).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(text);

        serde_json::from_str(text).map_err(LlmError::Parse)
    }

    async fn prewarm(&self) {
        // The Messages API has no warm-up call; nothing to do here.
        debug!("prewarm requested — no-op for the {MODEL} backend");
    }
}

/// Appends the schema exemplar so the model knows the exact target shape.
fn build_schema_prompt(prompt: &str, schema: &ResponseSchema) -> String {
    format!(
        "{prompt}\n\nReturn a JSON object with this EXACT {} shape (no extra fields):\n{}",
        schema.name, schema.shape
    )
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"concept\": \"Photosynthesis\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"concept\": \"Photosynthesis\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"front\": \"Mitochondria\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"front\": \"Mitochondria\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"title\": \"Cell Biology\"}";
        assert_eq!(strip_json_fences(input), "{\"title\": \"Cell Biology\"}");
    }

    #[test]
    fn test_schema_prompt_embeds_name_and_shape() {
        let schema = ResponseSchema {
            name: "Quiz",
            shape: "{\"title\": \"...\"}",
        };
        let prompt = build_schema_prompt("Create a quiz about gravity.", &schema);
        assert!(prompt.starts_with("Create a quiz about gravity."));
        assert!(prompt.contains("EXACT Quiz shape"));
        assert!(prompt.contains("{\"title\": \"...\"}"));
    }

    #[test]
    fn test_session_system_includes_instructions_and_json_discipline() {
        let client = LlmClient::new("test-key".to_string(), "You are an educator.");
        assert!(client.system.starts_with("You are an educator."));
        assert!(client.system.contains(prompts::JSON_ONLY_SYSTEM));
    }
}
