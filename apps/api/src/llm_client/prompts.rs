// Cross-cutting prompt fragments shared by every backend call.
// Operation-specific prompts live in education::prompts, alongside the
// schema exemplars they pair with.

/// System prompt fragment that enforces JSON-only output.
/// Appended to the session instructions at backend construction.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies outside the JSON.";
