//! Prompt construction for the summarization model.

/// Maximum number of characters of document text embedded in a prompt.
///
/// Bounds prompt size and cost. A fixed character count, not adaptive to
/// the model's token accounting.
pub const MAX_DOCUMENT_CHARS: usize = 3000;

/// Build the summarization prompt for a document and role lens.
///
/// Deterministic: the same `(text, role)` pair always yields the same
/// prompt. Only the first [`MAX_DOCUMENT_CHARS`] characters of the document
/// are embedded. `role` is inserted verbatim into the instructions.
pub fn build_prompt(text: &str, role: &str) -> String {
    let excerpt: String = text.chars().take(MAX_DOCUMENT_CHARS).collect();
    format!(
        r#"You are an AI summarizer.
Role: {role}
Document: {excerpt}

Please return ONLY a JSON object with the following structure:
{{
  "summary": "A concise 2-3 sentence summary of the document.",
  "sentiment": "Neutral, Positive, or Negative",
  "insights": ["1-5 key insights from the document, each as a short sentence"],
  "actions": ["1-5 actionable steps derived from the document"],
  "risks": ["1-5 risks mentioned or implied in the document"]
}}

Instructions:
- Do NOT repeat the same content across fields.
- Each field should be concise and specific.
- Return valid JSON only, no extra text, no markdown, no backticks."#
    )
}
