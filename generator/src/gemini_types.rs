//! Gemini API wire types
//!
//! Structs that mirror the `generateContent` JSON request and response.
//! Field names follow the API's camelCase convention.

use serde::{Deserialize, Serialize};

/// Top-level `generateContent` response
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeminiApiResponse {
    /// Candidate completions from the model
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Feedback about the prompt (set when it was blocked)
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GeminiApiResponse {
    /// Concatenated text of the first candidate's parts
    ///
    /// Returns `None` when there is no candidate or no part carries text.
    pub fn first_candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Block reason reported for the prompt, if any
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
    }
}

/// A single candidate response
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Content of this candidate (absent when generation was stopped early)
    #[serde(default)]
    pub content: Option<Content>,
    /// Why the model stopped generating
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Content of a candidate
#[derive(Deserialize, Debug)]
pub struct Content {
    /// Content parts (normally a single text part)
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Producer of the content, e.g. "model"
    #[serde(default)]
    pub role: Option<String>,
}

/// A single content part
#[derive(Deserialize, Debug)]
pub struct Part {
    /// Text of this part
    #[serde(default)]
    pub text: Option<String>,
}

/// Feedback about the prompt
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// `generateContent` request body
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeminiApiRequest {
    /// Conversation contents; a single user turn here
    pub contents: Vec<RequestContent>,
    /// Optional generation configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GeminiApiRequest {
    /// Build a single-prompt request, optionally asking for JSON output
    pub fn from_prompt(prompt: &str, force_json: bool) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: force_json.then(|| GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
            }),
        }
    }
}

/// Content of a request turn
#[derive(Serialize, Debug)]
pub struct RequestContent {
    /// Request parts
    pub parts: Vec<RequestPart>,
}

/// A single request part
#[derive(Serialize, Debug)]
pub struct RequestPart {
    /// Prompt text
    pub text: String,
}

/// Generation configuration
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// MIME type to force for the response (e.g. "application/json")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_json_hint() {
        let request = GeminiApiRequest::from_prompt("hello", true);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{ "parts": [{ "text": "hello" }] }],
                "generationConfig": { "responseMimeType": "application/json" }
            })
        );
    }

    #[test]
    fn test_request_omits_config_without_hint() {
        let request = GeminiApiRequest::from_prompt("hello", false);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn test_response_joins_text_parts() {
        let response: GeminiApiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "{\"a\":" }, { "text": " 1}" }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(response.first_candidate_text().as_deref(), Some("{\"a\": 1}"));
        assert_eq!(
            response.candidates[0].finish_reason.as_deref(),
            Some("STOP")
        );
    }

    #[test]
    fn test_response_without_content_has_no_text() {
        let response: GeminiApiResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "SAFETY" }],
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();
        assert!(response.first_candidate_text().is_none());
        assert_eq!(response.block_reason(), Some("SAFETY"));
    }
}
