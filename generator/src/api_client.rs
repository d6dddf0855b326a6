//! Gemini API client
//!
//! Direct HTTP client for the `generateContent` endpoint. Returns the raw
//! completion text; interpreting that text is left to the caller.

use crate::config::Credential;
use crate::error::GenerationError;
use crate::gemini_types::{GeminiApiRequest, GeminiApiResponse};

/// Call the Gemini API with a single prompt
///
/// # Arguments
/// * `client` - Shared HTTP client (connection pooling)
/// * `credential` - Gemini API key
/// * `base_url` - API base URL, e.g. `https://generativelanguage.googleapis.com/v1beta`
/// * `model` - Model name, e.g. `gemini-2.5-flash`
/// * `prompt` - The prompt to send
/// * `force_json` - If true, request a JSON response
///
/// # Returns
/// * `Ok(String)` - The text of the first candidate
/// * `Err(GenerationError)` - If the call failed or returned no text
///
/// # Errors
/// * `GenerationError::Transport` if the request cannot be sent, the service
///   answers with an error status, the envelope cannot be decoded, or the
///   prompt was blocked.
/// * `GenerationError::EmptyResponse` if the response carries no text.
pub async fn call_gemini_api(
    client: &reqwest::Client,
    credential: &Credential,
    base_url: &str,
    model: &str,
    prompt: &str,
    force_json: bool,
) -> Result<String, GenerationError> {
    let endpoint = format!("{}/models/{}:generateContent", base_url, model);
    let request_body = GeminiApiRequest::from_prompt(prompt, force_json);

    tracing::debug!(
        endpoint = %endpoint,
        model = %model,
        force_json = force_json,
        prompt_len = prompt.len(),
        "Calling Gemini API"
    );

    let response = client
        .post(&endpoint)
        .query(&[("key", credential.expose())])
        .json(&request_body)
        .send()
        .await
        .map_err(|e| {
            GenerationError::Transport(format!(
                "could not reach Gemini API: {}",
                e.without_url()
            ))
        })?;

    let status = response.status();
    if !status.is_success() {
        let status_code = status.as_u16();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        tracing::error!(
            status_code = status_code,
            error_body = %error_body,
            "Gemini API returned error status"
        );

        if status_code == 429 {
            return Err(GenerationError::Transport(format!(
                "Gemini API rate limit exceeded (HTTP {}): {}",
                status_code, error_body
            )));
        }

        return Err(GenerationError::Transport(format!(
            "Gemini API returned error status {}: {}",
            status_code, error_body
        )));
    }

    let response_body = response.text().await.map_err(|e| {
        GenerationError::Transport(format!(
            "failed to read response body from Gemini API: {}",
            e.without_url()
        ))
    })?;

    let parsed: GeminiApiResponse = serde_json::from_str(&response_body).map_err(|e| {
        tracing::error!(error = %e, body = %response_body, "Undecodable Gemini API envelope");
        GenerationError::Transport(format!("failed to decode Gemini API response: {}", e))
    })?;

    if let Some(reason) = parsed.block_reason() {
        return Err(GenerationError::Transport(format!(
            "Gemini API blocked the prompt: {}",
            reason
        )));
    }

    let text = parsed.first_candidate_text().ok_or_else(|| {
        tracing::error!(
            candidates = parsed.candidates.len(),
            "Gemini API returned no text"
        );
        GenerationError::EmptyResponse
    })?;

    tracing::debug!(
        response_len = text.len(),
        "Successfully received response from Gemini API"
    );

    Ok(text)
}
