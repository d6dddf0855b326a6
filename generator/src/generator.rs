//! Content Request Adapter
//!
//! Turns a topic into validated `GeneratedContent` with a single request.
//! No retries, no caching: one best-effort attempt per call.

use crate::api_client::call_gemini_api;
use crate::config::GeneratorConfig;
use crate::content::{parse_generated_content, GeneratedContent};
use crate::error::GenerationError;
use crate::fence::strip_code_fence;
use crate::prompt::build_prompt;
use async_trait::async_trait;

/// Anything that can generate content for a topic
///
/// The GUI depends on this trait only, so it can run against a stub.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate content for a non-empty topic
    async fn request_content(&self, topic: &str) -> Result<GeneratedContent, GenerationError>;
}

/// Content generator backed by the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiContentGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

impl GeminiContentGenerator {
    /// Create a generator with its own HTTP client
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a generator that shares an existing HTTP client
    pub fn with_client(client: reqwest::Client, config: GeneratorConfig) -> Self {
        Self { client, config }
    }

    /// Configuration this generator was built with
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

#[async_trait]
impl ContentGenerator for GeminiContentGenerator {
    async fn request_content(&self, topic: &str) -> Result<GeneratedContent, GenerationError> {
        // Checked before anything touches the network
        let credential = self.config.credential.as_ref().ok_or_else(|| {
            tracing::warn!("Attempted to call Gemini API without an API key");
            GenerationError::Configuration
        })?;

        let prompt = build_prompt(topic);
        let started_at = chrono::Utc::now();

        let raw_text = call_gemini_api(
            &self.client,
            credential,
            &self.config.gemini_api_base_url,
            &self.config.gemini_model,
            &prompt,
            true,
        )
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error generating content from Gemini");
            e
        })?;

        let json_text = strip_code_fence(&raw_text);
        if json_text.is_empty() {
            tracing::error!("Gemini API returned only whitespace");
            return Err(GenerationError::EmptyResponse);
        }

        let content = parse_generated_content(json_text).map_err(|e| {
            tracing::error!(
                error = %e,
                raw_response = e.raw_response().unwrap_or_default(),
                "Failed to parse content from Gemini response"
            );
            e
        })?;

        tracing::info!(
            titles = content.titles.len(),
            tags = content.tags.len(),
            elapsed_ms = (chrono::Utc::now() - started_at).num_milliseconds(),
            "Generated content"
        );

        Ok(content)
    }
}
