//! Error types for content generation
//!
//! Every failure of a generation request is one of these variants. The
//! `Display` output is what the GUI shows to the user.

use thiserror::Error;

/// Errors that can occur while requesting generated content
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No API credential is configured; the request was never sent
    #[error("Gemini API key is not configured. Please set the GEMINI_API_KEY environment variable.")]
    Configuration,

    /// The service answered but the answer carried no text
    #[error("No text returned from Gemini API.")]
    EmptyResponse,

    /// The response text could not be turned into content
    ///
    /// `raw` holds the offending text for logging only. It is deliberately
    /// left out of the display message.
    #[error("Received a malformed response from Gemini API: {reason}")]
    MalformedResponse {
        /// Short description of what was wrong
        reason: String,
        /// The text that failed to parse or validate (after fence stripping)
        raw: String,
    },

    /// The HTTP call or the service itself failed
    #[error("Failed to generate content: {0}")]
    Transport(String),
}

impl GenerationError {
    /// Build a `MalformedResponse` error
    pub fn malformed(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        GenerationError::MalformedResponse {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    /// Raw response text attached to this error, if any
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            GenerationError::MalformedResponse { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_hides_raw_text() {
        let err = GenerationError::malformed("response is not valid JSON", "{not json at all");
        let message = err.to_string();
        assert!(message.contains("response is not valid JSON"));
        assert!(!message.contains("{not json at all"));
        assert_eq!(err.raw_response(), Some("{not json at all"));
    }

    #[test]
    fn test_transport_wraps_message() {
        let err = GenerationError::Transport("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to generate content: connection refused"
        );
        assert!(err.raw_response().is_none());
    }
}
