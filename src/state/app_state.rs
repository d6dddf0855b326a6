// Application state management
// Contains the topic, credential availability, and the generation lifecycle

use content_generator::{GeneratedContent, GenerationError};

/// Validation message for an empty topic
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic for your YouTube video.";

/// Validation message when generation is attempted without an API key
pub const MISSING_KEY_MESSAGE: &str = "Cannot generate content: Gemini API key is not configured.";

/// Persistent banner shown when no API key is configured
pub const MISSING_KEY_BANNER: &str = "Gemini API key is not configured. Please ensure the GEMINI_API_KEY environment variable is set. Content generation is disabled.";

/// Lifecycle of the current generation request
/// Content and error are mutually exclusive by construction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last request produced content
    Success(GeneratedContent),
    /// The last request (or its validation) failed with this message
    Error(String),
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request should be started for this topic
    Dispatched(String),
    /// The submission failed validation; the message is now displayed
    Rejected,
    /// A request is already in flight; nothing changed
    Ignored,
}

/// UI-specific state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether the About window is open
    pub about_open: bool,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Topic text as typed by the user
    pub topic: String,
    /// Whether an API key was configured at startup
    pub credential_available: bool,
    /// Advisory banner for configuration problems, separate from request errors
    pub config_banner: Option<String>,
    /// Current generation lifecycle
    pub generation: GenerationState,
    /// UI state preferences
    pub ui_state: UiState,
}

impl AppState {
    /// Create application state for the given credential availability
    pub fn new(credential_available: bool) -> Self {
        Self {
            topic: String::new(),
            credential_available,
            config_banner: (!credential_available).then(|| MISSING_KEY_BANNER.to_string()),
            generation: GenerationState::Idle,
            ui_state: UiState::default(),
        }
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.generation, GenerationState::Loading)
    }

    /// Whether the topic editor accepts input
    pub fn input_enabled(&self) -> bool {
        self.credential_available && !self.is_loading()
    }

    /// Whether the generate action is available
    pub fn can_submit(&self) -> bool {
        self.input_enabled() && !self.topic.trim().is_empty()
    }

    /// Content from the last successful request, if displayed
    pub fn content(&self) -> Option<&GeneratedContent> {
        match &self.generation {
            GenerationState::Success(content) => Some(content),
            _ => None,
        }
    }

    /// Error message currently displayed, if any
    pub fn error_message(&self) -> Option<&str> {
        match &self.generation {
            GenerationState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Handle a generate action
    ///
    /// While a request is in flight this is a no-op. Otherwise the topic
    /// and credential are validated; on success the state moves to
    /// `Loading`, clearing any previous content or error.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_loading() {
            return SubmitOutcome::Ignored;
        }

        let topic = self.topic.trim();
        if topic.is_empty() {
            self.generation = GenerationState::Error(EMPTY_TOPIC_MESSAGE.to_string());
            return SubmitOutcome::Rejected;
        }
        if !self.credential_available {
            self.generation = GenerationState::Error(MISSING_KEY_MESSAGE.to_string());
            return SubmitOutcome::Rejected;
        }

        let topic = topic.to_string();
        self.generation = GenerationState::Loading;
        SubmitOutcome::Dispatched(topic)
    }

    /// Apply the result of the in-flight request
    /// Returns false if no request was in flight (the result is dropped)
    pub fn complete(&mut self, result: Result<GeneratedContent, GenerationError>) -> bool {
        if !self.is_loading() {
            tracing::warn!("Dropping generation result with no request in flight");
            return false;
        }

        self.generation = match result {
            Ok(content) => GenerationState::Success(content),
            Err(e) => GenerationState::Error(e.to_string()),
        };
        true
    }
}
