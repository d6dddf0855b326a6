// State management module
// Handles the topic, credential availability, and generation lifecycle

pub mod app_state;

pub use app_state::{AppState, GenerationState, SubmitOutcome};
