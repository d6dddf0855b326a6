//! Content Generator Library
//!
//! Turns a free-text video topic into structured YouTube content
//! (titles, script outline, description, tags) by prompting the Gemini API
//! and validating the JSON it returns.

pub mod api_client;
pub mod config;
pub mod content;
pub mod error;
pub mod fence;
pub mod gemini_types;
pub mod generator;
pub mod prompt;

pub use config::{Credential, GeneratorConfig};
pub use content::{ContentSection, GeneratedContent, SectionBody};
pub use error::GenerationError;
pub use generator::{ContentGenerator, GeminiContentGenerator};
