//! Generator configuration
//!
//! Configuration is resolved once at startup from environment variables and
//! then handed to the generator. Nothing below the binary reads the
//! environment on its own.

use std::env;
use std::fmt;

/// Default Gemini model name
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini API base URL
pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the API key, in order
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Gemini API key
///
/// Immutable once created. `Debug` is redacted so the key can sit inside
/// logged structs without leaking.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a key, rejecting empty or whitespace-only values
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The key itself, for building the request URL
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<redacted, {} chars>)", self.0.len())
    }
}

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// API key, if one was configured
    pub credential: Option<Credential>,
    /// Gemini model name
    pub gemini_model: String,
    /// Gemini API base URL
    pub gemini_api_base_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            credential: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base_url: DEFAULT_GEMINI_API_BASE_URL.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = API_KEY_VARS
            .iter()
            .find_map(|name| lookup(name).and_then(Credential::new));

        Self {
            credential,
            gemini_model: lookup("GEMINI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base_url: lookup("GEMINI_API_BASE_URL")
                .filter(|u| !u.trim().is_empty())
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE_URL.to_string()),
        }
    }

    /// Create a configuration with the given key and default settings
    pub fn with_credential(key: impl Into<String>) -> Self {
        Self {
            credential: Credential::new(key),
            ..Self::default()
        }
    }

    /// Point the configuration at a different API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.gemini_api_base_url = base_url.into();
        self
    }

    /// Whether content generation can be attempted at all
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[]));
        assert!(!config.has_credential());
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.gemini_api_base_url, DEFAULT_GEMINI_API_BASE_URL);
    }

    #[test]
    fn test_config_prefers_gemini_api_key() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "primary"),
            ("API_KEY", "fallback"),
        ]));
        assert_eq!(config.credential.unwrap().expose(), "primary");
    }

    #[test]
    fn test_config_falls_back_to_api_key() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "   "),
            ("API_KEY", "fallback"),
        ]));
        assert_eq!(config.credential.unwrap().expose(), "fallback");
    }

    #[test]
    fn test_config_overrides() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_API_BASE_URL", "http://localhost:9000/"),
        ]));
        assert_eq!(config.gemini_model, "gemini-2.5-pro");
        assert_eq!(config.gemini_api_base_url, "http://localhost:9000");
    }

    #[test]
    fn test_credential_rejects_blank() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new(" \t\n").is_none());
        assert!(GeneratorConfig::with_credential("").credential.is_none());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("super-secret-key").unwrap();
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("redacted"));

        let config_debug = format!("{:?}", GeneratorConfig::with_credential("super-secret-key"));
        assert!(!config_debug.contains("super-secret-key"));
    }
}
