//! Generated content model
//!
//! The record produced by one successful generation request, its
//! validation from response text, and the mapping to display sections.

use crate::error::GenerationError;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;

/// Content generated for one topic
///
/// Immutable once produced; the next request replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    /// Title suggestions (3-5 expected, not enforced)
    pub titles: Vec<String>,
    /// Script outline with newline-separated sections
    pub script_outline: String,
    /// Video description with newline-separated paragraphs and link placeholders
    pub description: String,
    /// Tags (10-15 expected, not enforced)
    pub tags: Vec<String>,
}

/// How a section body is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody<'a> {
    /// Bulleted list, one item per line
    List(&'a [String]),
    /// Text shown with its line breaks preserved
    Preformatted(&'a str),
    /// Compact badges laid out in wrapping rows
    Badges(&'a [String]),
}

/// A labeled, renderable part of the generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSection<'a> {
    /// Section heading
    pub heading: &'static str,
    /// Section body
    pub body: SectionBody<'a>,
}

impl SectionBody<'_> {
    fn is_empty(&self) -> bool {
        match self {
            SectionBody::List(items) | SectionBody::Badges(items) => items.is_empty(),
            SectionBody::Preformatted(text) => text.is_empty(),
        }
    }
}

impl GeneratedContent {
    /// Sections to display, in order, skipping empty fields
    pub fn sections(&self) -> Vec<ContentSection<'_>> {
        [
            ContentSection {
                heading: "Suggested Titles",
                body: SectionBody::List(&self.titles),
            },
            ContentSection {
                heading: "Script Outline",
                body: SectionBody::Preformatted(&self.script_outline),
            },
            ContentSection {
                heading: "Video Description",
                body: SectionBody::Preformatted(&self.description),
            },
            ContentSection {
                heading: "Tags",
                body: SectionBody::Badges(&self.tags),
            },
        ]
        .into_iter()
        .filter(|section| !section.body.is_empty())
        .collect()
    }
}

/// Parse and validate response text into `GeneratedContent`
///
/// `titles` and `tags` must be arrays of strings (possibly empty);
/// `scriptOutline` and `description` must be strings. Extra fields are
/// ignored.
///
/// # Errors
/// * `GenerationError::MalformedResponse` if the text is not JSON, or is
///   JSON of the wrong shape.
pub fn parse_generated_content(text: &str) -> Result<GeneratedContent, GenerationError> {
    serde_json::from_str::<GeneratedContent>(text).map_err(|e| {
        let summary = match e.classify() {
            Category::Syntax | Category::Eof => "response is not valid JSON",
            Category::Data => "response JSON does not match the expected content structure",
            Category::Io => "response could not be read",
        };
        tracing::error!(serde_error = %e, "Response text failed content validation");
        // serde's message can quote response values, so only the position is shown
        GenerationError::malformed(
            format!("{} (line {}, column {})", summary, e.line(), e.column()),
            text,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "titles": ["One", "Two", "Three"],
        "scriptOutline": "Intro:\n- Hook\nOutro:\n- Bye",
        "description": "About it.\n\n[Your Channel Link]",
        "tags": ["a", "b"]
    }"#;

    fn content(titles: &[&str], outline: &str, description: &str, tags: &[&str]) -> GeneratedContent {
        GeneratedContent {
            titles: titles.iter().map(|s| s.to_string()).collect(),
            script_outline: outline.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_valid_content() {
        let parsed = parse_generated_content(VALID).unwrap();
        assert_eq!(parsed.titles, vec!["One", "Two", "Three"]);
        assert_eq!(parsed.script_outline, "Intro:\n- Hook\nOutro:\n- Bye");
        assert!(parsed.description.contains("[Your Channel Link]"));
        assert_eq!(parsed.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_accepts_empty_arrays_and_extra_fields() {
        let parsed = parse_generated_content(
            r#"{"titles": [], "scriptOutline": "", "description": "", "tags": [], "thumbnail": "x"}"#,
        )
        .unwrap();
        assert!(parsed.titles.is_empty());
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn test_parse_does_not_enforce_cardinality() {
        let parsed = parse_generated_content(
            r#"{"titles": ["only one"], "scriptOutline": "s", "description": "d", "tags": ["t"]}"#,
        )
        .unwrap();
        assert_eq!(parsed.titles.len(), 1);
        assert_eq!(parsed.tags.len(), 1);
    }

    #[test]
    fn test_parse_invalid_syntax() {
        let err = parse_generated_content("{\"titles\": [").unwrap_err();
        match &err {
            GenerationError::MalformedResponse { reason, raw } => {
                assert!(reason.starts_with("response is not valid JSON"));
                assert_eq!(raw, "{\"titles\": [");
            }
            other => panic!("expected malformed response, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_typed_string_is_not_echoed() {
        let text = r#"{"titles": "ten secret vegan dinners", "scriptOutline": "s", "description": "d", "tags": []}"#;
        let err = parse_generated_content(text).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("does not match the expected content structure"));
        assert!(message.contains("line 1"));
        assert!(!message.contains("ten secret vegan dinners"));
        assert_eq!(err.raw_response(), Some(text));
    }

    #[test]
    fn test_parse_missing_tags() {
        let err = parse_generated_content(
            r#"{"titles": ["a"], "scriptOutline": "s", "description": "d"}"#,
        )
        .unwrap_err();
        match err {
            GenerationError::MalformedResponse { reason, .. } => {
                assert!(reason.contains("does not match the expected content structure"));
            }
            other => panic!("expected malformed response, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_types() {
        for text in [
            r#"{"titles": "a", "scriptOutline": "s", "description": "d", "tags": []}"#,
            r#"{"titles": [], "scriptOutline": ["s"], "description": "d", "tags": []}"#,
            r#"{"titles": [], "scriptOutline": "s", "description": null, "tags": []}"#,
            r#"{"titles": [], "scriptOutline": "s", "description": "d", "tags": {"a": 1}}"#,
            r#"["not", "an", "object"]"#,
        ] {
            assert!(
                matches!(
                    parse_generated_content(text),
                    Err(GenerationError::MalformedResponse { .. })
                ),
                "accepted malformed text: {}",
                text
            );
        }
    }

    #[test]
    fn test_sections_in_order() {
        let parsed = parse_generated_content(VALID).unwrap();
        let sections = parsed.sections();
        let headings: Vec<_> = sections.iter().map(|s| s.heading).collect();
        assert_eq!(
            headings,
            vec!["Suggested Titles", "Script Outline", "Video Description", "Tags"]
        );
        assert!(matches!(sections[0].body, SectionBody::List(items) if items.len() == 3));
        assert!(matches!(sections[1].body, SectionBody::Preformatted(text) if text.contains('\n')));
        assert!(matches!(sections[3].body, SectionBody::Badges(items) if items == ["a", "b"]));
    }

    #[test]
    fn test_sections_omit_empty_fields() {
        let sparse = content(&[], "Intro:\n- Hook", "", &["tag"]);
        let headings: Vec<_> = sparse.sections().iter().map(|s| s.heading).collect();
        assert_eq!(headings, vec!["Script Outline", "Tags"]);

        let empty = content(&[], "", "", &[]);
        assert!(empty.sections().is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(content(&["t"], "o", "d", &["x"])).unwrap();
        assert_eq!(value["scriptOutline"], "o");
        assert!(value.get("script_outline").is_none());
    }
}
