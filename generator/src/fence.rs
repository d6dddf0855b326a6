//! Markdown code-fence stripping
//!
//! Models sometimes wrap JSON in a fenced block even when told not to.
//! This is a pre-parse normalization step: at most one outer fence is
//! removed, together with an optional language tag on the opening line.

const FENCE: &str = "```";

/// Remove one surrounding code fence from `text`, if present
///
/// The input is trimmed first. If it starts and ends with a triple-backtick
/// fence, the fences and an optional language tag (`json`, `JSON`, ...) are
/// dropped and the inner content is returned trimmed. If the text is not
/// fenced, or the fence encloses nothing, the trimmed input is returned.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(body) = trimmed
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
    else {
        return trimmed;
    };

    let inner = skip_language_tag(body).trim();
    if inner.is_empty() {
        trimmed
    } else {
        inner
    }
}

/// Skip a language tag directly after the opening fence
///
/// A tag is the run of ASCII word characters right after the fence, whether
/// a line break follows it or the body starts immediately (`json{...}`).
/// JSON bodies never start with a word character, so nothing is lost.
fn skip_language_tag(body: &str) -> &str {
    let tag_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(body.len());
    &body[tag_len..]
}
