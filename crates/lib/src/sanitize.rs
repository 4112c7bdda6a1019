//! # Response Sanitizer
//!
//! Models frequently wrap HTML in markdown code fences even when told not to.
//! This is a literal substring strip, not an HTML parser: malformed markup and
//! partial fences are passed through untouched.

const HTML_FENCE: &str = "```html";
const FENCE: &str = "```";

/// Removes every "```html" and "```" from the model output and trims the result.
pub fn strip_code_fences(raw: &str) -> String {
    raw.trim()
        .replace(HTML_FENCE, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}
