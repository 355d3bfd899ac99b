//! HTML escaping for table strings.
//!
//! Every string from the content tables passes through here before landing
//! in the document, including the code sample, which is displayed verbatim
//! inside `<pre><code>`.

/// Escape text for an HTML element body.
///
/// Replaces `&`, `<`, and `>`. Quotes are harmless in text context and are
/// left alone so the prose reads naturally in the page source.
#[must_use]
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for a double-quoted HTML attribute value.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
