// src/core/escape.rs

/// Escapes text the way it is stored inside `xl/sharedStrings.xml`.
///
/// Only `&`, `<` and `>` are rewritten. `&` goes first so the entities
/// produced for `<` and `>` are not escaped a second time.
///
/// # Arguments
///
/// * `text` - Plain text as typed by the user
///
/// # Returns
///
/// The escaped text, ready to be matched against raw shared-strings markup
#[inline]
#[must_use]
pub fn escape_xml_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
