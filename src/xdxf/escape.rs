//! XML escaping for element text and attribute values.
//!
//! The parser stores field values raw; this is the single point in the
//! pipeline where markup characters are escaped.

use std::borrow::Cow;

/// Characters that must be escaped in element text or attribute content.
const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escape the five XML special characters.
///
/// Returns the input unchanged (no allocation) when nothing needs
/// escaping, which is the common case for dictionary text.
///
/// # Examples
/// ```
/// use dictcc_xdxf::xdxf::escape_xml;
///
/// assert_eq!(escape_xml("Miau & Wow"), "Miau &amp; Wow");
/// assert_eq!(escape_xml("plain"), "plain");
/// ```
#[must_use]
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(SPECIAL) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
