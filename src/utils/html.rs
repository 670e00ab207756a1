//! HTML entity escaping.

use std::borrow::Cow;

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text and attribute values.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape text placed inside an inline `<style>` element.
///
/// Only a closing tag can break out of raw text, so `</` is the one
/// sequence rewritten.
pub fn escape_style(css: &str) -> Cow<'_, str> {
    if css.contains("</") {
        Cow::Owned(css.replace("</", "<\\/"))
    } else {
        Cow::Borrowed(css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
        assert!(matches!(escape("home-icon"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_style() {
        assert!(matches!(escape_style(".a { b: c; }"), Cow::Borrowed(_)));
        assert_eq!(escape_style("url(\"</style>\")"), "url(\"<\\/style>\")");
    }
}
