//! Stylesheet minification.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

/// Minify CSS source code, or `None` if lightningcss rejects it.
pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}

/// Minified CSS when `enabled` and parsing succeeds, the input otherwise.
pub fn maybe_minify(source: String, enabled: bool) -> String {
    if !enabled {
        return source;
    }
    minify_css(&source).unwrap_or(source)
}
