//! SVG optimization using usvg.
//!
//! Parses the icon, re-serializes it without indentation, and removes the
//! root `width`/`height` so the icon scales with its CSS box.

use anyhow::{Context, Result};

use super::{SvgError, SvgOptimizer};

/// Options for SVG optimization
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// DPI for unit conversion while parsing.
    pub dpi: f32,
    /// Keep root `width`/`height` attributes.
    pub keep_dimensions: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            dpi: 96.0,
            keep_dimensions: false,
        }
    }
}

/// [`SvgOptimizer`] backed by usvg.
#[derive(Debug, Clone, Default)]
pub struct UsvgOptimizer {
    options: OptimizeOptions,
}

impl SvgOptimizer for UsvgOptimizer {
    fn optimize(&self, svg: &str) -> Result<String, SvgError> {
        let optimized =
            optimize_svg(svg, &self.options).map_err(|e| SvgError::Parse(format!("{e:#}")))?;
        if optimized.is_empty() {
            return Err(SvgError::Empty);
        }
        Ok(optimized)
    }
}

/// Optimize SVG text using usvg.
pub fn optimize_svg(content: &str, options: &OptimizeOptions) -> Result<String> {
    let usvg_options = usvg::Options {
        dpi: options.dpi,
        ..Default::default()
    };

    let tree = usvg::Tree::from_str(content, &usvg_options).context("Failed to parse SVG")?;

    let write_options = usvg::WriteOptions {
        indent: usvg::Indent::None,
        ..Default::default()
    };

    let optimized = tree.to_string(&write_options);

    if options.keep_dimensions {
        Ok(optimized)
    } else {
        Ok(strip_dimensions(&optimized))
    }
}

/// Remove `width`/`height` from the root `<svg>` tag.
///
/// A `viewBox` is synthesized from the removed dimensions when the tag has
/// none, so the aspect ratio survives.
pub(crate) fn strip_dimensions(svg: &str) -> String {
    let Some(start) = svg.find("<svg") else {
        return svg.to_string();
    };
    let Some(len) = svg[start..].find('>') else {
        return svg.to_string();
    };
    let tag = &svg[start..start + len];

    let width = extract_attr(tag, " width=\"");
    let height = extract_attr(tag, " height=\"");

    let mut new_tag = remove_attr(&remove_attr(tag, " width=\""), " height=\"");
    if extract_attr(tag, " viewBox=\"").is_none()
        && let (Some(w), Some(h)) = (width, height)
    {
        new_tag.push_str(&format!(" viewBox=\"0 0 {w} {h}\""));
    }

    format!("{}{}{}", &svg[..start], new_tag, &svg[start + len..])
}

/// Extract attribute value between prefix and closing quote
#[inline]
fn extract_attr<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let start = s.find(prefix)? + prefix.len();
    let end = start + s.as_bytes()[start..].iter().position(|&b| b == b'"')?;
    Some(&s[start..end])
}

/// Remove one attribute (including its leading space) from a tag.
fn remove_attr(tag: &str, prefix: &str) -> String {
    let Some(start) = tag.find(prefix) else {
        return tag.to_string();
    };
    let value_start = start + prefix.len();
    match tag[value_start..].find('"') {
        Some(end) => format!("{}{}", &tag[..start], &tag[value_start + end + 1..]),
        None => tag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = r#"<?xml version="1.0"?>
<!-- comment -->
<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
    <path d="M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z"/>
</svg>"#;

    #[test]
    fn test_extract_attr() {
        let s = r#"<svg width="100" height="50" class="icon">"#;
        assert_eq!(extract_attr(s, " width=\""), Some("100"));
        assert_eq!(extract_attr(s, " height=\""), Some("50"));
        assert_eq!(extract_attr(s, " id=\""), None);
    }

    #[test]
    fn test_strip_dimensions_keeps_viewbox() {
        let svg = r#"<svg width="24" height="24" viewBox="0 0 24 24"><path stroke-width="2"/></svg>"#;
        assert_eq!(
            strip_dimensions(svg),
            r#"<svg viewBox="0 0 24 24"><path stroke-width="2"/></svg>"#
        );
    }

    #[test]
    fn test_strip_dimensions_synthesizes_viewbox() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="8"></svg>"#;
        assert_eq!(
            strip_dimensions(svg),
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 8"></svg>"#
        );
    }

    #[test]
    fn test_strip_dimensions_only_touches_root() {
        let svg = r#"<svg viewBox="0 0 4 4"><rect width="2" height="2"/></svg>"#;
        assert_eq!(strip_dimensions(svg), svg);
        assert_eq!(strip_dimensions("not svg"), "not svg");
    }

    #[test]
    fn test_optimize_removes_noise() {
        let optimized = optimize_svg(HOME, &OptimizeOptions::default()).unwrap();
        assert!(optimized.contains("<svg"));
        assert!(optimized.contains("viewBox"));
        assert!(!optimized.contains("comment"));
        assert!(!optimized.contains(" width=\""));
    }

    #[test]
    fn test_optimize_keep_dimensions() {
        let options = OptimizeOptions {
            keep_dimensions: true,
            ..Default::default()
        };
        let optimized = optimize_svg(HOME, &options).unwrap();
        assert!(optimized.contains(" width=\""));
    }

    #[test]
    fn test_optimizer_rejects_garbage() {
        let err = UsvgOptimizer::default().optimize("<html>nope</html>").unwrap_err();
        assert!(matches!(err, SvgError::Parse(_)));
        assert!(UsvgOptimizer::default().optimize("").is_err());
    }
}
