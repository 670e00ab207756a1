//! Pluralization for report lines.

/// `"s"` unless `n == 1`.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `plural_count(3, "SVG file")` -> `"3 SVG files"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "SVG file"), "0 SVG files");
        assert_eq!(plural_count(1, "SVG file"), "1 SVG file");
        assert_eq!(plural_count(12, "icon"), "12 icons");
    }
}
