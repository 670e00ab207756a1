//! CSS class name generation with per-run collision tracking.
//!
//! Filenames are sanitized into CSS-legal identifiers, then suffixed with
//! `-1`, `-2`, ... when a sanitized name has already been handed out during
//! the current build:
//!
//! ```text
//! home.svg   → home
//! HOME.svg   → home-1
//! Home@.svg  → home-2
//! 123.svg    → i123
//! @#$.svg    → unnamed
//! ```

use std::collections::{HashMap, HashSet};

/// Base name used when a filename sanitizes to nothing.
pub const UNNAMED: &str = "unnamed";

/// Strip the final extension from a filename.
///
/// Only a non-empty extension is removed, so `home.` keeps its dot while
/// `.svg` becomes the empty string.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => &file_name[..dot],
        _ => file_name,
    }
}

/// Sanitize a filename into a CSS identifier, without collision handling.
pub fn sanitize(file_name: &str) -> String {
    let stem = strip_extension(file_name);
    if stem.trim().is_empty() {
        return UNNAMED.to_string();
    }

    let mut name = String::with_capacity(stem.len());
    for c in stem.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            c.to_ascii_lowercase()
        } else {
            '-'
        };
        // Collapse runs and drop leading hyphens in one pass
        if c == '-' && (name.is_empty() || name.ends_with('-')) {
            continue;
        }
        name.push(c);
    }
    while name.ends_with('-') {
        name.pop();
    }

    if name.is_empty() || name == "_" {
        return UNNAMED.to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, 'i');
    }
    name
}

/// Hands out unique class names for one build.
///
/// The registry maps each sanitized base name to how many times it has been
/// issued. It lives exactly as long as the generator, so separate builds never
/// share suffix state.
#[derive(Debug, Default)]
pub struct ClassNameGenerator {
    registry: HashMap<String, usize>,
    /// Every name returned so far, to catch `a-1.svg` arriving after `a.svg` twice.
    issued: HashSet<String>,
}

impl ClassNameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next unique class name for `file_name`.
    ///
    /// Counting happens on the sanitized key, so `home.svg` and `HOME.svg`
    /// collide and are suffixed in call order.
    ///
    /// A literal name that is already taken (e.g. `a-1.svg` after `a.svg`
    /// and `A.svg`) skips ahead to the next free suffix.
    pub fn name_for(&mut self, file_name: &str) -> String {
        let base = sanitize(file_name);
        let count = self.registry.entry(base.clone()).or_insert(0);

        loop {
            *count += 1;
            let candidate = match *count {
                1 => base.clone(),
                n => format!("{base}-{}", n - 1),
            };
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Number of times `base` has been issued so far.
    #[cfg(test)]
    pub fn occurrences(&self, base: &str) -> usize {
        self.registry.get(base).copied().unwrap_or(0)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(files: &[&str]) -> Vec<String> {
        let mut generator = ClassNameGenerator::new();
        files.iter().map(|f| generator.name_for(f)).collect()
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("home.svg"), "home");
        assert_eq!(strip_extension("icon.file.svg"), "icon.file");
        assert_eq!(strip_extension("home"), "home");
        assert_eq!(strip_extension(".svg"), "");
        assert_eq!(strip_extension("home."), "home.");
    }

    #[test]
    fn test_sanitize_basic() {
        assert_eq!(sanitize("home.svg"), "home");
        assert_eq!(sanitize("user-profile.svg"), "user-profile");
        assert_eq!(sanitize("icon.file.svg"), "icon-file");
        assert_eq!(sanitize("UserIcon.svg"), "usericon");
    }

    #[test]
    fn test_sanitize_special_characters() {
        assert_eq!(sanitize("user@home.svg"), "user-home");
        assert_eq!(sanitize("icon with spaces.svg"), "icon-with-spaces");
        assert_eq!(sanitize("my_icon!.svg"), "my_icon");
        assert_eq!(sanitize("café.svg"), "caf");
        assert_eq!(sanitize("my_icon-home.svg"), "my_icon-home");
    }

    #[test]
    fn test_sanitize_hyphen_runs() {
        assert_eq!(sanitize("-home.svg"), "home");
        assert_eq!(sanitize("---user.svg"), "user");
        assert_eq!(sanitize("home-.svg"), "home");
        assert_eq!(sanitize("user---.svg"), "user");
        assert_eq!(sanitize("user---home.svg"), "user-home");
        assert_eq!(sanitize("icon--with--dashes.svg"), "icon-with-dashes");
    }

    #[test]
    fn test_sanitize_digit_prefix() {
        assert_eq!(sanitize("123.svg"), "i123");
        assert_eq!(sanitize("9home.svg"), "i9home");
        assert_eq!(sanitize("-9home.svg"), "i9home");
    }

    #[test]
    fn test_sanitize_unnamed() {
        for input in ["", ".svg", "   .svg", "-.svg", "_.svg", "@#$.svg", "!!!.svg"] {
            assert_eq!(sanitize(input), UNNAMED, "input: {input:?}");
        }
        // Underscores survive when mixed with other characters
        assert_eq!(sanitize("__.svg"), "__");
    }

    #[test]
    fn test_collision_suffixes() {
        assert_eq!(
            names(&["home.svg", "HOME.svg", "Home@.svg", "user.svg", "USER.svg"]),
            ["home", "home-1", "home-2", "user", "user-1"]
        );
    }

    #[test]
    fn test_unnamed_collisions() {
        assert_eq!(
            names(&[".svg", "@#$.svg", "-.svg"]),
            ["unnamed", "unnamed-1", "unnamed-2"]
        );
        assert_eq!(
            names(&["", ".svg", "   .svg"]),
            ["unnamed", "unnamed-1", "unnamed-2"]
        );
    }

    #[test]
    fn test_registry_is_per_generator() {
        let mut first = ClassNameGenerator::new();
        let mut second = ClassNameGenerator::new();
        assert_eq!(first.name_for("home.svg"), "home");
        assert_eq!(first.name_for("home.svg"), "home-1");
        assert_eq!(second.name_for("home.svg"), "home");
        assert_eq!(first.occurrences("home"), 2);
        assert_eq!(second.occurrences("home"), 1);
        assert_eq!(second.occurrences("missing"), 0);
    }

    #[test]
    fn test_literal_suffix_clash() {
        assert_eq!(
            names(&["a.svg", "A.svg", "a-1.svg", "a.svg", "a-1.svg"]),
            ["a", "a-1", "a-1-1", "a-2", "a-1-2"]
        );
        // `a-1` is taken literally, so the next `a` skips to `-2`.
        assert_eq!(names(&["A.svg", "a-1.svg", "a.svg"]), ["a", "a-1", "a-2"]);
    }

    #[test]
    fn test_names_are_unique() {
        let files = ["a.svg", "A.svg", "a-1.svg", "a.svg", "a!.svg", "a-2.svg", "A-1.svg"];
        let result = names(&files);
        let mut deduped = result.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), result.len(), "{result:?}");
    }
}
