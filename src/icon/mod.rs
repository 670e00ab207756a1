//! Icon naming, per-file processing and stylesheet assembly.
//!
//! # Modules
//!
//! - [`class_name`]: filename → unique CSS class name (per-run registry)
//! - [`display_name`]: filename → human-readable label
//! - [`record`]: per-file inspect/accept stages producing [`IconOutcome`]
//! - [`stylesheet`]: embedded and referenced `icons.css` accumulation

pub mod class_name;
pub mod display_name;
pub mod record;
pub mod stylesheet;

pub use class_name::ClassNameGenerator;
pub use record::{IconOutcome, IconRecord, IconRecordBuilder, Inspection};
pub use stylesheet::{StylesheetAssembler, referenced_path};

use regex::Regex;
use std::sync::LazyLock;

static CSS_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("valid regex"));

/// Check that `name` can be used as a CSS class selector without escaping.
pub fn is_css_identifier(name: &str) -> bool {
    CSS_IDENTIFIER.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_identifier() {
        for valid in ["home", "_home", "ui-home-icon", "A9", "i123"] {
            assert!(is_css_identifier(valid), "{valid}");
        }
        for invalid in ["", "123", "-home", "home icon", "hé", "a.b"] {
            assert!(!is_css_identifier(invalid), "{invalid}");
        }
    }
}
