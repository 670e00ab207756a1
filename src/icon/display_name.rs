//! Human-readable icon labels.

use super::class_name::strip_extension;

/// Label used when a filename has no alphanumeric characters.
pub const UNNAMED_LABEL: &str = "Unnamed Icon";

/// Format a filename as a title-cased label (`user_profile.svg` → `User Profile`).
///
/// Labels are not deduplicated; two icons may share one.
pub fn label_for(file_name: &str) -> String {
    let label = strip_extension(file_name)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if label.is_empty() {
        UNNAMED_LABEL.to_string()
    } else {
        label
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
