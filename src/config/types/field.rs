//! Config field path.

use owo_colors::{Stream, Style};
use std::fmt;

use crate::logger::paint;

/// Name of a configurable setting, as written in the config file and on the
/// command line.
///
/// # Example
///
/// ```ignore
/// diag.error(FieldPath::PREFIX, "prefix must be a valid CSS identifier");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    pub const INPUT: Self = Self("input");
    pub const OUTPUT: Self = Self("output");
    pub const PREFIX: Self = Self("prefix");
    pub const POSTFIX: Self = Self("postfix");
    pub const MODES: Self = Self("embedded/referenced");

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("`{}`", self.0);
        write!(f, "{}", paint(name, Style::new().bright_blue(), Stream::Stderr))
    }
}
