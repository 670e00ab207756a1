//! Build outcome.

use super::{DemoPaths, OutputLayout};
use crate::icon::IconRecord;

/// Everything a build produced, or why it stopped.
///
/// On failure, fields filled before the error are kept; nothing written to
/// disk is rolled back.
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    pub success: bool,
    /// One entry per skipped file, in discovery order.
    pub warnings: Vec<String>,
    /// Accepted icons, in discovery order.
    pub records: Vec<IconRecord>,
    pub embedded_css: String,
    pub referenced_css: String,
    pub error: Option<String>,
    pub directories: Option<OutputLayout>,
    pub demo_paths: Option<DemoPaths>,
}

impl BuildResult {
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.class_name.as_str())
    }
}
