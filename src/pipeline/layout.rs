//! Output directory layout.
//!
//! ```text
//! <output>/
//! ├── embedded-icons/
//! │   ├── icons.css
//! │   └── index.html
//! └── referenced-icons/
//!     ├── icons.css
//!     ├── index.html
//!     └── icons/<file>.svg
//! ```

use std::path::{Path, PathBuf};

pub const EMBEDDED_DIR: &str = "embedded-icons";
pub const REFERENCED_DIR: &str = "referenced-icons";
pub const SVG_DIR: &str = "icons";
pub const STYLESHEET_FILE: &str = "icons.css";

/// Directories of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub embedded: PathBuf,
    pub referenced: PathBuf,
    /// Optimized SVG copies for the referenced stylesheet.
    pub svg_destination: PathBuf,
}

impl OutputLayout {
    pub fn new(root: &Path) -> Self {
        let referenced = root.join(REFERENCED_DIR);
        Self {
            embedded: root.join(EMBEDDED_DIR),
            svg_destination: referenced.join(SVG_DIR),
            referenced,
        }
    }

    pub fn embedded_css(&self) -> PathBuf {
        self.embedded.join(STYLESHEET_FILE)
    }

    pub fn referenced_css(&self) -> PathBuf {
        self.referenced.join(STYLESHEET_FILE)
    }

    pub fn svg_copy(&self, file_name: &str) -> PathBuf {
        self.svg_destination.join(file_name)
    }
}

/// Demo pages written by one build. `None` for a disabled mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoPaths {
    pub embedded: Option<PathBuf>,
    pub referenced: Option<PathBuf>,
}
