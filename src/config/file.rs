//! Optional `svgs-to-icons.toml` config file.
//!
//! # Example
//!
//! ```toml
//! output = "./public"   # parent directory; the input folder name is appended
//! prefix = "ui"
//! postfix = "icon"
//! embedded = true
//! referenced = true
//! demo = false
//! minify = false
//! ```
//!
//! Every key is optional. A missing file is the same as an empty one.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::ConfigError;
use crate::log;

/// Default config file name, looked up relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "svgs-to-icons.toml";

/// Settings read from the config file. `None` means "not set here".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub output: Option<PathBuf>,
    pub prefix: Option<String>,
    pub postfix: Option<String>,
    pub embedded: Option<bool>,
    pub referenced: Option<bool>,
    pub demo: Option<bool>,
    pub minify: Option<bool>,
}

impl FileConfig {
    /// Load the config file if it exists.
    ///
    /// Read and parse failures are reported and the file is ignored, so a
    /// broken config never blocks a build that passes everything on the CLI.
    pub fn load(path: &Path) -> Self {
        if !path.is_file() {
            return Self::default();
        }

        match Self::from_path(path) {
            Ok((config, ignored)) => {
                if !ignored.is_empty() {
                    Self::print_unknown_fields_warning(&ignored, path);
                }
                config
            }
            Err(e) => {
                log!("warning"; "could not load config file {}: {:#}", path.display(), anyhow::Error::from(e));
                Self::default()
            }
        }
    }

    fn from_path(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse_with_ignored(&content)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }
}
