//! Fatal build errors.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that abort a build.
///
/// Per-icon problems are not errors; they become warnings on the result.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Cannot create directory `{}`", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read input directory `{}`", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No SVG files found in the input directory.")]
    NoInputFiles,

    #[error("Cannot read `{}`", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Render with the full source chain, e.g. `Cannot read `a.svg`: denied`.
    pub fn chain(self) -> String {
        format!("{:#}", anyhow::Error::from(self))
    }
}
