//! Per-file icon processing.
//!
//! Each discovered file goes through two stages:
//!
//! ```text
//! inspect (&self, parallel-safe)          accept (&mut self, discovery order)
//! ────────────────────────────────        ────────────────────────────────────
//! read ─► optimize ─► <svg gate ─► encode ─► class name ─► IconOutcome
//! ```
//!
//! Only the read can fail the build. Every content problem becomes an
//! [`Inspection::Rejected`] that surfaces as a warning.

use std::{fs, path::Path};

use super::{ClassNameGenerator, display_name::label_for, is_css_identifier};
use crate::pipeline::PipelineError;
use crate::svg::{DATA_URI_PREFIX, DataUriEncoder, SvgOptimizer};

/// Metadata for one generated icon class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    /// CSS class name including prefix/postfix (e.g. `home-icon`).
    pub class_name: String,
    /// Human-readable label (e.g. `Home`).
    pub display_name: String,
    /// Source filename (e.g. `home.svg`).
    pub file_name: String,
}

/// Result of the read-only stage for one file.
#[derive(Debug, Clone)]
pub enum Inspection {
    Ready {
        file_name: String,
        svg: String,
        data_uri: String,
    },
    Rejected {
        file_name: String,
        reason: String,
    },
}

/// An icon that made it into the stylesheets.
#[derive(Debug, Clone)]
pub struct AcceptedIcon {
    pub record: IconRecord,
    /// Optimized SVG, written to the referenced icon directory.
    pub svg: String,
    /// Data URI used by the embedded stylesheet.
    pub data_uri: String,
}

/// Final per-file outcome.
#[derive(Debug, Clone)]
pub enum IconOutcome {
    Accepted(AcceptedIcon),
    Rejected { file_name: String, reason: String },
}

impl IconOutcome {
    #[cfg(test)]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Builds [`IconRecord`]s from SVG files.
pub struct IconRecordBuilder {
    optimizer: Box<dyn SvgOptimizer>,
    encoder: Box<dyn DataUriEncoder>,
    prefix: String,
    postfix: String,
    class_names: ClassNameGenerator,
}

impl IconRecordBuilder {
    pub fn new(
        optimizer: Box<dyn SvgOptimizer>,
        encoder: Box<dyn DataUriEncoder>,
        prefix: impl Into<String>,
        postfix: impl Into<String>,
    ) -> Self {
        Self {
            optimizer,
            encoder,
            prefix: prefix.into(),
            postfix: postfix.into(),
            class_names: ClassNameGenerator::new(),
        }
    }

    /// Process one file start to finish.
    #[cfg(test)]
    pub fn build(&mut self, path: &Path) -> Result<IconOutcome, PipelineError> {
        let inspection = self.inspect(path)?;
        Ok(self.accept(inspection))
    }

    /// Read, optimize, gate and encode one file.
    ///
    /// Does not touch the name registry, so it is safe to call from many
    /// threads at once.
    pub fn inspect(&self, path: &Path) -> Result<Inspection, PipelineError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let bytes = fs::read(path).map_err(|source| PipelineError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        Ok(self.inspect_content(file_name, &content))
    }

    fn inspect_content(&self, file_name: String, content: &str) -> Inspection {
        let svg = match self.optimizer.optimize(content) {
            Ok(svg) => svg,
            Err(e) => {
                return Inspection::Rejected {
                    reason: format!("Skipping {file_name}. SVG optimization failed: {e}"),
                    file_name,
                };
            }
        };

        if svg.is_empty() || !svg.contains("<svg") {
            return Inspection::Rejected {
                reason: format!("Skipping {file_name}: malformed or empty SVG."),
                file_name,
            };
        }

        let data_uri = self.encoder.encode(&svg);
        if !data_uri.starts_with(DATA_URI_PREFIX) {
            return Inspection::Rejected {
                reason: format!("Invalid SVG data URI for {file_name}"),
                file_name,
            };
        }

        Inspection::Ready {
            file_name,
            svg,
            data_uri,
        }
    }

    /// Assign names to an inspected file.
    ///
    /// Must be called in discovery order: suffixes depend on it.
    pub fn accept(&mut self, inspection: Inspection) -> IconOutcome {
        let (file_name, svg, data_uri) = match inspection {
            Inspection::Ready {
                file_name,
                svg,
                data_uri,
            } => (file_name, svg, data_uri),
            Inspection::Rejected { file_name, reason } => {
                return IconOutcome::Rejected { file_name, reason };
            }
        };

        let class_name = format!(
            "{}{}{}",
            self.prefix,
            self.class_names.name_for(&file_name),
            self.postfix
        );
        if !is_css_identifier(&class_name) {
            return IconOutcome::Rejected {
                reason: format!(
                    "Skipping {file_name}: generated class name `{class_name}` is not a valid CSS identifier."
                ),
                file_name,
            };
        }

        IconOutcome::Accepted(AcceptedIcon {
            record: IconRecord {
                class_name,
                display_name: label_for(&file_name),
                file_name,
            },
            svg,
            data_uri,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::svg::SvgError;
    use tempfile::TempDir;

    /// Optimizer returning its input, failing on a marker, emptying on another.
    pub struct FakeOptimizer;

    impl SvgOptimizer for FakeOptimizer {
        fn optimize(&self, svg: &str) -> Result<String, SvgError> {
            if svg.contains("FAIL") {
                Err(SvgError::Parse("unexpected token".into()))
            } else if svg.contains("EMPTY") {
                Ok(String::new())
            } else {
                Ok(svg.trim().to_string())
            }
        }
    }

    /// Encoder with a predictable output, or a broken one.
    pub struct FakeEncoder {
        pub broken: bool,
    }

    impl DataUriEncoder for FakeEncoder {
        fn encode(&self, svg: &str) -> String {
            if self.broken {
                format!("data:text/plain,{svg}")
            } else {
                format!("{DATA_URI_PREFIX}{}", svg.len())
            }
        }
    }

    fn builder(prefix: &str, postfix: &str) -> IconRecordBuilder {
        IconRecordBuilder::new(
            Box::new(FakeOptimizer),
            Box::new(FakeEncoder { broken: false }),
            prefix,
            postfix,
        )
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_build_accepts_valid_svg() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "arrow_left.svg", "<svg><path/></svg>");

        let outcome = builder("ui-", "-icon").build(&path).unwrap();
        let IconOutcome::Accepted(icon) = outcome else {
            panic!("expected accepted icon");
        };
        assert_eq!(icon.record.class_name, "ui-arrow_left-icon");
        assert_eq!(icon.record.display_name, "Arrow Left");
        assert_eq!(icon.record.file_name, "arrow_left.svg");
        assert_eq!(icon.svg, "<svg><path/></svg>");
        assert_eq!(icon.data_uri, "data:image/svg+xml,18");
    }

    #[test]
    fn test_build_rejects_optimizer_failure() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.svg", "<svg>FAIL</svg>");

        match builder("", "").build(&path).unwrap() {
            IconOutcome::Rejected { file_name, reason } => {
                assert_eq!(file_name, "bad.svg");
                assert_eq!(
                    reason,
                    "Skipping bad.svg. SVG optimization failed: unexpected token"
                );
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_missing_svg_root() {
        let dir = TempDir::new().unwrap();
        let not_svg = write(&dir, "page.svg", "<html></html>");
        let empty = write(&dir, "empty.svg", "<svg>EMPTY</svg>");

        let mut builder = builder("", "");
        for (path, name) in [(not_svg, "page.svg"), (empty, "empty.svg")] {
            match builder.build(&path).unwrap() {
                IconOutcome::Rejected { reason, .. } => {
                    assert_eq!(reason, format!("Skipping {name}: malformed or empty SVG."));
                }
                other => panic!("unexpected outcome: {other:?}"),
            }
        }
    }

    #[test]
    fn test_build_rejects_invalid_data_uri() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "home.svg", "<svg/>");
        let mut builder = IconRecordBuilder::new(
            Box::new(FakeOptimizer),
            Box::new(FakeEncoder { broken: true }),
            "",
            "",
        );

        match builder.build(&path).unwrap() {
            IconOutcome::Rejected { reason, .. } => {
                assert_eq!(reason, "Invalid SVG data URI for home.svg");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_invalid_class_name() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "home.svg", "<svg/>");

        let outcome = builder("9 ", "").build(&path).unwrap();
        assert!(!outcome.is_accepted());
    }

    #[test]
    fn test_build_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = builder("", "")
            .build(&dir.path().join("missing.svg"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::ReadFile { .. }));
    }

    #[test]
    fn test_rejected_files_do_not_consume_names() {
        let dir = TempDir::new().unwrap();
        let broken = write(&dir, "Home.svg", "<svg>FAIL</svg>");
        let good = write(&dir, "home.svg", "<svg/>");

        let mut builder = builder("", "");
        assert!(!builder.build(&broken).unwrap().is_accepted());
        let IconOutcome::Accepted(icon) = builder.build(&good).unwrap() else {
            panic!("expected accepted icon");
        };
        assert_eq!(icon.record.class_name, "home");
    }

    #[test]
    fn test_inspect_then_accept_in_order() {
        let dir = TempDir::new().unwrap();
        let paths: Vec<_> = ["home.svg", "HOME.svg", "Home@.svg"]
            .iter()
            .map(|name| write(&dir, name, "<svg/>"))
            .collect();

        let mut builder = builder("", "");
        let inspections: Vec<_> = paths.iter().map(|p| builder.inspect(p).unwrap()).collect();
        let names: Vec<_> = inspections
            .into_iter()
            .map(|i| match builder.accept(i) {
                IconOutcome::Accepted(icon) => icon.record.class_name,
                IconOutcome::Rejected { reason, .. } => panic!("{reason}"),
            })
            .collect();
        assert_eq!(names, ["home", "home-1", "home-2"]);
    }
}
