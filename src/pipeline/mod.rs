//! Build pipeline: SVG directory in, stylesheets and demo pages out.
//!
//! # Phases
//!
//! ```text
//! DirectorySetup ─► Discovery ─► PerFileProcessing ─► [DemoGeneration] ─► Done
//!                                  │
//!                                  ├─ inspect   (rayon, read-only)
//!                                  └─ merge     (discovery order: names, rules, SVG copies)
//! ```
//!
//! Any phase may end the build with a [`PipelineError`]; per-icon problems
//! are collected as warnings instead.

mod error;
mod layout;
mod result;

pub use error::PipelineError;
pub use layout::{DemoPaths, OutputLayout};
pub use result::BuildResult;

use rayon::prelude::*;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::config::BuildConfig;
use crate::demo::{DEMO_FILE, DemoKind, DemoPage, render_demo};
use crate::icon::{IconOutcome, IconRecordBuilder, Inspection, StylesheetAssembler, referenced_path};
use crate::logger::ProgressLine;
use crate::svg::{DataUriEncoder, MiniDataUri, SvgOptimizer, UsvgOptimizer};
use crate::utils::minify::maybe_minify;
use crate::debug;

/// Pipeline phase, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    Init,
    DirectorySetup,
    Discovery,
    PerFileProcessing,
    DemoGeneration,
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::DirectorySetup => "directory setup",
            Self::Discovery => "discovery",
            Self::PerFileProcessing => "per-file processing",
            Self::DemoGeneration => "demo generation",
        };
        f.write_str(name)
    }
}

/// One build over one input directory.
///
/// Owns the name registry and both stylesheets, so two pipelines never
/// share naming state.
pub struct BuildPipeline {
    config: BuildConfig,
    builder: IconRecordBuilder,
    stylesheets: StylesheetAssembler,
    phase: BuildPhase,
    quiet: bool,
}

impl BuildPipeline {
    /// Pipeline with the usvg optimizer and the compact data URI encoder.
    pub fn new(config: &BuildConfig) -> Self {
        Self::with_collaborators(
            config,
            Box::new(UsvgOptimizer::default()),
            Box::new(MiniDataUri),
        )
    }

    pub fn with_collaborators(
        config: &BuildConfig,
        optimizer: Box<dyn SvgOptimizer>,
        encoder: Box<dyn DataUriEncoder>,
    ) -> Self {
        Self {
            builder: IconRecordBuilder::new(
                optimizer,
                encoder,
                config.prefix.as_str(),
                config.postfix.as_str(),
            ),
            stylesheets: StylesheetAssembler::new(&config.prefix, &config.postfix),
            config: config.clone(),
            phase: BuildPhase::Init,
            quiet: false,
        }
    }

    /// Hide the progress line.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run every phase. Never panics on bad input; check `success`.
    pub fn process(mut self) -> BuildResult {
        let mut result = BuildResult::default();

        match self.run(&mut result) {
            Ok(()) => result.success = true,
            Err(e) => {
                debug!("pipeline"; "failed during {}", self.phase);
                result.error = Some(e.chain());
            }
        }

        // Stylesheets reflect whatever was accepted, even after a failure.
        if result.embedded_css.is_empty() {
            result.embedded_css = self.stylesheets.embedded_css();
            result.referenced_css = self.stylesheets.referenced_css();
        }
        result
    }

    fn run(&mut self, result: &mut BuildResult) -> Result<(), PipelineError> {
        let layout = self.setup_directories()?;
        result.directories = Some(layout.clone());

        let files = self.discover()?;
        self.process_icons(&files, &layout, result)?;
        self.write_stylesheets(&layout, result)?;

        if self.config.demo {
            result.demo_paths = Some(self.generate_demos(&layout, result)?);
        }
        Ok(())
    }

    fn enter(&mut self, phase: BuildPhase) {
        self.phase = phase;
        debug!("pipeline"; "{}", phase);
    }

    /// Create the output directories of every enabled mode.
    fn setup_directories(&mut self) -> Result<OutputLayout, PipelineError> {
        self.enter(BuildPhase::DirectorySetup);
        let layout = OutputLayout::new(&self.config.output);

        let mut dirs = Vec::new();
        if self.config.embedded {
            dirs.push(&layout.embedded);
        }
        if self.config.referenced {
            dirs.push(&layout.svg_destination);
        }
        for dir in dirs {
            fs::create_dir_all(dir).map_err(|source| PipelineError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(layout)
    }

    /// List `.svg` files in the input directory, sorted by file name.
    ///
    /// An empty directory is fatal; a directory with only other files is not.
    fn discover(&mut self) -> Result<Vec<PathBuf>, PipelineError> {
        self.enter(BuildPhase::Discovery);
        let input = &self.config.input;

        let read_dir_error = |source| PipelineError::ReadDir {
            path: input.clone(),
            source,
        };
        let entries = fs::read_dir(input)
            .map_err(read_dir_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_dir_error)?;

        if entries.is_empty() {
            return Err(PipelineError::NoInputFiles);
        }

        let mut files: Vec<PathBuf> = entries
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_svg_extension(path))
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        debug!("pipeline"; "found {} SVG files in {}", files.len(), input.display());
        Ok(files)
    }

    /// Inspect in parallel, then merge in discovery order.
    fn process_icons(
        &mut self,
        files: &[PathBuf],
        layout: &OutputLayout,
        result: &mut BuildResult,
    ) -> Result<(), PipelineError> {
        self.enter(BuildPhase::PerFileProcessing);

        let progress = (!self.quiet && !files.is_empty()).then(|| ProgressLine::new(&[("icons", files.len())]));
        let builder = &self.builder;
        let inspections: Vec<Result<Inspection, PipelineError>> = files
            .par_iter()
            .map(|path| {
                let inspection = builder.inspect(path);
                if let Some(progress) = &progress {
                    progress.inc("icons");
                }
                inspection
            })
            .collect();
        if let Some(progress) = progress {
            progress.finish();
        }

        for inspection in inspections {
            match self.builder.accept(inspection?) {
                IconOutcome::Accepted(icon) => {
                    let relative = referenced_path(&icon.record.file_name);
                    if self.config.referenced {
                        write_file(&layout.svg_copy(&icon.record.file_name), &icon.svg)?;
                    }
                    self.stylesheets.push(&icon.record, &icon.data_uri, &relative);
                    result.records.push(icon.record);
                }
                IconOutcome::Rejected { file_name, reason } => {
                    debug!("pipeline"; "rejected {}", file_name);
                    result.warnings.push(reason);
                }
            }
        }

        Ok(())
    }

    /// Assemble both stylesheets and write those of enabled modes.
    fn write_stylesheets(
        &mut self,
        layout: &OutputLayout,
        result: &mut BuildResult,
    ) -> Result<(), PipelineError> {
        let minify = self.config.minify;
        result.embedded_css = maybe_minify(self.stylesheets.embedded_css(), minify);
        result.referenced_css = maybe_minify(self.stylesheets.referenced_css(), minify);

        if self.config.embedded {
            write_file(&layout.embedded_css(), &result.embedded_css)?;
        }
        if self.config.referenced {
            write_file(&layout.referenced_css(), &result.referenced_css)?;
        }
        Ok(())
    }

    fn generate_demos(
        &mut self,
        layout: &OutputLayout,
        result: &BuildResult,
    ) -> Result<DemoPaths, PipelineError> {
        self.enter(BuildPhase::DemoGeneration);
        let selector = self.stylesheets.selector();
        let mut paths = DemoPaths::default();

        let pages = [
            (
                self.config.embedded,
                DemoKind::Embedded,
                &layout.embedded,
                &result.embedded_css,
                &mut paths.embedded,
            ),
            (
                self.config.referenced,
                DemoKind::Referenced,
                &layout.referenced,
                &result.referenced_css,
                &mut paths.referenced,
            ),
        ];
        for (enabled, kind, output_dir, stylesheet, slot) in pages {
            if !enabled {
                continue;
            }
            let html = render_demo(&DemoPage {
                kind,
                records: &result.records,
                stylesheet,
                selector: &selector,
                source_dir: &self.config.input,
                output_dir,
            });

            let path = output_dir.join(DEMO_FILE);
            write_file(&path, &html)?;
            debug!("demo"; "wrote {}", path.display());
            *slot = Some(path);
        }

        Ok(paths)
    }
}

/// `true` for `name.svg` in any case, including a bare `.svg`.
///
/// Matches on raw bytes so non-UTF-8 names are still discovered.
fn has_svg_extension(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let bytes = name.as_encoded_bytes();
        bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".svg")
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), PipelineError> {
    fs::write(path, content).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}
