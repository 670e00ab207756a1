//! Build configuration for `svgs-to-icons`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── file.rs        # Optional svgs-to-icons.toml
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # BuildConfig (this file)
//! ```
//!
//! # Precedence
//!
//! Built-in defaults, then the config file, then command-line flags. The
//! merged settings are validated once, and every problem found is reported
//! together.

mod file;
mod types;

pub use file::{CONFIG_FILE_NAME, FileConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug, icon::is_css_identifier, utils::path::normalize_path};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Parent output directory used when none is configured.
pub const DEFAULT_OUTPUT: &str = "./dist";

/// Class-name postfix used when none is configured.
pub const DEFAULT_POSTFIX: &str = "-icon";

// ============================================================================
// resolved configuration
// ============================================================================

/// Fully resolved, validated settings for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Absolute input directory.
    pub input: PathBuf,
    /// Absolute output root: `<output parent>/<input folder name>`.
    pub output: PathBuf,
    /// Empty, or ends with `-`.
    pub prefix: String,
    /// Empty, or starts with `-`.
    pub postfix: String,
    pub embedded: bool,
    pub referenced: bool,
    pub demo: bool,
    pub minify: bool,
}

impl BuildConfig {
    /// Load configuration from CLI arguments and the config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = cwd.join(&cli.config);
        debug!("config"; "reading {}", config_path.display());

        let file = FileConfig::load(&config_path);
        Ok(Self::resolve(cli, &file)?)
    }

    /// Merge defaults, file and CLI settings, then validate.
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();
        settings.apply_file(file);
        settings.apply_cli(cli);
        settings.validate().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// raw merged settings
// ============================================================================

#[derive(Debug, Clone)]
struct Settings {
    input: Option<PathBuf>,
    output: PathBuf,
    prefix: String,
    postfix: String,
    embedded: bool,
    referenced: bool,
    demo: bool,
    minify: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            prefix: String::new(),
            postfix: DEFAULT_POSTFIX.to_string(),
            embedded: true,
            referenced: true,
            demo: true,
            minify: false,
        }
    }
}

impl Settings {
    fn apply_file(&mut self, file: &FileConfig) {
        Self::update_option(&mut self.output, file.output.as_ref());
        Self::update_option(&mut self.prefix, file.prefix.as_ref());
        Self::update_option(&mut self.postfix, file.postfix.as_ref());
        Self::update_option(&mut self.embedded, file.embedded.as_ref());
        Self::update_option(&mut self.referenced, file.referenced.as_ref());
        Self::update_option(&mut self.demo, file.demo.as_ref());
        Self::update_option(&mut self.minify, file.minify.as_ref());
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if cli.input.is_some() {
            self.input.clone_from(&cli.input);
        }
        Self::update_option(&mut self.output, cli.output.as_ref());
        Self::update_option(&mut self.prefix, cli.prefix.as_ref());
        Self::update_option(&mut self.postfix, cli.postfix.as_ref());
        Self::update_option(&mut self.embedded, cli.embedded.as_ref());
        Self::update_option(&mut self.referenced, cli.referenced.as_ref());
        Self::update_option(&mut self.demo, cli.demo.as_ref());
        Self::update_option(&mut self.minify, cli.minify.as_ref());
    }

    /// Update config option if a value is provided.
    fn update_option<T: Clone>(config_option: &mut T, option: Option<&T>) {
        if let Some(option) = option {
            *config_option = option.clone();
        }
    }

    /// Validate and normalize.
    ///
    /// Input problems are reported alone since the output path depends on
    /// the input folder name.
    fn validate(self) -> Result<BuildConfig, ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();

        let Some(input) = Self::check_input(self.input.as_deref(), &mut diag) else {
            return Err(diag);
        };

        let output = Self::output_root(&input, &self.output);
        Self::check_output(&output, &mut diag);

        if !self.embedded && !self.referenced {
            diag.error_with_hint(
                FieldPath::MODES,
                "At least one output type must be enabled (embedded or referenced)",
                "pass --embedded or --referenced",
            );
        }

        if !self.prefix.is_empty() && !is_css_identifier(&self.prefix) {
            diag.error(FieldPath::PREFIX, "prefix must be a valid CSS identifier");
        }
        let bare_postfix = self.postfix.strip_prefix('-').unwrap_or(&self.postfix);
        if !self.postfix.is_empty() && !is_css_identifier(bare_postfix) {
            diag.error(FieldPath::POSTFIX, "postfix must be a valid CSS identifier");
        }

        diag.into_result()?;

        Ok(BuildConfig {
            input,
            output,
            prefix: normalize_prefix(self.prefix),
            postfix: normalize_postfix(self.postfix),
            embedded: self.embedded,
            referenced: self.referenced,
            demo: self.demo,
            minify: self.minify,
        })
    }

    fn check_input(input: Option<&Path>, diag: &mut ConfigDiagnostics) -> Option<PathBuf> {
        let Some(input) = input.filter(|p| !p.as_os_str().is_empty()) else {
            diag.error_with_hint(
                FieldPath::INPUT,
                "Input directory is required",
                "svgs-to-icons <INPUT>",
            );
            return None;
        };

        if !input.exists() {
            diag.error(
                FieldPath::INPUT,
                format!("Input directory does not exist: {}", input.display()),
            );
            return None;
        }
        if !input.is_dir() {
            diag.error(
                FieldPath::INPUT,
                format!("Input path is not a directory: {}", input.display()),
            );
            return None;
        }

        Some(normalize_path(input))
    }

    /// `<parent>/<input folder name>`, absolute, with `~` expanded.
    fn output_root(input: &Path, parent: &Path) -> PathBuf {
        let parent = expand_tilde(parent);
        let root = match input.file_name() {
            Some(name) => parent.join(name),
            None => parent,
        };
        normalize_path(&root)
    }

    /// The output root must be a writable directory, or creatable.
    ///
    /// Creates missing parent directories as a side effect.
    fn check_output(output: &Path, diag: &mut ConfigDiagnostics) {
        let cannot_create = |reason: &dyn std::fmt::Display| {
            format!(
                "Cannot create output directory: {} ({reason})",
                output.display()
            )
        };

        if output.exists() {
            match fs::metadata(output) {
                Ok(meta) if !meta.is_dir() => {
                    diag.error(FieldPath::OUTPUT, cannot_create(&"not a directory"));
                }
                Ok(meta) if meta.permissions().readonly() => {
                    diag.error(
                        FieldPath::OUTPUT,
                        format!("Output directory is not writable: {}", output.display()),
                    );
                }
                Ok(_) => {}
                Err(e) => diag.error(FieldPath::OUTPUT, cannot_create(&e)),
            }
            return;
        }

        let Some(parent) = output.parent() else {
            return;
        };
        if let Err(e) = fs::create_dir_all(parent) {
            diag.error(FieldPath::OUTPUT, cannot_create(&e));
            return;
        }
        match fs::metadata(parent) {
            Ok(meta) if meta.permissions().readonly() => {
                diag.error(FieldPath::OUTPUT, cannot_create(&"permission denied"));
            }
            Ok(_) => {}
            Err(e) => diag.error(FieldPath::OUTPUT, cannot_create(&e)),
        }
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// `ui` -> `ui-`; empty stays empty.
fn normalize_prefix(mut prefix: String) -> String {
    if !prefix.is_empty() && !prefix.ends_with('-') {
        prefix.push('-');
    }
    prefix
}

/// `icon` -> `-icon`; empty stays empty.
fn normalize_postfix(postfix: String) -> String {
    if postfix.is_empty() || postfix.starts_with('-') {
        postfix
    } else {
        format!("-{postfix}")
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        input: PathBuf,
        out: PathBuf,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("icons");
        fs::create_dir(&input).unwrap();
        let out = dir.path().join("out");
        Fixture {
            input,
            out,
            _dir: dir,
        }
    }

    fn cli_for(fx: &Fixture) -> Cli {
        Cli {
            input: Some(fx.input.clone()),
            output: Some(fx.out.clone()),
            ..Cli::default()
        }
    }

    fn messages(err: ConfigError) -> Vec<String> {
        match err {
            ConfigError::Diagnostics(diag) => {
                diag.errors().iter().map(|e| e.message.clone()).collect()
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_defaults() {
        let fx = fixture();
        let config = BuildConfig::resolve(&cli_for(&fx), &FileConfig::default()).unwrap();

        assert_eq!(config.input, normalize_path(&fx.input));
        assert_eq!(config.output, normalize_path(&fx.out).join("icons"));
        assert_eq!(config.prefix, "");
        assert_eq!(config.postfix, "-icon");
        assert!(config.embedded && config.referenced && config.demo);
        assert!(!config.minify);
        // parent is created, the root itself is left to the pipeline
        assert!(fx.out.is_dir());
    }

    #[test]
    fn test_precedence_cli_over_file() {
        let fx = fixture();
        let file = FileConfig {
            prefix: Some("file".into()),
            postfix: Some("svg".into()),
            demo: Some(false),
            minify: Some(true),
            ..FileConfig::default()
        };
        let cli = Cli {
            prefix: Some("cli".into()),
            minify: Some(false),
            ..cli_for(&fx)
        };

        let config = BuildConfig::resolve(&cli, &file).unwrap();
        assert_eq!(config.prefix, "cli-");
        assert_eq!(config.postfix, "-svg");
        assert!(!config.demo);
        assert!(!config.minify);
    }

    #[test]
    fn test_prefix_postfix_normalization() {
        assert_eq!(normalize_prefix("ui".into()), "ui-");
        assert_eq!(normalize_prefix("ui-".into()), "ui-");
        assert_eq!(normalize_prefix(String::new()), "");
        assert_eq!(normalize_postfix("icon".into()), "-icon");
        assert_eq!(normalize_postfix("-icon".into()), "-icon");
        assert_eq!(normalize_postfix(String::new()), "");
    }

    #[test]
    fn test_input_required() {
        let err = BuildConfig::resolve(&Cli::default(), &FileConfig::default()).unwrap_err();
        assert_eq!(messages(err), ["Input directory is required"]);
    }

    #[test]
    fn test_input_missing_or_file() {
        let fx = fixture();
        let missing = fx.input.join("nope");
        let cli = Cli {
            input: Some(missing.clone()),
            ..cli_for(&fx)
        };
        let err = BuildConfig::resolve(&cli, &FileConfig::default()).unwrap_err();
        assert_eq!(
            messages(err),
            [format!("Input directory does not exist: {}", missing.display())]
        );

        let file = fx.input.join("a.svg");
        fs::write(&file, "<svg/>").unwrap();
        let cli = Cli {
            input: Some(file.clone()),
            ..cli_for(&fx)
        };
        let err = BuildConfig::resolve(&cli, &FileConfig::default()).unwrap_err();
        assert_eq!(
            messages(err),
            [format!("Input path is not a directory: {}", file.display())]
        );
    }

    #[test]
    fn test_output_is_a_file() {
        let fx = fixture();
        fs::create_dir_all(&fx.out).unwrap();
        fs::write(fx.out.join("icons"), "").unwrap();

        let err = BuildConfig::resolve(&cli_for(&fx), &FileConfig::default()).unwrap_err();
        let messages = messages(err);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Cannot create output directory:"));
    }

    #[test]
    fn test_collects_all_errors() {
        let fx = fixture();
        let cli = Cli {
            prefix: Some("1bad".into()),
            postfix: Some("--bad".into()),
            embedded: Some(false),
            referenced: Some(false),
            ..cli_for(&fx)
        };

        let err = BuildConfig::resolve(&cli, &FileConfig::default()).unwrap_err();
        assert_eq!(
            messages(err),
            [
                "At least one output type must be enabled (embedded or referenced)",
                "prefix must be a valid CSS identifier",
                "postfix must be a valid CSS identifier",
            ]
        );
    }

    #[test]
    fn test_empty_prefix_and_postfix_allowed() {
        let fx = fixture();
        let cli = Cli {
            postfix: Some(String::new()),
            ..cli_for(&fx)
        };
        let config = BuildConfig::resolve(&cli, &FileConfig::default()).unwrap();
        assert_eq!(config.prefix, "");
        assert_eq!(config.postfix, "");
    }
}
