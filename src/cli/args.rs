//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;

const AFTER_HELP: &str = "\
Examples:
  svgs-to-icons ./icons
  svgs-to-icons ./icons --output ./dist --prefix ui-
  svgs-to-icons ./icons --demo false
  svgs-to-icons ./icons --prefix btn- --postfix -icon";

/// Convert SVG files to CSS classes with mask properties
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "svgs-to-icons", version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Input directory containing SVG files
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub input: Option<PathBuf>,

    /// Output parent directory (default: ./dist); the input folder name is appended
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Prefix for CSS class names (e.g. `ui` -> `ui-home-icon`)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Postfix for CSS class names (default: -icon)
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    pub postfix: Option<String>,

    /// Generate embedded version (data URIs)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub embedded: Option<bool>,

    /// Generate referenced version (file paths)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub referenced: Option<bool>,

    /// Generate interactive demo HTML files
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub demo: Option<bool>,

    /// Minify the generated stylesheets
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Config file path
    #[arg(short = 'C', long, default_value = CONFIG_FILE_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the progress line
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("svgs-to-icons").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["./icons"]);
        assert_eq!(cli.input, Some(PathBuf::from("./icons")));
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE_NAME));
        assert!(cli.output.is_none());
        assert!(cli.embedded.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_bool_flags() {
        let cli = parse(&["./icons", "--demo", "false", "--minify", "--embedded=true"]);
        assert_eq!(cli.demo, Some(false));
        assert_eq!(cli.minify, Some(true));
        assert_eq!(cli.embedded, Some(true));
        assert!(cli.referenced.is_none());
    }

    #[test]
    fn test_prefix_postfix() {
        let cli = parse(&["./icons", "--prefix", "btn-", "--postfix", "-icon"]);
        assert_eq!(cli.prefix.as_deref(), Some("btn-"));
        assert_eq!(cli.postfix.as_deref(), Some("-icon"));
    }

    #[test]
    fn test_missing_input_is_left_to_config() {
        let cli = parse(&[]);
        assert!(cli.input.is_none());
    }
}
