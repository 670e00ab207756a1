//! Command-line interface module.

mod args;
pub mod report;

pub use args::Cli;
