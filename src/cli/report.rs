//! Build summary printed after a successful run.

use std::path::Path;

use owo_colors::{Stream, Style};

use crate::log;
use crate::logger::paint;
use crate::pipeline::BuildResult;
use crate::utils::plural::plural_count;

/// Print output location, counts, warnings and demo links.
pub fn print_success(output: &Path, result: &BuildResult) {
    log!("done"; "Successfully processed SVG icons!");
    log!("done"; "Output directory: {}", output.display());
    log!("done"; "Processed {}", plural_count(result.records.len(), "SVG file"));

    if !result.warnings.is_empty() {
        log!("warning"; "{}:", plural_count(result.warnings.len(), "warning"));
        for warning in &result.warnings {
            println!("  - {warning}");
        }
    }

    if let Some(demos) = &result.demo_paths {
        if let Some(path) = &demos.embedded {
            log!("demo"; "Embedded demo (click to view): {}", file_link(path));
        }
        if let Some(path) = &demos.referenced {
            log!("demo"; "Referenced demo: {}", path.display());
            println!(
                "  {}",
                paint(
                    "To view file-referenced icons, a local server is needed.",
                    Style::new().dimmed(),
                    Stream::Stdout,
                )
            );
        }
    }
}

/// `file://` URL wrapped in an OSC 8 hyperlink for terminals that support it.
fn file_link(path: &Path) -> String {
    let url = format!("file://{}", path.display());
    format!("\x1b]8;;{url}\x07{url}\x1b]8;;\x07")
}
