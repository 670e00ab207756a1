//! Interactive HTML demo pages.
//!
//! One self-contained `index.html` per output mode. The generated stylesheet
//! is inlined, so the embedded page works straight from disk; the referenced
//! page needs its `icons/` folder served over HTTP and says so when opened
//! from `file://`.

mod colors;
mod template;

use std::{fmt::Write, path::Path};

use template::{Template, TemplateVars, substitute};

use crate::icon::IconRecord;
use crate::utils::html::{escape, escape_style};

/// Demo page file name inside each mode directory.
pub const DEMO_FILE: &str = "index.html";

/// Link from the referenced demo to its embedded sibling.
const EMBEDDED_DEMO_HREF: &str = "../embedded-icons/index.html";

const DEMO_HTML: &str = include_str!("demo.html");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Embedded,
    Referenced,
}

impl DemoKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Embedded => "Embedded Icons",
            Self::Referenced => "Referenced Icons",
        }
    }

    const fn blurb(self) -> &'static str {
        match self {
            Self::Embedded => {
                "generated with embedded SVG data. These are self-contained; only the CSS file is needed."
            }
            Self::Referenced => {
                "generated with references to external SVG files. You need both the CSS file and the folder of SVG files to use these icons."
            }
        }
    }
}

/// Everything one demo page shows.
#[derive(Debug, Clone, Copy)]
pub struct DemoPage<'a> {
    pub kind: DemoKind,
    pub records: &'a [IconRecord],
    /// Full stylesheet for this mode, inlined into the page.
    pub stylesheet: &'a str,
    /// Base selector shared by every icon class.
    pub selector: &'a str,
    pub source_dir: &'a Path,
    pub output_dir: &'a Path,
}

/// Render one demo page.
pub fn render_demo(page: &DemoPage<'_>) -> String {
    Template::new(DEMO_HTML).render(&DemoVars { page })
}

struct DemoVars<'a> {
    page: &'a DemoPage<'a>,
}

impl TemplateVars for DemoVars<'_> {
    fn apply(&self, content: &str) -> String {
        let page = self.page;
        substitute(content, |key| {
            let value = match key {
                "PAGE_TITLE" => escape(&page_title(page)).into_owned(),
                "HEADING" => page.kind.title().to_string(),
                "DESCRIPTION" => description(page),
                "EMBEDDED_DEMO" => EMBEDDED_DEMO_HREF.to_string(),
                "STYLES" => escape_style(page.stylesheet).into_owned(),
                "SELECTOR" => escape_style(page.selector).into_owned(),
                "COLOR_OPTIONS" => colors::color_options(),
                "ICON_ITEMS" => icon_items(page.records),
                "IS_EMBEDDED" => (page.kind == DemoKind::Embedded).to_string(),
                _ => return None,
            };
            Some(value)
        })
    }
}

fn page_title(page: &DemoPage<'_>) -> String {
    match page.source_dir.file_name() {
        Some(name) => format!("{} - {}", name.to_string_lossy(), page.kind.title()),
        None => page.kind.title().to_string(),
    }
}

fn description(page: &DemoPage<'_>) -> String {
    let count = page.records.len();
    format!(
        "{count} icon{} {}<br>Source: {}<br>Output: {}",
        crate::utils::plural::plural_s(count),
        page.kind.blurb(),
        escape(&page.source_dir.display().to_string()),
        escape(&page.output_dir.display().to_string()),
    )
}

fn icon_items(records: &[IconRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let class = escape(&record.class_name);
        let label = escape(&record.display_name);
        let search_name = escape(&record.display_name.to_lowercase()).into_owned();
        let snippet = format!(r#"<span class="{}"></span>"#, record.class_name);
        let snippet = escape(&snippet);

        // Writing to a String cannot fail.
        let _ = write!(
            out,
            r#"      <div class="icon-item" data-name="{search_name}" data-class="{class}">
        <div class="icon-wrapper"><div class="{class}"></div></div>
        <div class="icon-info">
          <p class="icon-name">{label}</p>
          <button class="icon-class" data-copy="{snippet}" title="Copy {snippet}">{class}</button>
        </div>
      </div>
"#
        );
    }
    out
}
