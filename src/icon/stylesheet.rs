//! Embedded and referenced stylesheet assembly.
//!
//! Both stylesheets share one base rule and then list one rule per accepted
//! icon, in the order icons were accepted:
//!
//! ```css
//! [class*="-icon"] { mask-size: 100% 100%; ... }
//! .home-icon { mask-image: url("data:image/svg+xml,..."); }   /* embedded */
//! .home-icon { mask-image: url("./icons/home.svg"); }         /* referenced */
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use super::IconRecord;

/// Selector used when no prefix/postfix is configured and no icon exists yet.
pub const FALLBACK_SELECTOR: &str = r#"[class*="-icon"]"#;

/// Characters escaped in referenced file paths so they stay inside `url("...")`.
const URL_PATH: &AsciiSet = &CONTROLS.add(b'"').add(b'\\').add(b'%');

/// Relative URL of an icon's SVG file, as seen from `referenced-icons/icons.css`.
pub fn referenced_path(file_name: &str) -> String {
    format!("./icons/{}", utf8_percent_encode(file_name, URL_PATH))
}

/// Accumulates CSS rules for both output modes.
#[derive(Debug, Clone)]
pub struct StylesheetAssembler {
    /// Attribute selector built from prefix/postfix, if any is set.
    selector: Option<String>,
    class_names: Vec<String>,
    embedded_rules: String,
    referenced_rules: String,
}

impl StylesheetAssembler {
    pub fn new(prefix: &str, postfix: &str) -> Self {
        let mut selector = String::new();
        if !prefix.is_empty() {
            selector.push_str(&format!(r#"[class*="{prefix}"]"#));
        }
        if !postfix.is_empty() {
            selector.push_str(&format!(r#"[class*="{postfix}"]"#));
        }

        Self {
            selector: (!selector.is_empty()).then_some(selector),
            class_names: Vec::new(),
            embedded_rules: String::new(),
            referenced_rules: String::new(),
        }
    }

    /// Append the rules for one accepted icon.
    pub fn push(&mut self, record: &IconRecord, data_uri: &str, relative_path: &str) {
        let class = &record.class_name;
        self.embedded_rules
            .push_str(&format!(".{class} {{ mask-image: url(\"{data_uri}\"); }}\n"));
        self.referenced_rules
            .push_str(&format!(".{class} {{ mask-image: url(\"{relative_path}\"); }}\n"));
        self.class_names.push(class.clone());
    }

    /// Selector matching every generated class.
    pub fn selector(&self) -> String {
        match &self.selector {
            Some(selector) => selector.clone(),
            None if self.class_names.is_empty() => FALLBACK_SELECTOR.to_string(),
            None => self
                .class_names
                .iter()
                .map(|class| format!(".{class}"))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// The shared rule applied to every icon class.
    pub fn base_rule(&self) -> String {
        format!(
            "{} {{\n\
             \tmask-size: 100% 100%;\n\
             \tbackground-color: currentColor;\n\
             \tmask-repeat: no-repeat;\n\
             \tmask-position: center;\n\
             \theight: 1em;\n\
             \twidth: 1em;\n\
             \tdisplay: inline-block;\n\
             }}\n",
            self.selector()
        )
    }

    /// Per-icon embedded rules, without the base rule.
    #[cfg(test)]
    pub fn embedded_rules(&self) -> &str {
        &self.embedded_rules
    }

    /// Per-icon referenced rules, without the base rule.
    #[cfg(test)]
    pub fn referenced_rules(&self) -> &str {
        &self.referenced_rules
    }

    /// Full embedded stylesheet.
    pub fn embedded_css(&self) -> String {
        self.base_rule() + &self.embedded_rules
    }

    /// Full referenced stylesheet.
    pub fn referenced_css(&self) -> String {
        self.base_rule() + &self.referenced_rules
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.class_names.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.class_names.is_empty()
    }
}
