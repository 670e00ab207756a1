//! Typed placeholder substitution for embedded page templates.

use std::marker::PhantomData;

/// A set of values to substitute into a template.
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// A static template bound to the variable set it expects.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Replace `__KEY__` placeholders in a single pass.
///
/// Inserted values are never rescanned, so a value that happens to contain
/// a placeholder name stays literal.
pub fn substitute(content: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("__") {
        let after = &rest[start + 2..];
        let Some(len) = after.find("__") else {
            break;
        };
        let key = &after[..len];
        let is_key = !key.is_empty() && key.bytes().all(|b| b.is_ascii_uppercase() || b == b'_');

        match is_key.then(|| lookup(key)).flatten() {
            Some(value) => {
                out.push_str(&rest[..start]);
                out.push_str(&value);
                rest = &after[len + 2..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting<'a> {
        name: &'a str,
    }

    impl TemplateVars for Greeting<'_> {
        fn apply(&self, content: &str) -> String {
            substitute(content, |key| (key == "NAME").then(|| self.name.to_string()))
        }
    }

    const GREETING: Template<Greeting<'static>> = Template::new("Hello, __NAME__! __OTHER__ stays.");

    #[test]
    fn test_render() {
        assert_eq!(
            GREETING.render(&Greeting { name: "icons" }),
            "Hello, icons! __OTHER__ stays."
        );
    }

    #[test]
    fn test_values_are_not_rescanned() {
        assert_eq!(
            GREETING.render(&Greeting { name: "__NAME__" }),
            "Hello, __NAME__! __OTHER__ stays."
        );
    }

    #[test]
    fn test_unrelated_underscores() {
        let out = substitute("a__b c__ __X__", |key| (key == "X").then(|| "x".into()));
        assert_eq!(out, "a__b c__ x");
    }
}
