//! Compact `data:image/svg+xml` URIs.
//!
//! SVG is mostly ASCII, so percent-encoding beats base64 on size. The
//! encoding follows `encodeURIComponent` with a few characters that are safe
//! inside a quoted CSS `url("...")` left readable:
//!
//! ```text
//! <svg viewBox="0 0 4 4"/>  →  data:image/svg+xml,%3csvg viewBox='0 0 4 4'/%3e
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::DataUriEncoder;

/// Prefix every icon data URI must carry.
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml,";

/// Characters left unescaped: the `encodeURIComponent` set plus ` `, `=`, `:` and `/`.
const SVG_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b' ')
    .remove(b'=')
    .remove(b':')
    .remove(b'/');

/// [`DataUriEncoder`] producing compact percent-encoded URIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniDataUri;

impl DataUriEncoder for MiniDataUri {
    fn encode(&self, svg: &str) -> String {
        encode_data_uri(svg)
    }
}

/// Encode SVG text as a compact data URI.
pub fn encode_data_uri(svg: &str) -> String {
    let svg = svg.strip_prefix('\u{feff}').unwrap_or(svg);
    let body = svg
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('"', "'");

    let encoded = utf8_percent_encode(&body, SVG_URI).to_string();

    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + encoded.len());
    uri.push_str(DATA_URI_PREFIX);
    lowercase_escapes(&encoded, &mut uri);
    uri
}

/// Copy `encoded` into `out`, lower-casing the hex digits of `%XX` escapes.
fn lowercase_escapes(encoded: &str, out: &mut String) {
    let mut pending = 0;
    for c in encoded.chars() {
        if c == '%' {
            pending = 2;
            out.push(c);
        } else if pending > 0 {
            pending -= 1;
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
}
