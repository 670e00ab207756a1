//! Shared helpers.
//!
//! | Module   | Purpose                                   |
//! |----------|-------------------------------------------|
//! | `html`   | Entity escaping for the demo pages        |
//! | `minify` | Stylesheet minification (lightningcss)    |
//! | `path`   | Filesystem path normalization             |
//! | `plural` | Count + noun formatting for reports       |

pub mod html;
pub mod minify;
pub mod path;
pub mod plural;
