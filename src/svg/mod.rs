//! SVG collaborators used by the icon pipeline.
//!
//! The pipeline only sees two capabilities:
//!
//! ```text
//! raw SVG ──► SvgOptimizer ──► optimized SVG ──► DataUriEncoder ──► data:image/svg+xml,...
//! ```
//!
//! # Modules
//!
//! - [`optimize`]: usvg-backed optimizer (minified output, no root dimensions)
//! - [`data_uri`]: compact percent-encoded data URIs

mod data_uri;
mod optimize;

pub use data_uri::{DATA_URI_PREFIX, MiniDataUri};
pub use optimize::UsvgOptimizer;

use thiserror::Error;

/// Failure reported by an optimizer.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("{0}")]
    Parse(String),

    #[error("optimizer produced no output")]
    Empty,
}

/// Turns raw SVG text into optimized SVG text.
pub trait SvgOptimizer: Send + Sync {
    fn optimize(&self, svg: &str) -> Result<String, SvgError>;
}

/// Turns SVG text into a `data:` URI.
///
/// Callers verify the [`DATA_URI_PREFIX`] themselves; an encoder that returns
/// something else is treated as broken rather than trusted.
pub trait DataUriEncoder: Send + Sync {
    fn encode(&self, svg: &str) -> String;
}
