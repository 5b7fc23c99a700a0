//! Errors from registry construction.

use thiserror::Error;

/// Convenience alias for results within the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while building or extending a registry.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid name pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid parameter shape '{shape}': {detail}")]
    InvalidShape { shape: String, detail: String },

    #[error("no binding labelled '{label}'")]
    UnknownBinding { label: String },
}
