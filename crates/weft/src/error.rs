//! Error types for weft.
//!
//! The walk and render path has no failure modes: parallel edges and
//! inert rows are ordinary outcomes. Errors only come from the edges of
//! the library (reading pattern files, validating settings, writing SVG).

use std::path::PathBuf;

/// Convenience result type used across weft.
pub type WeftResult<T> = Result<T, WeftError>;

#[derive(thiserror::Error, Debug)]
pub enum WeftError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SVG write error: {0}")]
    Svg(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid canvas settings: {0}")]
    InvalidSettings(String),
}

impl WeftError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::InvalidSettings(msg.into())
    }
}
