//! Error types
//!
//! Parsing itself never fails; these cover the edges around it: picking and running an output
//! format, and reading content from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the format registry and the serializers.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while loading and serializing content.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}
