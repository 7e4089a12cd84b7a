//! Error types for graph building.

use std::path::PathBuf;

/// Result type for graph-building operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building or persisting the graph.
///
/// Per the failure model, only artifact I/O is fatal: malformed source
/// records are skipped with a warning by the readers, never surfaced here.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// I/O error reading or writing a dump or artifact file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A VLQ sequence ended while a continuation bit was still set.
    #[error("truncated VLQ sequence")]
    TruncatedVlq,

    /// A VLQ value ran past 64 bits of continuation digits.
    #[error("VLQ value too wide")]
    VlqOverflow,

    /// A character outside the base64 alphabet appeared in a VLQ sequence.
    #[error("invalid VLQ digit {digit:?}")]
    InvalidVlqDigit {
        /// The offending character.
        digit: char,
    },
}

impl GraphError {
    /// Creates an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
