//! Error types for artifact loading.
//!
//! Queries themselves never error: an empty or unknown query simply yields
//! an empty result. Only loading the compiled artifact can fail, and it
//! fails fast: callers must never observe a partially loaded graph.

use std::path::PathBuf;

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while loading a compiled graph artifact.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// I/O error reading the artifact.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line is missing the name/successors separator.
    #[error("malformed artifact line {line}")]
    MalformedLine {
        /// One-based line number.
        line: usize,
    },

    /// A successor list failed to decode.
    #[error("invalid successor encoding on line {line}: {source}")]
    InvalidEncoding {
        /// One-based line number.
        line: usize,
        /// Underlying VLQ decode error.
        #[source]
        source: glyph_graph::GraphError,
    },

    /// A decoded successor index does not name a vertex.
    #[error("successor index {index} on line {line} out of range for {vertices} vertices")]
    IndexOutOfRange {
        /// One-based line number.
        line: usize,
        /// The offending index.
        index: i64,
        /// Number of vertices in the artifact.
        vertices: usize,
    },
}

impl LoadError {
    /// Creates an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
