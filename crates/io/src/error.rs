//! Error types for chainscope-io.

use std::path::PathBuf;

use chainscope_graph::GraphError;

/// Error type for all fallible operations in the chainscope-io crate.
///
/// Covers missing or unreadable files, malformed graph text, duplicate
/// edges rejected by the loader, and graph construction failures.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating-system error while reading or writing a file.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Returned when the graph text is malformed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an edge is repeated and duplicates are rejected.
    #[error("line {line}: duplicate edge {from} -> {to}")]
    DuplicateEdge {
        /// 1-based source state.
        from: usize,
        /// 1-based destination state.
        to: usize,
        /// 1-based line number of the repeated edge.
        line: usize,
    },

    /// Returned when a parsed edge is rejected by the graph model.
    #[error("line {line}: {source}")]
    InvalidEdge {
        /// 1-based line number of the edge.
        line: usize,
        /// Reason the graph rejected it.
        source: GraphError,
    },

    /// Wraps a graph construction error with no line context.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
