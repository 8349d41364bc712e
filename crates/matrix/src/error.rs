//! Error types for the chainscope-matrix crate.

use chainscope_scc::SccError;

/// Error type for all fallible operations in the chainscope-matrix crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Returned when a matrix would have no rows.
    #[error("invalid matrix size: {n} (must be at least 1)")]
    InvalidSize {
        /// The requested dimension.
        n: usize,
    },

    /// Returned when two operands have different dimensions.
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
    },

    /// Returned when rows passed to a constructor do not form a square.
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// 0-based row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected row length (number of rows).
        expected: usize,
    },

    /// Returned when a vector length does not match the matrix dimension.
    #[error("vector length mismatch: expected {expected}, got {got}")]
    VectorLength {
        /// Matrix dimension.
        expected: usize,
        /// Vector length.
        got: usize,
    },

    /// Returned when a selected state lies outside the matrix.
    #[error("state {state} out of range for a {size}x{size} matrix")]
    StateOutOfRange {
        /// The offending 1-based state id.
        state: usize,
        /// Matrix dimension.
        size: usize,
    },

    /// Returned when a class selected for extraction has no members.
    #[error("class {index} has no members")]
    EmptyClass {
        /// 0-based class index.
        index: usize,
    },

    /// Wraps a partition lookup failure.
    #[error(transparent)]
    Scc(#[from] SccError),
}
