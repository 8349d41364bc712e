//! Error types for the chainscope-markov crate.

use chainscope_graph::GraphError;
use chainscope_matrix::MatrixError;
use chainscope_scc::SccError;

/// Error type for all fallible operations in the chainscope-markov crate.
///
/// Non-convergence of the iterative solver is not an error: it is reported
/// through [`crate::StationaryDistribution::converged`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkovError {
    /// Returned when a solver or analysis configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an initial distribution has the wrong length.
    #[error("initial distribution length mismatch: expected {expected}, got {got}")]
    InitialLength {
        /// Matrix dimension.
        expected: usize,
        /// Length of the supplied vector.
        got: usize,
    },

    /// Returned when an initial distribution cannot be normalised.
    #[error("invalid initial distribution: {reason}")]
    InvalidInitial {
        /// Description of the problem.
        reason: String,
    },

    /// Wraps a graph validation failure.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Wraps a decomposition failure.
    #[error(transparent)]
    Scc(#[from] SccError),

    /// Wraps a matrix operation failure.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
