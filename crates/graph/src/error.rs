//! Error types for the chainscope-graph crate.

/// Error type for all fallible operations in the chainscope-graph crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Returned when a graph is created with no states.
    #[error("invalid graph size: {n} (must be at least 1)")]
    InvalidSize {
        /// The requested number of states.
        n: usize,
    },

    /// Returned when an edge names a state outside `1..=n_states`.
    #[error("state {state} out of range (graph has {n_states} states)")]
    StateOutOfRange {
        /// The offending 1-based state id.
        state: usize,
        /// Number of states in the graph.
        n_states: usize,
    },

    /// Returned when an edge probability is negative or non-finite.
    #[error("invalid probability on edge {from} -> {to}: {value}")]
    InvalidProbability {
        /// 1-based source state.
        from: usize,
        /// 1-based destination state.
        to: usize,
        /// The rejected probability.
        value: f64,
    },

    /// Returned when a validity tolerance is negative or non-finite.
    #[error("invalid tolerance: {value} (must be finite and >= 0)")]
    InvalidTolerance {
        /// The rejected tolerance.
        value: f64,
    },
}
