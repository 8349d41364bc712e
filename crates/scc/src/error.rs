//! Error types for the chainscope-scc crate.

/// Error type for all fallible operations in the chainscope-scc crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SccError {
    /// Returned when a class index does not address a class of the partition.
    #[error("class index {index} out of range (partition has {n_classes} classes)")]
    ClassIndexOutOfRange {
        /// The requested 0-based class index.
        index: usize,
        /// Number of classes in the partition.
        n_classes: usize,
    },

    /// Returned when a class map is built for a different number of states
    /// than the graph it is applied to.
    #[error("state count mismatch: class map covers {mapped} states, graph has {n_states}")]
    StateCountMismatch {
        /// Number of states covered by the class map.
        mapped: usize,
        /// Number of states in the graph.
        n_states: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_class_index_out_of_range() {
        let e = SccError::ClassIndexOutOfRange {
            index: 5,
            n_classes: 3,
        };
        assert_eq!(
            e.to_string(),
            "class index 5 out of range (partition has 3 classes)"
        );
    }

    #[test]
    fn error_state_count_mismatch() {
        let e = SccError::StateCountMismatch {
            mapped: 4,
            n_states: 6,
        };
        assert_eq!(
            e.to_string(),
            "state count mismatch: class map covers 4 states, graph has 6"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SccError>();
    }
}
