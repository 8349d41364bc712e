//! Markov validity checks on outgoing probability mass.

use tracing::debug;

use crate::error::GraphError;
use crate::graph::Graph;

/// Default tolerance around 1.0 for a state's outgoing probability sum.
pub const DEFAULT_MARKOV_TOLERANCE: f64 = 0.01;

/// A state whose outgoing probabilities do not sum to 1 within tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkovViolation {
    /// 1-based state id.
    pub state: usize,
    /// Sum of the state's outgoing probabilities.
    pub sum: f64,
}

impl Graph {
    /// Returns every state whose outgoing sum falls outside
    /// `[1 - tolerance, 1 + tolerance]`, in ascending state order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidTolerance`] if `tolerance` is negative or
    /// non-finite.
    pub fn markov_violations(&self, tolerance: f64) -> Result<Vec<MarkovViolation>, GraphError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(GraphError::InvalidTolerance { value: tolerance });
        }
        let lo = 1.0 - tolerance;
        let hi = 1.0 + tolerance;
        let violations: Vec<MarkovViolation> = (0..self.n_states())
            .filter_map(|i| {
                let sum: f64 = self
                    .out_edges_by_index(i)
                    .iter()
                    .map(|e| e.probability())
                    .sum();
                (sum < lo || sum > hi).then_some(MarkovViolation { state: i + 1, sum })
            })
            .collect();
        debug!(
            n_states = self.n_states(),
            n_violations = violations.len(),
            tolerance,
            "markov validity checked"
        );
        Ok(violations)
    }

    /// Returns `true` if every state's outgoing sum lies within
    /// `[1 - tolerance, 1 + tolerance]`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidTolerance`] for a bad tolerance.
    pub fn is_markov_with_tolerance(&self, tolerance: f64) -> Result<bool, GraphError> {
        Ok(self.markov_violations(tolerance)?.is_empty())
    }

    /// Returns `true` if every state's outgoing sum lies within
    /// [`DEFAULT_MARKOV_TOLERANCE`] of 1.
    pub fn is_markov(&self) -> bool {
        self.markov_violations(DEFAULT_MARKOV_TOLERANCE)
            .is_ok_and(|v| v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn two_state(p11: f64, p12: f64) -> Graph {
        let mut g = Graph::new(2).unwrap();
        g.add_edge(1, 1, p11).unwrap();
        g.add_edge(1, 2, p12).unwrap();
        g.add_edge(2, 2, 1.0).unwrap();
        g
    }

    #[test]
    fn exact_sum_is_markov() {
        assert!(two_state(0.5, 0.5).is_markov());
    }

    #[test]
    fn sum_within_tolerance_is_markov() {
        assert!(two_state(0.5, 0.505).is_markov());
        assert!(two_state(0.5, 0.495).is_markov());
    }

    #[test]
    fn half_sum_is_not_markov() {
        let g = two_state(0.25, 0.25);
        assert!(!g.is_markov());
        let violations = g.markov_violations(DEFAULT_MARKOV_TOLERANCE).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].state, 1);
        assert_abs_diff_eq!(violations[0].sum, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn state_without_edges_is_not_markov() {
        let mut g = Graph::new(2).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        assert!(!g.is_markov());
        let violations = g.markov_violations(DEFAULT_MARKOV_TOLERANCE).unwrap();
        assert_eq!(violations, vec![MarkovViolation { state: 2, sum: 0.0 }]);
    }

    #[test]
    fn is_markov_agrees_with_default_violations() {
        for p12 in [0.47, 0.485, 0.495, 0.5, 0.505, 0.515, 0.53] {
            let g = two_state(0.5, p12);
            let violations = g.markov_violations(DEFAULT_MARKOV_TOLERANCE).unwrap();
            assert_eq!(g.is_markov(), violations.is_empty(), "p12 = {p12}");
        }
        assert!(!two_state(0.5, 0.485).is_markov());
        assert!(!two_state(0.5, 0.515).is_markov());
    }

    #[test]
    fn custom_tolerance() {
        let g = two_state(0.5, 0.45);
        assert!(!g.is_markov());
        assert!(g.is_markov_with_tolerance(0.1).unwrap());
        assert!(!g.is_markov_with_tolerance(0.01).unwrap());
    }

    #[test]
    fn rejects_bad_tolerance() {
        let g = two_state(0.5, 0.5);
        assert!(g.markov_violations(-0.1).is_err());
        assert!(g.markov_violations(f64::NAN).is_err());
    }
}
