//! Adjacency-list storage for a weighted directed state graph.

use crate::error::GraphError;

/// A directed, probability-weighted transition between two states.
///
/// Both endpoints are 1-based state ids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    from: usize,
    to: usize,
    probability: f64,
}

impl Edge {
    /// Returns the 1-based source state.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Returns the 1-based destination state.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Returns the 0-based index of the source state.
    pub fn from_index(&self) -> usize {
        self.from - 1
    }

    /// Returns the 0-based index of the destination state.
    pub fn to_index(&self) -> usize {
        self.to - 1
    }

    /// Returns the transition probability carried by this edge.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

/// A directed graph over states `1..=n`, one owned adjacency list per state.
///
/// Edges are appended in insertion order and are never deduplicated here.
/// Repeated `(from, to)` pairs are treated as one transition whose
/// probability is the sum of the parts by every query in this workspace.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph with `n` states and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidSize`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self, GraphError> {
        if n == 0 {
            return Err(GraphError::InvalidSize { n });
        }
        Ok(Self {
            adjacency: vec![Vec::new(); n],
        })
    }

    /// Adds the edge `from -> to` with the given probability.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::StateOutOfRange`] if either endpoint is outside
    /// `1..=n_states`, or [`GraphError::InvalidProbability`] if the
    /// probability is negative or non-finite.
    pub fn add_edge(&mut self, from: usize, to: usize, probability: f64) -> Result<(), GraphError> {
        let n_states = self.n_states();
        for state in [from, to] {
            if state == 0 || state > n_states {
                return Err(GraphError::StateOutOfRange { state, n_states });
            }
        }
        if !probability.is_finite() || probability < 0.0 {
            return Err(GraphError::InvalidProbability {
                from,
                to,
                value: probability,
            });
        }
        self.adjacency[from - 1].push(Edge {
            from,
            to,
            probability,
        });
        Ok(())
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of stored edges, duplicates included.
    pub fn n_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns the outgoing edges of a 1-based state, or `None` if the state
    /// does not exist.
    pub fn out_edges(&self, state: usize) -> Option<&[Edge]> {
        state
            .checked_sub(1)
            .and_then(|i| self.adjacency.get(i))
            .map(Vec::as_slice)
    }

    /// Returns the outgoing edges of the state at 0-based `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_states()`.
    pub fn out_edges_by_index(&self, index: usize) -> &[Edge] {
        &self.adjacency[index]
    }

    /// Iterates over every edge, grouped by source state in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.iter().flatten()
    }

    /// Returns the sum of outgoing probabilities of a 1-based state.
    ///
    /// Returns `None` if the state does not exist.
    pub fn outgoing_sum(&self, state: usize) -> Option<f64> {
        self.out_edges(state)
            .map(|edges| edges.iter().map(Edge::probability).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_states() {
        assert_eq!(Graph::new(0).unwrap_err(), GraphError::InvalidSize { n: 0 });
    }

    #[test]
    fn new_graph_is_empty() {
        let g = Graph::new(3).unwrap();
        assert_eq!(g.n_states(), 3);
        assert_eq!(g.n_edges(), 0);
        for state in 1..=3 {
            assert!(g.out_edges(state).unwrap().is_empty());
        }
    }

    #[test]
    fn add_edge_stores_endpoints() {
        let mut g = Graph::new(2).unwrap();
        g.add_edge(1, 2, 0.25).unwrap();
        let edges = g.out_edges(1).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from(), 1);
        assert_eq!(edges[0].to(), 2);
        assert_eq!(edges[0].from_index(), 0);
        assert_eq!(edges[0].to_index(), 1);
        assert!((edges[0].probability() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn add_edge_rejects_out_of_range() {
        let mut g = Graph::new(2).unwrap();
        assert_eq!(
            g.add_edge(0, 1, 1.0),
            Err(GraphError::StateOutOfRange {
                state: 0,
                n_states: 2
            })
        );
        assert_eq!(
            g.add_edge(1, 3, 1.0),
            Err(GraphError::StateOutOfRange {
                state: 3,
                n_states: 2
            })
        );
        assert_eq!(g.n_edges(), 0);
    }

    #[test]
    fn add_edge_rejects_bad_probability() {
        let mut g = Graph::new(2).unwrap();
        assert!(g.add_edge(1, 2, -0.1).is_err());
        assert!(g.add_edge(1, 2, f64::NAN).is_err());
        assert!(g.add_edge(1, 2, f64::INFINITY).is_err());
        assert_eq!(g.n_edges(), 0);
    }

    #[test]
    fn duplicate_edges_are_kept_and_summed() {
        let mut g = Graph::new(2).unwrap();
        g.add_edge(1, 2, 0.25).unwrap();
        g.add_edge(1, 2, 0.25).unwrap();
        g.add_edge(1, 1, 0.5).unwrap();
        assert_eq!(g.n_edges(), 3);
        assert!((g.outgoing_sum(1).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_edges_unknown_state() {
        let g = Graph::new(2).unwrap();
        assert!(g.out_edges(0).is_none());
        assert!(g.out_edges(3).is_none());
        assert!(g.outgoing_sum(3).is_none());
    }

    #[test]
    fn edges_iterates_by_source() {
        let mut g = Graph::new(3).unwrap();
        g.add_edge(3, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        let sources: Vec<usize> = g.edges().map(Edge::from).collect();
        assert_eq!(sources, vec![1, 2, 3]);
    }
}
