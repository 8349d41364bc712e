//! Weighted directed state graph for discrete-time Markov chains.
//!
//! States are identified by 1-based ids `1..=n`. Each state owns the list of
//! its outgoing edges; an edge carries the transition probability.
//!
//! # Quick start
//!
//! ```rust
//! use chainscope_graph::Graph;
//!
//! let mut graph = Graph::new(2).unwrap();
//! graph.add_edge(1, 2, 1.0).unwrap();
//! graph.add_edge(2, 1, 1.0).unwrap();
//!
//! assert!(graph.is_markov());
//! ```

pub mod error;
pub mod graph;
pub mod validate;

pub use error::GraphError;
pub use graph::{Edge, Graph};
pub use validate::{DEFAULT_MARKOV_TOLERANCE, MarkovViolation};
