//! Strongly connected components of a Markov state graph and the class graph
//! built on top of them.
//!
//! # Pipeline
//!
//! ```text
//!  ┌─────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   tarjan    │────▶│  condensation  │────▶│    classify      │
//!  │ (partition) │     │ (links, Hasse) │     │ (transient/...)  │
//!  └─────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use chainscope_graph::Graph;
//! use chainscope_scc::{class_links, classify, tarjan, ClassKind};
//!
//! let mut graph = Graph::new(3).unwrap();
//! graph.add_edge(1, 2, 1.0).unwrap();
//! graph.add_edge(2, 3, 1.0).unwrap();
//! graph.add_edge(3, 3, 1.0).unwrap();
//!
//! let partition = tarjan(&graph);
//! let links = class_links(&graph, &partition.vertex_to_class()).unwrap();
//! let hasse = links.transitive_reduction();
//!
//! assert_eq!(partition.len(), 3);
//! assert_eq!(hasse.len(), 2);
//! let persistent = classify(&partition, &hasse)
//!     .into_iter()
//!     .filter(|s| s.kind == ClassKind::Persistent)
//!     .count();
//! assert_eq!(persistent, 1);
//! ```

pub mod classify;
pub mod condensation;
pub mod error;
pub mod partition;
pub mod tarjan;

pub use classify::{
    ClassKind, ClassSummary, classify, is_absorbing, is_irreducible, is_persistent, is_transient,
};
pub use condensation::{ClassLink, ClassLinkSet, class_links};
pub use error::SccError;
pub use partition::{Class, Partition};
pub use tarjan::tarjan;
