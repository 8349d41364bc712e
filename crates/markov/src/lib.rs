//! Periodicity and stationary distributions of Markov chain classes.
//!
//! This crate turns the structural decomposition from `chainscope-scc` into
//! long-run numbers: the period of each persistent class and its stationary
//! distribution, found by power iteration. Periodic classes are damped into
//! a lazy chain first, since undamped iteration cycles on them.
//!
//! # Pipeline
//!
//! ```text
//!  ┌───────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  submatrix    │────▶│    period      │────▶│   stationary     │
//!  │  (per class)  │     │ (gcd of P^k)   │     │ (power iterate)  │
//!  └───────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use chainscope_graph::Graph;
//! use chainscope_markov::{AnalysisConfig, analyze};
//!
//! let mut graph = Graph::new(2).unwrap();
//! graph.add_edge(1, 2, 1.0).unwrap();
//! graph.add_edge(2, 1, 1.0).unwrap();
//!
//! let analysis = analyze(&graph, &AnalysisConfig::new()).unwrap();
//! assert!(analysis.is_irreducible());
//!
//! let class = &analysis.classes()[0];
//! assert_eq!(class.period(), Some(2));
//! let pi = class.stationary().unwrap();
//! assert!(pi.converged());
//! assert!((pi.distribution()[0] - 0.5).abs() < 1e-6);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod limit;
pub mod period;
pub mod stationary;

pub use analysis::{ChainAnalysis, ClassReport, analyze};
pub use config::{AnalysisConfig, SolverConfig};
pub use error::MarkovError;
pub use limit::{LimitMatrix, limit_matrix};
pub use period::{gcd, gcd_all, period};
pub use stationary::{StationaryDistribution, power_iterate, solve_stationary};
