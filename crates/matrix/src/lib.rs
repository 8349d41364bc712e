//! Dense square matrices for Markov transition analysis.
//!
//! [`Matrix`] holds the full transition matrix of a [`chainscope_graph::Graph`]
//! or the submatrix restricted to one class of a
//! [`chainscope_scc::Partition`].
//!
//! # Quick start
//!
//! ```rust
//! use chainscope_matrix::Matrix;
//!
//! let swap = Matrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
//! let identity = Matrix::identity(2).unwrap();
//!
//! assert_eq!(swap.multiply(&swap).unwrap(), identity);
//! let lazy = swap.mix(&identity, 0.5).unwrap();
//! assert_eq!(lazy.get(0, 0), 0.5);
//! ```

pub mod dense;
pub mod error;

pub use dense::Matrix;
pub use error::MatrixError;
