//! # chainscope-io
//!
//! Load Markov state graphs from plain text and export them, or their class
//! Hasse diagrams, as Mermaid flowcharts.

mod error;
mod mermaid;
mod reader;
mod writer;

pub use error::IoError;
pub use mermaid::{graph_to_mermaid, hasse_to_mermaid, state_label};
pub use reader::{DuplicateEdges, LoaderConfig, parse_graph, read_graph};
pub use writer::write_mermaid;
