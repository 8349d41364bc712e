//! Loader for the plain-text graph format.
//!
//! The format is a stream of whitespace-separated tokens: the number of
//! states `N`, then any number of `from to probability` triples. Line
//! breaks carry no meaning beyond error reporting.
//!
//! ```text
//! 3
//! 1 2 0.5
//! 1 3 0.5
//! 2 2 1.0
//! 3 1 1.0
//! ```

use std::collections::HashSet;
use std::path::Path;

use chainscope_graph::Graph;
use tracing::{debug, info};

use crate::error::IoError;

// ---------------------------------------------------------------------------
// LoaderConfig
// ---------------------------------------------------------------------------

/// What to do when the same `(from, to)` pair appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateEdges {
    /// Keep every edge; probabilities are summed downstream.
    #[default]
    Accumulate,
    /// Fail with [`IoError::DuplicateEdge`].
    Reject,
}

/// Configuration for loading graphs from text.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    duplicates: DuplicateEdges,
}

impl LoaderConfig {
    /// Creates a configuration that accumulates duplicate edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duplicate-edge policy.
    pub fn with_duplicates(mut self, duplicates: DuplicateEdges) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Returns the duplicate-edge policy.
    pub fn duplicates(&self) -> DuplicateEdges {
        self.duplicates
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// A token and the 1-based line it came from.
struct Token<'a> {
    line: usize,
    text: &'a str,
}

fn tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.lines().enumerate().flat_map(|(i, l)| {
        l.split_whitespace().map(move |t| Token {
            line: i + 1,
            text: t,
        })
    })
}

fn parse_state(token: &Token<'_>) -> Result<usize, IoError> {
    token.text.parse().map_err(|_| IoError::Parse {
        line: token.line,
        reason: format!("expected a state id, got '{}'", token.text),
    })
}

fn parse_probability(token: &Token<'_>) -> Result<f64, IoError> {
    token.text.parse().map_err(|_| IoError::Parse {
        line: token.line,
        reason: format!("expected a probability, got '{}'", token.text),
    })
}

/// Parses a graph from its text form.
///
/// # Errors
///
/// Returns [`IoError::Parse`] for a missing or malformed state count, a
/// malformed token, or a trailing incomplete triple;
/// [`IoError::InvalidEdge`] for an edge the graph rejects;
/// [`IoError::DuplicateEdge`] for a repeated edge under
/// [`DuplicateEdges::Reject`]; and [`IoError::Graph`] for a zero state
/// count.
pub fn parse_graph(text: &str, config: &LoaderConfig) -> Result<Graph, IoError> {
    let mut tokens = tokens(text);
    let Some(first) = tokens.next() else {
        return Err(IoError::Parse {
            line: 1,
            reason: "missing state count".to_string(),
        });
    };
    let n: usize = first.text.parse().map_err(|_| IoError::Parse {
        line: first.line,
        reason: format!("expected the state count, got '{}'", first.text),
    })?;
    let mut graph = Graph::new(n)?;

    let mut seen = HashSet::new();
    while let Some(from) = tokens.next() {
        let (Some(to), Some(prob)) = (tokens.next(), tokens.next()) else {
            return Err(IoError::Parse {
                line: from.line,
                reason: "incomplete edge, expected `from to probability`".to_string(),
            });
        };
        let line = from.line;
        let from = parse_state(&from)?;
        let to = parse_state(&to)?;
        let probability = parse_probability(&prob)?;

        if config.duplicates == DuplicateEdges::Reject && !seen.insert((from, to)) {
            return Err(IoError::DuplicateEdge { from, to, line });
        }
        graph
            .add_edge(from, to, probability)
            .map_err(|source| IoError::InvalidEdge { line, source })?;
    }

    debug!(
        n_states = graph.n_states(),
        n_edges = graph.n_edges(),
        "graph parsed"
    );
    Ok(graph)
}

/// Reads a graph from a text file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Io`] if it cannot be read, and any error of [`parse_graph`].
pub fn read_graph(path: &Path, config: &LoaderConfig) -> Result<Graph, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph(&text, config)?;
    info!(
        path = %path.display(),
        n_states = graph.n_states(),
        n_edges = graph.n_edges(),
        "graph loaded"
    );
    Ok(graph)
}
