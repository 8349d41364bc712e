//! End-to-end structural and stationary analysis of a chain.

use chainscope_graph::{Graph, MarkovViolation};
use chainscope_matrix::Matrix;
use chainscope_scc::{
    ClassKind, ClassLinkSet, ClassSummary, Partition, class_links, classify, is_irreducible,
    tarjan,
};
use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::error::MarkovError;
use crate::period::period;
use crate::stationary::{StationaryDistribution, solve_stationary};

/// Per-class outcome of an analysis.
#[derive(Debug, Clone)]
pub struct ClassReport {
    summary: ClassSummary,
    period: Option<usize>,
    stationary: Option<StationaryDistribution>,
}

impl ClassReport {
    /// Returns the 0-based class index.
    pub fn index(&self) -> usize {
        self.summary.index
    }

    /// Returns whether the class is transient or persistent.
    pub fn kind(&self) -> ClassKind {
        self.summary.kind
    }

    /// Returns `true` for a persistent single-state class.
    pub fn absorbing(&self) -> bool {
        self.summary.absorbing
    }

    /// Returns the period of a persistent class; `None` for transient ones.
    pub fn period(&self) -> Option<usize> {
        self.period
    }

    /// Returns the stationary distribution of a persistent class, in member
    /// order; `None` for transient ones.
    pub fn stationary(&self) -> Option<&StationaryDistribution> {
        self.stationary.as_ref()
    }
}

/// Everything derived from one graph.
#[derive(Debug, Clone)]
pub struct ChainAnalysis {
    partition: Partition,
    links: ClassLinkSet,
    hasse: ClassLinkSet,
    violations: Vec<MarkovViolation>,
    classes: Vec<ClassReport>,
}

impl ChainAnalysis {
    /// Returns the strongly connected components.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Returns the inter-class links before reduction.
    pub fn links(&self) -> &ClassLinkSet {
        &self.links
    }

    /// Returns the transitive reduction of [`ChainAnalysis::links`].
    pub fn hasse(&self) -> &ClassLinkSet {
        &self.hasse
    }

    /// Returns the states whose outgoing probabilities do not sum to 1.
    pub fn violations(&self) -> &[MarkovViolation] {
        &self.violations
    }

    /// Returns `true` if every state's outgoing sum was within tolerance.
    pub fn is_markov(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns `true` if the chain is a single class.
    pub fn is_irreducible(&self) -> bool {
        is_irreducible(&self.partition)
    }

    /// Returns one report per class, in class order.
    pub fn classes(&self) -> &[ClassReport] {
        &self.classes
    }

    /// Returns the 1-based ids of all absorbing states, in class order.
    pub fn absorbing_states(&self) -> Vec<usize> {
        self.classes
            .iter()
            .filter(|c| c.absorbing())
            .map(|c| self.partition.classes()[c.index()].members()[0])
            .collect()
    }
}

/// Runs the full pipeline: Markov validity, SCC decomposition, class links
/// and their reduction, classification, and period plus stationary
/// distribution for every persistent class.
///
/// # Errors
///
/// Returns [`MarkovError::InvalidConfig`] for a bad configuration. Solver
/// non-convergence is reported per class, not as an error.
#[tracing::instrument(skip_all, fields(n_states = graph.n_states()))]
pub fn analyze(graph: &Graph, config: &AnalysisConfig) -> Result<ChainAnalysis, MarkovError> {
    config.validate()?;
    let violations = graph.markov_violations(config.markov_tolerance())?;

    let partition = tarjan(graph);
    let links = class_links(graph, &partition.vertex_to_class())?;
    let hasse = links.transitive_reduction();
    let full = Matrix::from_graph(graph)?;

    let mut classes = Vec::with_capacity(partition.len());
    for summary in classify(&partition, &links) {
        let report = match summary.kind {
            ClassKind::Transient => ClassReport {
                summary,
                period: None,
                stationary: None,
            },
            ClassKind::Persistent => {
                let sub = full.submatrix_for_class(&partition, summary.index)?;
                let d = period(&sub);
                let stationary = solve_stationary(&sub, d, config.solver())?;
                debug!(
                    class = summary.index,
                    period = d,
                    converged = stationary.converged(),
                    "persistent class solved"
                );
                ClassReport {
                    summary,
                    period: Some(d),
                    stationary: Some(stationary),
                }
            }
        };
        classes.push(report);
    }

    info!(
        n_classes = partition.len(),
        n_links = links.len(),
        n_hasse = hasse.len(),
        markov = violations.is_empty(),
        "analysis complete"
    );
    Ok(ChainAnalysis {
        partition,
        links,
        hasse,
        violations,
        classes,
    })
}
