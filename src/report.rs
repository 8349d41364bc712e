//! Plain-text rendering of analysis results for the terminal.

use chainscope_graph::MarkovViolation;
use chainscope_markov::ChainAnalysis;
use chainscope_scc::{ClassKind, ClassLinkSet, Partition};

/// Describes Markov validity, naming each failing state.
pub fn format_validity(violations: &[MarkovViolation]) -> String {
    if violations.is_empty() {
        return "The graph is a Markov graph\n".to_string();
    }
    let mut out = String::from("The graph is not a Markov graph\n");
    for v in violations {
        out.push_str(&format!(
            "  state {}: outgoing probabilities sum to {:.2}\n",
            v.state, v.sum
        ));
    }
    out
}

fn format_links(partition: &Partition, links: &ClassLinkSet) -> String {
    if links.is_empty() {
        return "  (none)\n".to_string();
    }
    let classes = partition.classes();
    let mut out = String::new();
    for link in links.iter() {
        out.push_str(&format!(
            "  {} -> {}\n",
            classes[link.source].name(),
            classes[link.dest].name()
        ));
    }
    out
}

fn join_states(states: &[usize]) -> String {
    states
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the full report of an analysis.
pub fn format_analysis(analysis: &ChainAnalysis) -> String {
    let partition = analysis.partition();
    let mut out = format_validity(analysis.violations());

    out.push_str("\nClasses:\n");
    for report in analysis.classes() {
        let class = &partition.classes()[report.index()];
        let kind = match report.kind() {
            ClassKind::Transient => "transient",
            ClassKind::Persistent if report.absorbing() => "persistent, absorbing",
            ClassKind::Persistent => "persistent",
        };
        out.push_str(&format!(
            "  {} {{{}}}: {kind}\n",
            class.name(),
            join_states(class.members())
        ));
    }

    out.push_str(&format!("\nLinks ({}):\n", analysis.links().len()));
    out.push_str(&format_links(partition, analysis.links()));
    out.push_str(&format!("\nHasse diagram ({}):\n", analysis.hasse().len()));
    out.push_str(&format_links(partition, analysis.hasse()));

    let absorbing = analysis.absorbing_states();
    if absorbing.is_empty() {
        out.push_str("\nNo absorbing states\n");
    } else {
        out.push_str(&format!("\nAbsorbing states: {}\n", join_states(&absorbing)));
    }

    if analysis.is_irreducible() {
        out.push_str("The Markov graph is irreducible\n");
    } else {
        out.push_str("The Markov graph is reducible\n");
    }

    out.push_str("\nStationary distributions:\n");
    for report in analysis.classes() {
        let (Some(period), Some(pi)) = (report.period(), report.stationary()) else {
            continue;
        };
        let class = &partition.classes()[report.index()];
        out.push_str(&format!("  {} (period {period}):", class.name()));
        for (state, p) in class.members().iter().zip(pi.distribution()) {
            out.push_str(&format!(" {state}={p:.4}"));
        }
        if !pi.converged() {
            out.push_str(&format!(
                " [not converged after {} iterations, difference {:.2e}]",
                pi.iterations(),
                pi.difference()
            ));
        }
        out.push('\n');
    }
    out
}
