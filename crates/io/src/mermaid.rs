//! Mermaid flowchart rendering of a state graph and its Hasse diagram.

use chainscope_graph::Graph;
use chainscope_scc::{ClassLinkSet, Partition};

/// Front matter selecting the ELK layout and the neo theme.
const FRONT_MATTER: &str = "---\nconfig:\n   layout: elk\n   theme: neo\n   look: neo\n---\n\n";

/// Returns the node label of a 1-based state: `A`..`Z`, then `AA`, `AB`, ...
///
/// # Panics
///
/// Panics if `state` is 0.
pub fn state_label(state: usize) -> String {
    assert!(state >= 1, "state ids are 1-based");
    let mut letters = Vec::new();
    let mut i = state;
    while i > 0 {
        i -= 1;
        letters.push(b'A' + (i % 26) as u8);
        i /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Renders the state graph as a left-to-right flowchart.
///
/// One circular node per state, then one labelled edge per stored
/// transition with its probability to two decimals.
pub fn graph_to_mermaid(graph: &Graph) -> String {
    let mut out = String::from(FRONT_MATTER);
    out.push_str("flowchart LR\n");
    for state in 1..=graph.n_states() {
        out.push_str(&format!("{}(({state}))\n", state_label(state)));
    }
    out.push('\n');
    for edge in graph.edges() {
        out.push_str(&format!(
            "{} -->|{:.2}|{}\n",
            state_label(edge.from()),
            edge.probability(),
            state_label(edge.to())
        ));
    }
    out
}

/// Renders a class graph as a top-down flowchart: one box per class listing
/// its member states, one arrow per link.
pub fn hasse_to_mermaid(partition: &Partition, links: &ClassLinkSet) -> String {
    let mut out = String::from(FRONT_MATTER);
    out.push_str("flowchart TD\n");
    for class in partition.classes() {
        let members: Vec<String> = class.members().iter().map(|m| m.to_string()).collect();
        out.push_str(&format!("  {}[\"{}\"]\n", class.name(), members.join(", ")));
    }
    let classes = partition.classes();
    for link in links.iter() {
        out.push_str(&format!(
            "  {} --> {}\n",
            classes[link.source].name(),
            classes[link.dest].name()
        ));
    }
    out
}
