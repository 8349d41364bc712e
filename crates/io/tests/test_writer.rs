//! Integration test: writing Mermaid diagrams for a loaded graph.

use chainscope_io::{
    IoError, LoaderConfig, graph_to_mermaid, hasse_to_mermaid, parse_graph, write_mermaid,
};
use chainscope_scc::{class_links, tarjan};

const GRAPH: &str = "3\n1 2 1.0\n2 3 1.0\n3 3 1.0\n";

#[test]
fn write_graph_diagram() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("graph.mmd");

    let graph = parse_graph(GRAPH, &LoaderConfig::default()).expect("parse succeeds");
    write_mermaid(&path, &graph_to_mermaid(&graph)).expect("write succeeds");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.contains("flowchart LR\n"));
    assert!(text.contains("C((3))\n"));
    assert!(text.contains("A -->|1.00|B\n"));
    assert!(text.contains("C -->|1.00|C\n"));
}

#[test]
fn write_hasse_diagram() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("hasse.mmd");

    let graph = parse_graph(GRAPH, &LoaderConfig::default()).expect("parse succeeds");
    let partition = tarjan(&graph);
    let links = class_links(&graph, &partition.vertex_to_class()).expect("links");
    let hasse = links.transitive_reduction();
    write_mermaid(&path, &hasse_to_mermaid(&partition, &hasse)).expect("write succeeds");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.contains("flowchart TD\n"));
    assert_eq!(text.matches("[\"").count(), 3);
    assert_eq!(text.matches(" --> ").count(), 2);
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("no_such_dir").join("out.mmd");
    let err = write_mermaid(&path, "flowchart LR\n").unwrap_err();
    assert!(matches!(err, IoError::Io { .. }), "expected Io, got {err:?}");
}
