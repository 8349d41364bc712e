//! Export command: write the state graph as a Mermaid flowchart.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chainscope_io::{graph_to_mermaid, read_graph, write_mermaid};

use crate::cli::ExportArgs;
use crate::config::ChainscopeConfig;
use crate::convert;

/// Load a graph and write its Mermaid diagram.
pub fn run(args: ExportArgs) -> Result<()> {
    let _cmd = info_span!("export").entered();
    let config = ChainscopeConfig::load(args.config.as_deref())?;
    let loader = convert::build_loader_config(&config.io)?;

    let graph = read_graph(&args.graph, &loader)
        .with_context(|| format!("failed to read graph: {}", args.graph.display()))?;

    write_mermaid(&args.output, &graph_to_mermaid(&graph))
        .with_context(|| format!("failed to write diagram: {}", args.output.display()))?;
    info!(path = %args.output.display(), "graph diagram exported");
    println!("Mermaid file '{}' written", args.output.display());
    Ok(())
}
