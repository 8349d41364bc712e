//! Analyze command: full class decomposition and stationary distributions.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chainscope_io::{hasse_to_mermaid, read_graph, write_mermaid};
use chainscope_markov::analyze;

use crate::cli::AnalyzeArgs;
use crate::config::ChainscopeConfig;
use crate::convert;
use crate::report;

/// Run the analysis pipeline on a graph file and print the report.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    // 1. Load config and apply CLI overrides
    let mut config = ChainscopeConfig::load(args.config.as_deref())?;
    if let Some(epsilon) = args.epsilon {
        config.solver.epsilon = epsilon;
    }
    if let Some(max_iter) = args.max_iter {
        config.solver.max_iterations = max_iter;
    }
    let loader = convert::build_loader_config(&config.io)?;
    let analysis_cfg = convert::build_analysis_config(&config);
    analysis_cfg
        .validate()
        .context("invalid analysis configuration")?;

    // 2. Read graph
    let graph = read_graph(&args.graph, &loader)
        .with_context(|| format!("failed to read graph: {}", args.graph.display()))?;

    // 3. Analyse
    let analysis = analyze(&graph, &analysis_cfg).context("analysis failed")?;
    print!("{}", report::format_analysis(&analysis));

    // 4. Optional Hasse diagram
    if let Some(path) = &args.hasse {
        let text = hasse_to_mermaid(analysis.partition(), analysis.hasse());
        write_mermaid(path, &text)
            .with_context(|| format!("failed to write Hasse diagram: {}", path.display()))?;
        info!(path = %path.display(), "Hasse diagram exported");
    }
    Ok(())
}
