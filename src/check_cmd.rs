//! Check command: report Markov validity of a graph file.

use anyhow::{Context, Result};
use tracing::info_span;

use chainscope_io::read_graph;

use crate::cli::CheckArgs;
use crate::config::ChainscopeConfig;
use crate::convert;
use crate::report;

/// Load a graph and print whether every row sums to 1.
pub fn run(args: CheckArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();
    let config = ChainscopeConfig::load(args.config.as_deref())?;
    let loader = convert::build_loader_config(&config.io)?;

    let graph = read_graph(&args.graph, &loader)
        .with_context(|| format!("failed to read graph: {}", args.graph.display()))?;

    let tolerance = args.tolerance.unwrap_or(config.markov.tolerance);
    let violations = graph
        .markov_violations(tolerance)
        .context("invalid Markov tolerance")?;
    print!("{}", report::format_validity(&violations));
    Ok(())
}
