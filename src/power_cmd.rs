//! Power command: print `M^k` for the full transition matrix.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use chainscope_io::read_graph;
use chainscope_matrix::Matrix;

use crate::cli::PowerArgs;
use crate::config::ChainscopeConfig;
use crate::convert;

/// Load a graph and print the k-th power of its transition matrix.
pub fn run(args: PowerArgs) -> Result<()> {
    let _cmd = info_span!("power", k = args.k).entered();
    let config = ChainscopeConfig::load(args.config.as_deref())?;
    let loader = convert::build_loader_config(&config.io)?;

    let graph = read_graph(&args.graph, &loader)
        .with_context(|| format!("failed to read graph: {}", args.graph.display()))?;

    let matrix = Matrix::from_graph(&graph).context("failed to build transition matrix")?;
    debug!(n = matrix.size(), "transition matrix built");
    println!("M^{} =\n{}", args.k, matrix.power(args.k));
    Ok(())
}
