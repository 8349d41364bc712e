//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use chainscope_io::{DuplicateEdges, LoaderConfig};
use chainscope_markov::{AnalysisConfig, SolverConfig};

/// Parses a duplicate-edge policy name into the corresponding enum variant.
pub fn parse_duplicates(s: &str) -> Result<DuplicateEdges> {
    match s.to_lowercase().as_str() {
        "accumulate" => Ok(DuplicateEdges::Accumulate),
        "reject" => Ok(DuplicateEdges::Reject),
        other => bail!("unknown duplicate-edge policy: {other:?}"),
    }
}

/// Builds a `LoaderConfig` from the `[io]` section.
pub fn build_loader_config(io: &IoToml) -> Result<LoaderConfig> {
    Ok(LoaderConfig::new().with_duplicates(parse_duplicates(&io.duplicates)?))
}

/// Builds a `SolverConfig` from the `[solver]` section.
pub fn build_solver_config(solver: &SolverToml) -> SolverConfig {
    SolverConfig::new()
        .with_epsilon(solver.epsilon)
        .with_max_iterations(solver.max_iterations)
        .with_lazy_alpha(solver.lazy_alpha)
}

/// Builds an `AnalysisConfig` from the whole file.
pub fn build_analysis_config(config: &ChainscopeConfig) -> AnalysisConfig {
    AnalysisConfig::new()
        .with_solver(build_solver_config(&config.solver))
        .with_markov_tolerance(config.markov.tolerance)
}
