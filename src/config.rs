use std::path::Path;

use anyhow::{Context, Result};
use chainscope_graph::DEFAULT_MARKOV_TOLERANCE;
use serde::Deserialize;

/// Top-level Chainscope configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainscopeConfig {
    /// Stationary solver settings.
    #[serde(default)]
    pub solver: SolverToml,

    /// Markov validity settings.
    #[serde(default)]
    pub markov: MarkovToml,

    /// Graph loading settings.
    #[serde(default)]
    pub io: IoToml,
}

impl ChainscopeConfig {
    /// Loads a config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverToml {
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_lazy_alpha")]
    pub lazy_alpha: f64,
}

impl Default for SolverToml {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
            max_iterations: default_max_iterations(),
            lazy_alpha: default_lazy_alpha(),
        }
    }
}

fn default_epsilon() -> f64 {
    1e-6
}
fn default_max_iterations() -> usize {
    10_000
}
fn default_lazy_alpha() -> f64 {
    0.5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkovToml {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for MarkovToml {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
        }
    }
}

fn default_tolerance() -> f64 {
    DEFAULT_MARKOV_TOLERANCE
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_duplicates")]
    pub duplicates: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            duplicates: default_duplicates(),
        }
    }
}

fn default_duplicates() -> String {
    "accumulate".to_string()
}
