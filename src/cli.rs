use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chainscope Markov chain analyser.
#[derive(Parser)]
#[command(
    name = "chainscope",
    version,
    about = "Structural and stationary analysis of discrete Markov chains"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Check that every state's outgoing probabilities sum to 1.
    Check(CheckArgs),
    /// Export the state graph as a Mermaid diagram.
    Export(ExportArgs),
    /// Decompose the chain into classes and solve each persistent class.
    Analyze(AnalyzeArgs),
    /// Print a power of the transition matrix.
    Power(PowerArgs),
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to the graph text file.
    pub graph: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the tolerance around 1.0 for outgoing sums.
    #[arg(long)]
    pub tolerance: Option<f64>,
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Path to the graph text file.
    pub graph: PathBuf,

    /// Path for the Mermaid output.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to the graph text file.
    pub graph: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the Hasse diagram of the classes as Mermaid.
    #[arg(long)]
    pub hasse: Option<PathBuf>,

    /// Override the solver convergence threshold.
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Override the solver iteration cap.
    #[arg(long = "max-iter")]
    pub max_iter: Option<usize>,
}

/// Arguments for the `power` subcommand.
#[derive(clap::Args)]
pub struct PowerArgs {
    /// Path to the graph text file.
    pub graph: PathBuf,

    /// Exponent of the transition matrix.
    #[arg(short)]
    pub k: usize,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
