//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Starlift - transform raw extracts into a star-schema warehouse
#[derive(Parser, Debug)]
#[command(name = "sl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new Starlift project
    Init(InitArgs),

    /// Build dimensions and fact from raw extracts into staging
    Transform(TransformArgs),

    /// Load staging files into the warehouse (CSV + parquet + DDL)
    Load(LoadArgs),

    /// Validate the warehouse tables
    Validate(ValidateArgs),

    /// Run the full pipeline: transform, load, validate
    Run(RunArgs),
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the project directory to create
    pub name: String,
}

/// Arguments for the transform command
#[derive(Args, Debug)]
pub struct TransformArgs {}

/// Arguments for the load command
#[derive(Args, Debug)]
pub struct LoadArgs {}

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
