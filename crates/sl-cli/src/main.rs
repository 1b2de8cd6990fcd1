//! Starlift CLI - transform raw extracts into a star-schema warehouse

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{init, load, run, transform, validate};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Library logs go to stderr; keep them quiet unless --verbose or
    // RUST_LOG asks for more
    let default_level = if cli.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    match &cli.command {
        cli::Commands::Init(args) => init::execute(args),
        cli::Commands::Transform(args) => transform::execute(args, &cli.global),
        cli::Commands::Load(args) => load::execute(args, &cli.global),
        cli::Commands::Validate(args) => validate::execute(args, &cli.global),
        cli::Commands::Run(args) => run::execute(args, &cli.global),
    }
}
