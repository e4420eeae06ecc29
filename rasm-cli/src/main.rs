//! Command-line interface for the rasm Arabic orthography normalizer

use anyhow::Result;
use clap::Parser;
use rasm_cli::commands::{self, Commands};

/// Arabic orthography normalization from the command line
#[derive(Debug, Parser)]
#[command(name = "rasm", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize(args) => args.execute(),
        Commands::Keys(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => commands::run_list(&subcommand),
    }
}
