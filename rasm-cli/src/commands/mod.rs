//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod keys;
pub mod normalize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize Arabic text files line by line
    Normalize(normalize::NormalizeArgs),

    /// Replay keyboard key scripts through the engine
    Keys(keys::KeysArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        /// What to list
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available rewrite strategies
    Strategies,

    /// List available output formats
    Formats,
}

/// Execute a list subcommand.
pub fn run_list(subcommand: &ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Strategies => {
            println!("suffix  - per-keystroke pass anchored at the buffer tail (default)");
            println!("global  - legacy replace-everywhere pass, longest patterns first");
        }
        ListCommands::Formats => {
            println!("text - one normalized line per input line (default)");
            println!("json - records with input, output, and the rules that fired");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_runs_for_all_variants() {
        assert!(run_list(&ListCommands::Strategies).is_ok());
        assert!(run_list(&ListCommands::Formats).is_ok());
    }
}
