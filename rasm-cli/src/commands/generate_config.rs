//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let template = self.generate_template();
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to pick a strategy or add rules");
        println!("2. Use it for processing:");
        println!("   rasm normalize -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        r#"# rasm engine configuration

[engine]
# Rewrite strategy:
#   "suffix" - per-keystroke pass anchored at the buffer tail (default)
#   "global" - legacy replace-everywhere pass, longest patterns first
strategy = "suffix"

# Extra substitution rules, appended behind the built-in corpus in file
# order. Patterns match against the trailing codepoints of the buffer;
# an earlier rule's replacement is visible to every later rule.
#
# [[rules]]
# pattern = "..."
# replacement = "..."
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_template_parses_back() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("rasm.toml"),
        };
        let template = args.generate_template();
        let config: crate::config::CliConfig = toml::from_str(&template).unwrap();
        assert_eq!(config.engine.strategy, "suffix");
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_execute_writes_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("rasm.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[engine]"));
        assert!(content.contains("strategy = \"suffix\""));
    }
}
