//! Normalize command implementation

use crate::config::CliConfig;
use crate::input;
use crate::output::{self, LineRecord};
use anyhow::{Context, Result};
use clap::Args;
use rasm_core::{Normalizer, RewriteStrategy};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input files; use "-" for standard input
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Rewrite strategy (overrides the configuration file)
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One normalized line per input line
    Text,
    /// JSON records with the rules that fired per line
    Json,
}

/// Rewrite strategy flag values
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StrategyArg {
    /// Per-keystroke pass anchored at the buffer tail
    Suffix,
    /// Legacy replace-everywhere pass
    Global,
}

impl From<StrategyArg> for RewriteStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Suffix => RewriteStrategy::Suffix,
            StrategyArg::Global => RewriteStrategy::Global,
        }
    }
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let engine = self.build_engine()?;
        log::info!(
            "normalizing with {} strategy, {} rules",
            engine.strategy(),
            engine.rules().len()
        );

        let sources = input::read_sources(&self.input)?;
        let mut records = Vec::new();
        for source in &sources {
            log::debug!("processing {}", source.name);
            for line in source.text.lines() {
                let (converted, applied) = engine.convert_traced(line);
                records.push(LineRecord {
                    input: line.to_string(),
                    output: converted,
                    applied,
                });
            }
        }

        self.write_records(&records)
    }

    /// Build the engine from config file and flags.
    fn build_engine(&self) -> Result<Normalizer> {
        let mut engine_config = match &self.config {
            Some(path) => CliConfig::load(path)?.to_engine_config()?,
            None => rasm_core::Config::default(),
        };
        if let Some(strategy) = self.strategy {
            engine_config.strategy = strategy.into();
        }
        Ok(Normalizer::with_config(engine_config))
    }

    fn write_records(&self, records: &[LineRecord]) -> Result<()> {
        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                self.write_formatted(&mut file, records)
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                self.write_formatted(&mut handle, records)
            }
        }
    }

    fn write_formatted<W: Write>(&self, writer: &mut W, records: &[LineRecord]) -> Result<()> {
        match self.format {
            OutputFormat::Text => output::write_text(writer, records),
            OutputFormat::Json => output::write_json(writer, records),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}
