//! Keys command implementation
//!
//! Replays key scripts through an in-memory session, printing the final
//! buffer of each. Script notation: `.` presses the dot key, `<` deletes,
//! space and newline commit verbatim, anything else is typed as-is.

use crate::config::CliConfig;
use crate::session::KeySession;
use anyhow::Result;
use clap::Args;
use rasm_core::Normalizer;
use std::io::BufRead;
use std::path::PathBuf;

/// Arguments for the keys command
#[derive(Debug, Args)]
pub struct KeysArgs {
    /// Key scripts to replay (default: one script per stdin line)
    #[arg(value_name = "SCRIPT")]
    pub script: Vec<String>,

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

impl KeysArgs {
    /// Execute the keys command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let engine = match &self.config {
            Some(path) => Normalizer::with_config(CliConfig::load(path)?.to_engine_config()?),
            None => Normalizer::new(),
        };

        if self.script.is_empty() {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                self.replay_one(&engine, &line);
            }
        } else {
            for script in &self.script {
                self.replay_one(&engine, script);
            }
        }

        Ok(())
    }

    fn replay_one(&self, engine: &Normalizer, script: &str) {
        let mut session = KeySession::new(engine.clone());
        session.replay(script);
        log::debug!("script {:?} -> {:?}", script, session.buffer());
        println!("{}", session.buffer());
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
