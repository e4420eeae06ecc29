//! Configuration file handling
//!
//! The engine itself never reads files; strategy selection and extra rules
//! arrive through this TOML surface and are handed to the engine as a
//! built [`rasm_core::Config`].

use crate::error::CliError;
use anyhow::{Context, Result};
use rasm_core::RewriteStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Engine configuration
    #[serde(default)]
    pub engine: EngineSection,

    /// Extra substitution rules, appended behind the built-in corpus in
    /// file order
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// Engine-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct EngineSection {
    /// Rewrite strategy name ("suffix" or "global")
    pub strategy: String,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            strategy: RewriteStrategy::Suffix.as_str().to_string(),
        }
    }
}

/// A user-supplied substitution rule
#[derive(Debug, Deserialize, Serialize)]
pub struct RuleEntry {
    /// Codepoint sequence matched against the buffer tail
    pub pattern: String,
    /// Text committed in place of the matched tail
    pub replacement: String,
}

impl CliConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: CliConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Build the engine configuration this file describes.
    pub fn to_engine_config(&self) -> Result<rasm_core::Config> {
        let strategy: RewriteStrategy = self
            .engine
            .strategy
            .parse()
            .map_err(|e: rasm_core::ConfigError| CliError::ConfigError(e.to_string()))?;

        let mut builder = rasm_core::Config::builder().strategy(strategy);
        for entry in &self.rules {
            builder = builder.rule(&entry.pattern, &entry.replacement);
        }
        Ok(builder.build())
    }
}
