//! Engine configuration

use crate::domain::table::Rule;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Strategy selecting how the substitution table is applied to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RewriteStrategy {
    /// Apply each rule once, in table order, against the trailing codepoints
    /// of the buffer only. This is the canonical per-keystroke behavior.
    #[default]
    Suffix,
    /// Apply rules by descending pattern length, replacing every occurrence
    /// anywhere in the buffer. Retained for parity with the transformer the
    /// original keyboard shipped; not word-aware and never the default.
    Global,
}

impl RewriteStrategy {
    /// Stable string form, matching the configuration file syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteStrategy::Suffix => "suffix",
            RewriteStrategy::Global => "global",
        }
    }
}

impl fmt::Display for RewriteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RewriteStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suffix" => Ok(RewriteStrategy::Suffix),
            "global" => Ok(RewriteStrategy::Global),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Engine configuration.
///
/// The built-in rule corpus and dot map are always present; configuration
/// selects the rewrite strategy and may append extra substitution rules
/// behind the corpus.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Rewrite strategy for the substitution pass
    pub strategy: RewriteStrategy,
    /// Rules appended behind the built-in corpus, in the given order
    pub extra_rules: Vec<Rule>,
}

impl Config {
    /// Start building a configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Fluent builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    strategy: RewriteStrategy,
    extra_rules: Vec<Rule>,
}

impl ConfigBuilder {
    /// Select the rewrite strategy.
    pub fn strategy(mut self, strategy: RewriteStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Append a rule behind the built-in corpus.
    ///
    /// Like [`crate::Normalizer::append_rule`], this accepts duplicates and
    /// empty patterns silently.
    pub fn rule(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.extra_rules.push(Rule::new(pattern, replacement));
        self
    }

    /// Finish building.
    pub fn build(self) -> Config {
        Config {
            strategy: self.strategy,
            extra_rules: self.extra_rules,
        }
    }
}
