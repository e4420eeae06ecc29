//! Engine error types

use thiserror::Error;

/// Errors raised while assembling an engine configuration.
///
/// The transformation functions themselves are total over their inputs and
/// never fail; configuration parsing is the only fallible surface the engine
/// exposes.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Rewrite strategy name not recognized
    #[error("unknown rewrite strategy '{0}', expected 'suffix' or 'global'")]
    UnknownStrategy(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
