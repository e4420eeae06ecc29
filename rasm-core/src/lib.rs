//! Arabic orthography normalization for keyboard input
//!
//! This crate implements the text-rewriting engine behind an Arabic virtual
//! keyboard. As the user types, the host feeds the text before the cursor
//! through [`Normalizer::convert`], which applies an ordered table of
//! suffix-anchored substitution rules and then a definite-article
//! assimilation pass over the last word. A separate dotted-variant lookup
//! ([`Normalizer::next_dot_variant`]) backs a dedicated key that cycles a
//! tapped letter through its dotted forms.
//!
//! The engine holds no buffer of its own: every call is a pure function over
//! the text the host hands it, and the host commits the replacement. All
//! operations are total. Unmatched input passes through unchanged, and
//! absent dot lookups return `None` so the host can fall back to a literal
//! character.
//!
//! # Example
//!
//! ```rust
//! use rasm_core::Normalizer;
//!
//! let engine = Normalizer::new();
//!
//! // Hamza seat correction at the tail of the buffer.
//! assert_eq!(engine.convert("كَأِ"), "كَإِ");
//!
//! // Dotted-variant cycling for the dot key.
//! assert_eq!(engine.next_dot_variant('ص'), Some("ض"));
//! assert_eq!(engine.next_dot_variant('z'), None);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error;
pub mod normalizer;

pub use config::{Config, ConfigBuilder, RewriteStrategy};
pub use domain::article::ConsonantClass;
pub use domain::chars::Vowel;
pub use domain::table::{Rule, RuleTable};
pub use error::{ConfigError, Result};
pub use normalizer::Normalizer;
