//! rasm CLI library
//!
//! This library provides the command-line interface for the rasm Arabic
//! orthography normalization engine: batch normalization of text, a replay
//! harness for the keyboard host loop, and configuration handling.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod session;

pub use error::{CliError, CliResult};
