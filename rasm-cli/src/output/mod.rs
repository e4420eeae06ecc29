//! Output formatting for normalized lines

use anyhow::Result;
use rasm_core::Rule;
use serde::Serialize;
use std::io::Write;

/// One normalized input line together with the rules that fired on it.
#[derive(Debug, Serialize)]
pub struct LineRecord {
    /// The line as read
    pub input: String,
    /// The line after the full pipeline
    pub output: String,
    /// Substitution rules that fired, in firing order
    pub applied: Vec<Rule>,
}

/// Write one normalized line per input line.
pub fn write_text<W: Write>(writer: &mut W, records: &[LineRecord]) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", record.output)?;
    }
    Ok(())
}

/// Write the full records as a pretty-printed JSON array.
pub fn write_json<W: Write>(writer: &mut W, records: &[LineRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, records)?;
    writeln!(writer)?;
    Ok(())
}
