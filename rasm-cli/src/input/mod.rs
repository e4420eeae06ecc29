//! Input source handling

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// A named, fully-read input source.
#[derive(Debug)]
pub struct Source {
    /// Display name ("<stdin>" for standard input)
    pub name: String,
    /// UTF-8 contents
    pub text: String,
}

/// Read every input argument into memory; `-` reads standard input.
pub fn read_sources(inputs: &[String]) -> Result<Vec<Source>> {
    let mut sources = Vec::with_capacity(inputs.len());
    for input in inputs {
        if input == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            sources.push(Source {
                name: "<stdin>".to_string(),
                text,
            });
        } else {
            let path = Path::new(input);
            if !path.exists() {
                return Err(CliError::FileNotFound(input.clone()).into());
            }
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            sources.push(Source {
                name: input.clone(),
                text,
            });
        }
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "بِللَ").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let sources = read_sources(&[path.clone()]).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, path);
        assert!(sources[0].text.contains("بِللَ"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_sources(&["nonexistent.txt".to_string()]).unwrap_err();
        assert!(err.to_string().contains("nonexistent.txt"));
    }
}
