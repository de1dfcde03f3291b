//! Input resolution for the CLI commands

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Resolve the text to process: inline `--text`, a file, or stdin.
pub fn read_text(text: Option<&str>, input: Option<&Path>) -> Result<String> {
    match (text, input) {
        (Some(inline), _) => Ok(inline.to_string()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
