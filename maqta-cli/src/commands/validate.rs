//! Validate command implementation

use crate::input::read_text;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Inline markup to validate
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let text = read_text(self.text.as_deref(), self.input.as_deref())?;
        let verdict = maqta_api::validate_markup(&text);

        if verdict.is_valid {
            println!("✓ Markup is valid!");
            Ok(())
        } else {
            let reason = verdict.reason.unwrap_or_default();
            println!("✗ Markup is invalid!");
            println!("  Reason: {reason}");
            Err(anyhow::anyhow!("validation failed: {reason}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_markup_passes() {
        let args = ValidateArgs {
            text: Some("<p><s>مرحبا</s></p><break/>".to_string()),
            input: None,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn invalid_markup_fails_with_the_reason() {
        let args = ValidateArgs {
            text: Some("<p><break/></p>".to_string()),
            input: None,
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("break tag not in outer level"));
    }
}
