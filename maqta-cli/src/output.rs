//! Output formatting for segmentation results

use anyhow::{Context, Result};
use maqta_api::SegmentationOutput;
use std::path::Path;

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one utterance per line
    Text,
    /// JSON object with an `utterances` array
    Json,
}

/// Render the utterances in the requested format.
pub fn render(utterances: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(utterances.join("\n")),
        OutputFormat::Json => {
            let output = SegmentationOutput {
                utterances: utterances.to_vec(),
            };
            serde_json::to_string_pretty(&output).context("failed to serialize output")
        }
    }
}

/// Write rendered output to a file or stdout.
pub fn write(destination: Option<&Path>, content: &str) -> Result<()> {
    match destination {
        Some(path) => std::fs::write(path, format!("{content}\n"))
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_format_is_one_utterance_per_line() {
        let rendered = render(
            &["قال.".to_string(), "صمت.".to_string()],
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(rendered, "قال.\nصمت.");
    }

    #[test]
    fn json_format_round_trips() {
        let utterances = vec!["قال.".to_string()];
        let rendered = render(&utterances, OutputFormat::Json).unwrap();
        let parsed: SegmentationOutput = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.utterances, utterances);
    }
}
