//! Segment command implementation

use crate::input::read_text;
use crate::output::{self, OutputFormat};
use anyhow::{bail, Context, Result};
use clap::Args;
use maqta_api::{
    Config, CoreError, LanguageModel, NgramModel, SegmentOptions, Segmenter, SegmenterType,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Inline text to segment
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Split policy for segments over the word cap
    #[arg(short, long, value_enum, default_value = "lm")]
    pub segmenter_type: SegmenterChoice,

    /// Validate markup and split along its boundaries first
    #[arg(short = 'm', long)]
    pub parse_markup: bool,

    /// Training corpus for the bigram scoring model
    #[arg(long, value_name = "FILE", env = "MAQTA_MODEL_PATH")]
    pub model: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override the per-sentence word cap
    #[arg(long, value_name = "N")]
    pub max_words_per_sentence: Option<usize>,

    /// Override the total word cap
    #[arg(long, value_name = "N")]
    pub max_total_words: Option<usize>,

    /// Do not split at punctuation marks
    #[arg(long)]
    pub no_split_by_punctuation: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Split policies selectable on the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SegmenterChoice {
    /// Maximize language model plausibility over split points
    Lm,
    /// Split purely by the word caps
    Max,
}

impl From<SegmenterChoice> for SegmenterType {
    fn from(choice: SegmenterChoice) -> Self {
        match choice {
            SegmenterChoice::Lm => SegmenterType::Lm,
            SegmenterChoice::Max => SegmenterType::Max,
        }
    }
}

/// Refuses to score; stands in for the model when the max policy is used.
struct UnavailableModel;

impl LanguageModel for UnavailableModel {
    fn score(&self, _text: &str) -> std::result::Result<f64, CoreError> {
        Err(CoreError::ScoringUnavailable(
            "no scoring model loaded".to_string(),
        ))
    }
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let config = self.resolve_config()?;
        let segmenter_type: SegmenterType = self.segmenter_type.into();

        let model: Arc<dyn LanguageModel> = match &self.model {
            Some(path) => {
                log::info!("training bigram model from {}", path.display());
                Arc::new(
                    NgramModel::from_file(path)
                        .with_context(|| format!("failed to load model corpus {}", path.display()))?,
                )
            }
            None if matches!(segmenter_type, SegmenterType::Lm) => {
                bail!("--model is required for lm segmentation (or set MAQTA_MODEL_PATH)")
            }
            None => Arc::new(UnavailableModel),
        };

        let segmenter = Segmenter::new(config, model)?;
        let text = read_text(self.text.as_deref(), self.input.as_deref())?;

        log::debug!("segmenting {} bytes with policy {segmenter_type}", text.len());
        let utterances = segmenter.segment(
            &text,
            &SegmentOptions {
                segmenter: segmenter_type,
                parse_markup: self.parse_markup,
            },
        )?;
        log::info!("produced {} utterances", utterances.len());

        let rendered = output::render(&utterances, self.format)?;
        output::write(self.output.as_deref(), &rendered)
    }

    /// Environment configuration with command-line overrides on top.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::from_env()?;
        if let Some(cap) = self.max_words_per_sentence {
            config.max_words_per_sentence = cap;
        }
        if let Some(cap) = self.max_total_words {
            config.max_total_words = cap;
        }
        if self.no_split_by_punctuation {
            config.split_by_punctuation = false;
        }
        config.validate()?;
        Ok(config)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segmenter_choice_maps_onto_the_engine_policy() {
        assert!(matches!(
            SegmenterType::from(SegmenterChoice::Lm),
            SegmenterType::Lm
        ));
        assert!(matches!(
            SegmenterType::from(SegmenterChoice::Max),
            SegmenterType::Max
        ));
    }

    #[test]
    fn unavailable_model_fails_with_a_scoring_error() {
        let err = UnavailableModel.score("نص").unwrap_err();
        assert!(matches!(err, CoreError::ScoringUnavailable(_)));
    }
}
