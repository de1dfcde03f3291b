//! Public API for maqta utterance segmentation
//!
//! This crate wires the markup preprocessor to the chunking engine behind
//! a stable interface: build a [`Segmenter`] once over a loaded scoring
//! model, then call [`Segmenter::segment`] from any number of threads.

#![warn(missing_docs)]

pub mod config;
pub mod error;

use maqta_core::markup;
use maqta_core::UtteranceChunker;
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder, ENV_PREFIX};
pub use error::{ApiError, Result};
pub use maqta_core::{
    arabic::SENTENCE_PUNCTUATION, markup::RECOGNIZED_TAGS, markup::WRAPPER_TAG, CoreError,
    LanguageModel, SegmenterType, Verdict,
};
pub use maqta_lm::{LmError, NgramModel};

/// Per-call segmentation options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentOptions {
    /// Split policy for long segments; the language model is the default.
    pub segmenter: SegmenterType,
    /// Validate markup and split along its structural boundaries first.
    pub parse_markup: bool,
}

/// Segmentation result, one cleaned utterance string per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentationOutput {
    /// The ordered, non-empty utterances.
    pub utterances: Vec<String>,
}

/// Main entry point for utterance segmentation.
///
/// Holds the immutable configuration and the chunking engine over a shared
/// read-only scoring model. A single instance serves concurrent calls;
/// every call is independent and synchronous.
pub struct Segmenter {
    chunker: UtteranceChunker,
    config: Config,
}

impl Segmenter {
    /// Create a segmenter with the given configuration and scoring model.
    pub fn new(config: Config, model: Arc<dyn LanguageModel>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            chunker: UtteranceChunker::new(config.chunker_config(), model),
            config,
        })
    }

    /// Create a segmenter with the default configuration.
    pub fn with_model(model: Arc<dyn LanguageModel>) -> Result<Self> {
        Self::new(Config::default(), model)
    }

    /// The configuration this segmenter was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Segment `text` into bounded-length utterances.
    ///
    /// With `parse_markup` set, the text is validated first and
    /// [`ApiError::InvalidMarkup`] carries the verdict reason when it
    /// fails; the document is then split along its structural boundaries
    /// and each long span is chunked independently. Without markup the
    /// whole text goes straight through the chunking engine.
    ///
    /// Scoring failures propagate unchanged with no partial result.
    /// Content past the total word cap is silently discarded; that is the
    /// designed truncation policy, not an error.
    pub fn segment(&self, text: &str, options: &SegmentOptions) -> Result<Vec<String>> {
        if !options.parse_markup {
            return Ok(self.chunker.run(text, options.segmenter)?);
        }

        let text = markup::strip_tag(text, WRAPPER_TAG);
        let verdict = markup::validate(&text);
        if !verdict.is_valid {
            return Err(ApiError::InvalidMarkup {
                reason: verdict.reason.unwrap_or_default(),
            });
        }

        let spans = markup::split_into_spans(&text);
        log::debug!("markup split produced {} spans", spans.len());

        let mut results = Vec::new();
        for span in &spans {
            let span = span.trim();
            if markup::sentence_length(span) > self.config.max_words_per_sentence {
                results.extend(self.chunker.run(span, options.segmenter)?);
            } else {
                results.push(span.to_string());
            }
        }
        results.retain(|utterance| !utterance.is_empty());
        Ok(results)
    }

    /// Segment with the default options (language model policy, no markup).
    pub fn segment_text(&self, text: &str) -> Result<Vec<String>> {
        self.segment(text, &SegmentOptions::default())
    }
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Validate markup the way [`Segmenter::segment`] does: the `speak`
/// envelope is stripped first, then the fragment is checked against the
/// structural predicates.
pub fn validate_markup(text: &str) -> Verdict {
    markup::validate(&markup::strip_tag(text, WRAPPER_TAG))
}
