//! Word-bigram plausibility scoring backend
//!
//! A deterministic, self-contained stand-in for a heavyweight native
//! language model: unigram and bigram counts over the whitespace tokens of
//! a training corpus, scored as a sum of add-one-smoothed base-10 log
//! probabilities. Loaded once at startup and shared read-only across
//! segmentation calls.

#![warn(missing_docs)]

use maqta_core::{CoreError, LanguageModel};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building a model.
#[derive(Error, Debug)]
pub enum LmError {
    /// The training corpus contained no tokens.
    #[error("training corpus is empty")]
    EmptyCorpus,

    /// The corpus file could not be read.
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
}

/// A word-bigram language model with add-one smoothing.
///
/// Scores are base-10 log probabilities: the first token is scored by its
/// unigram probability, every following token by its probability
/// conditioned on the previous one. Only relative ordering between scores
/// from the same model is meaningful.
#[derive(Debug, Clone)]
pub struct NgramModel {
    unigrams: HashMap<String, u64>,
    bigrams: HashMap<(String, String), u64>,
    total_tokens: u64,
    vocabulary: u64,
}

impl NgramModel {
    /// Build a model from raw corpus text.
    pub fn from_text(corpus: &str) -> Result<Self, LmError> {
        let tokens: Vec<&str> = corpus.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(LmError::EmptyCorpus);
        }

        let mut unigrams: HashMap<String, u64> = HashMap::new();
        let mut bigrams: HashMap<(String, String), u64> = HashMap::new();
        for window in tokens.windows(2) {
            *bigrams
                .entry((window[0].to_string(), window[1].to_string()))
                .or_insert(0) += 1;
        }
        for token in &tokens {
            *unigrams.entry((*token).to_string()).or_insert(0) += 1;
        }

        let vocabulary = unigrams.len() as u64;
        Ok(Self {
            unigrams,
            bigrams,
            total_tokens: tokens.len() as u64,
            vocabulary,
        })
    }

    /// Build a model from a plain-text corpus file.
    pub fn from_file(path: &Path) -> Result<Self, LmError> {
        let corpus = std::fs::read_to_string(path)?;
        Self::from_text(&corpus)
    }

    /// Number of distinct tokens seen in training.
    pub fn vocabulary_size(&self) -> u64 {
        self.vocabulary
    }

    fn unigram_log_prob(&self, word: &str) -> f64 {
        let count = self.unigrams.get(word).copied().unwrap_or(0);
        let p = (count + 1) as f64 / (self.total_tokens + self.vocabulary) as f64;
        p.log10()
    }

    fn bigram_log_prob(&self, prev: &str, word: &str) -> f64 {
        let pair = (prev.to_string(), word.to_string());
        let count = self.bigrams.get(&pair).copied().unwrap_or(0);
        let context = self.unigrams.get(prev).copied().unwrap_or(0);
        let p = (count + 1) as f64 / (context + self.vocabulary) as f64;
        p.log10()
    }
}

impl LanguageModel for NgramModel {
    /// Score a normalized, space-joined token sequence. Empty input scores
    /// zero. Never fails once the model is built.
    fn score(&self, text: &str) -> Result<f64, CoreError> {
        let mut score = 0.0;
        let mut prev: Option<&str> = None;
        for token in text.split_whitespace() {
            score += match prev {
                None => self.unigram_log_prob(token),
                Some(context) => self.bigram_log_prob(context, token),
            };
            prev = Some(token);
        }
        Ok(score)
    }
}
