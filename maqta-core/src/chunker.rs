//! Punctuation splitting and sentence merging
//!
//! The top-level chunking policy: split raw text at punctuation marks,
//! chunk each segment (through the DP optimizer when the policy asks for
//! it), then greedily regroup the chunks into sentences bounded by the
//! per-sentence and total word caps, and clean the result.

use crate::arabic;
use crate::dp::{self, Chunk};
use crate::error::Result;
use crate::scorer::{LanguageModel, Scorer};
use regex::Regex;
use std::str::FromStr;
use std::sync::Arc;

/// Segmentation policy for a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmenterType {
    /// Split long segments with the language-model DP optimizer.
    #[default]
    Lm,
    /// Split purely by the word caps.
    Max,
}

impl SegmenterType {
    /// Canonical name, as accepted on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmenterType::Lm => "lm",
            SegmenterType::Max => "max",
        }
    }
}

impl std::fmt::Display for SegmenterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmenterType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "lm" => Ok(SegmenterType::Lm),
            "max" => Ok(SegmenterType::Max),
            other => Err(format!("unknown segmenter type: '{other}'")),
        }
    }
}

/// Word-cap policy for the chunking engine.
///
/// Immutable for the lifetime of a chunker; passed in explicitly rather
/// than read from ambient state so callers can vary it per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkerConfig {
    /// Maximum number of words per output sentence.
    pub max_words_per_sentence: usize,
    /// Close segments at punctuation marks and force sentence breaks after
    /// them.
    pub split_by_punctuation: bool,
    /// Hard cap on the total number of words emitted per call; chunks past
    /// it are discarded.
    pub max_total_words: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_words_per_sentence: 10,
            split_by_punctuation: true,
            max_total_words: 100,
        }
    }
}

/// The chunking engine.
///
/// Holds the immutable word-cap policy, the scorer adapter over the shared
/// model and the precompiled cleanup regexes. One instance serves any
/// number of concurrent calls; `run` keeps no state between calls.
pub struct UtteranceChunker {
    config: ChunkerConfig,
    scorer: Scorer,
    punctuation_run: Regex,
    spaces: Regex,
}

impl UtteranceChunker {
    /// Create a chunker over a shared scoring model.
    pub fn new(config: ChunkerConfig, model: Arc<dyn LanguageModel>) -> Self {
        let class: String = arabic::SENTENCE_PUNCTUATION
            .iter()
            .chain(arabic::EXTRA_COLLAPSE_MARKS)
            .map(|&ch| regex::escape(&ch.to_string()))
            .collect();
        let punctuation_run = Regex::new(&format!("([{class}])[{class} ]+"))
            .expect("punctuation class compiles");
        let spaces = Regex::new(" +").expect("space run pattern compiles");
        Self {
            config,
            scorer: Scorer::new(model),
            punctuation_run,
            spaces,
        }
    }

    /// The word-cap policy this chunker was built with.
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Segment `text` into cleaned utterance strings.
    pub fn run(&self, text: &str, segmenter: SegmenterType) -> Result<Vec<String>> {
        let segments = self.split_at_punctuation(text);

        let mut chunks: Vec<Chunk> = Vec::new();
        for segment in &segments {
            let words: Vec<String> = segment.split_whitespace().map(str::to_string).collect();
            if segmenter == SegmenterType::Lm && words.len() > self.config.max_words_per_sentence {
                chunks.extend(dp::optimize(
                    &words,
                    self.config.max_words_per_sentence,
                    &self.scorer,
                )?);
            } else {
                chunks.extend(words.into_iter().map(|w| vec![w]));
            }
        }

        Ok(self.cleanup(self.merge(chunks)))
    }

    /// Stage A: scan the text and close a segment at every recognized
    /// punctuation mark. Segments closed at a mark are trimmed; the tail
    /// remainder is kept as scanned.
    fn split_at_punctuation(&self, text: &str) -> Vec<String> {
        if !self.config.split_by_punctuation {
            return vec![text.to_string()];
        }
        let mut segments = Vec::new();
        let mut buf = String::new();
        for ch in text.chars() {
            buf.push(ch);
            if arabic::is_sentence_punctuation(ch) {
                segments.push(buf.trim().to_string());
                buf.clear();
            }
        }
        if !buf.is_empty() {
            segments.push(buf);
        }
        segments
    }

    /// Stage C: regroup chunks into sentences under the word caps.
    ///
    /// Processing stops entirely once the next chunk would push the running
    /// total past `max_total_words` — a designed truncation, not an error.
    /// A sentence closes before a chunk that would overflow the per-sentence
    /// cap, or (in punctuation-aware mode) when the sentence already ends in
    /// a punctuation mark.
    fn merge(&self, chunks: Vec<Chunk>) -> Vec<Vec<String>> {
        let mut sentences: Vec<Vec<String>> = Vec::new();
        let mut sentence: Vec<String> = Vec::new();
        let mut total_words = 0usize;

        for chunk in chunks {
            if total_words + chunk.len() > self.config.max_total_words {
                break;
            }
            total_words += chunk.len();

            if sentence.len() + chunk.len() > self.config.max_words_per_sentence
                || (self.config.split_by_punctuation && ends_in_punctuation(&sentence))
            {
                sentences.push(std::mem::take(&mut sentence));
            }
            sentence.extend(chunk);
        }

        if total_words <= self.config.max_total_words && !sentence.is_empty() {
            sentences.push(sentence);
        }
        sentences
    }

    /// Stage D: join, filter and collapse.
    ///
    /// Sentences that join to an empty string, or whose every character is
    /// a sentence punctuation mark, are dropped. When punctuation splitting
    /// is off, a run of punctuation marks (optionally space-separated)
    /// collapses to its first mark padded by single spaces.
    fn cleanup(&self, sentences: Vec<Vec<String>>) -> Vec<String> {
        let mut results = Vec::with_capacity(sentences.len());
        for words in sentences {
            let mut sentence = words.join(" ");
            if sentence.is_empty() {
                continue;
            }
            if sentence.chars().all(arabic::is_sentence_punctuation) {
                continue;
            }
            if !self.config.split_by_punctuation {
                sentence = self
                    .punctuation_run
                    .replace_all(&sentence, " $1 ")
                    .into_owned();
                sentence = self.spaces.replace_all(&sentence, " ").into_owned();
            }
            if !sentence.is_empty() {
                results.push(sentence);
            }
        }
        results
    }
}

impl std::fmt::Debug for UtteranceChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UtteranceChunker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn ends_in_punctuation(sentence: &[String]) -> bool {
    sentence
        .last()
        .and_then(|word| word.chars().last())
        .is_some_and(arabic::is_sentence_punctuation)
}
