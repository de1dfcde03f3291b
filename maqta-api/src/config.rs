//! Segmentation configuration
//!
//! Word caps and the punctuation policy, read once at startup and
//! immutable afterwards. Values come from the builder or from
//! `MAQTA_`-prefixed environment variables.

use crate::error::{ApiError, Result};
use maqta_core::ChunkerConfig;

/// Environment variable prefix for [`Config::from_env`].
pub const ENV_PREFIX: &str = "MAQTA_";

/// Segmentation word caps and punctuation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of words per output sentence.
    pub max_words_per_sentence: usize,
    /// Split at punctuation marks and force sentence breaks after them.
    pub split_by_punctuation: bool,
    /// Hard cap on the total number of words emitted per call.
    pub max_total_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_words_per_sentence: 10,
            split_by_punctuation: true,
            max_total_words: 100,
        }
    }
}

impl Config {
    /// Create a builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load configuration from `MAQTA_`-prefixed environment variables.
    ///
    /// Recognized variables: `MAQTA_MAX_WORDS_PER_SENTENCE`,
    /// `MAQTA_SPLIT_BY_PUNCTUATION`, `MAQTA_MAX_TOTAL_WORDS`. Unset
    /// variables keep their defaults; unparsable values are configuration
    /// errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(&format!("{ENV_PREFIX}MAX_WORDS_PER_SENTENCE")) {
            config.max_words_per_sentence = parse_count("max_words_per_sentence", &value)?;
        }
        if let Some(value) = lookup(&format!("{ENV_PREFIX}SPLIT_BY_PUNCTUATION")) {
            config.split_by_punctuation = parse_bool("split_by_punctuation", &value)?;
        }
        if let Some(value) = lookup(&format!("{ENV_PREFIX}MAX_TOTAL_WORDS")) {
            config.max_total_words = parse_count("max_total_words", &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject zero caps and a total cap below the per-sentence cap.
    pub fn validate(&self) -> Result<()> {
        if self.max_words_per_sentence == 0 {
            return Err(ApiError::Config(
                "max_words_per_sentence must be positive".to_string(),
            ));
        }
        if self.max_total_words < self.max_words_per_sentence {
            return Err(ApiError::Config(
                "max_total_words must be at least max_words_per_sentence".to_string(),
            ));
        }
        Ok(())
    }

    /// The engine-facing view of this configuration.
    pub fn chunker_config(&self) -> ChunkerConfig {
        ChunkerConfig {
            max_words_per_sentence: self.max_words_per_sentence,
            split_by_punctuation: self.split_by_punctuation,
            max_total_words: self.max_total_words,
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the per-sentence word cap.
    pub fn max_words_per_sentence(mut self, cap: usize) -> Self {
        self.config.max_words_per_sentence = cap;
        self
    }

    /// Enable or disable punctuation splitting.
    pub fn split_by_punctuation(mut self, split: bool) -> Self {
        self.config.split_by_punctuation = split;
        self
    }

    /// Set the total word cap.
    pub fn max_total_words(mut self, cap: usize) -> Self {
        self.config.max_total_words = cap;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

fn parse_count(name: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        Ok(_) => Err(ApiError::Config(format!("{name} must be positive"))),
        Err(_) => Err(ApiError::Config(format!(
            "invalid integer for {name}: '{value}'"
        ))),
    }
}

/// Permissive boolean grammar: `y`/`yes`/`true`/`on`/`1` and
/// `n`/`no`/`false`/`off`/`0`, case-insensitive.
fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "on" | "1" => Ok(true),
        "n" | "no" | "false" | "off" | "0" => Ok(false),
        _ => Err(ApiError::Config(format!(
            "invalid bool representation for {name}: '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_service_defaults() {
        let config = Config::default();
        assert_eq!(config.max_words_per_sentence, 10);
        assert!(config.split_by_punctuation);
        assert_eq!(config.max_total_words, 100);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("MAQTA_MAX_WORDS_PER_SENTENCE", "4"),
            ("MAQTA_SPLIT_BY_PUNCTUATION", "off"),
            ("MAQTA_MAX_TOTAL_WORDS", "40"),
        ]))
        .unwrap();
        assert_eq!(config.max_words_per_sentence, 4);
        assert!(!config.split_by_punctuation);
        assert_eq!(config.max_total_words, 40);
    }

    #[test]
    fn boolean_grammar_is_permissive() {
        for value in ["y", "YES", "True", "on", "1"] {
            assert!(parse_bool("flag", value).unwrap());
        }
        for value in ["n", "No", "FALSE", "off", "0"] {
            assert!(!parse_bool("flag", value).unwrap());
        }
        assert!(parse_bool("flag", "maybe").is_err());
    }

    #[test]
    fn rejects_malformed_values() {
        let err = Config::from_lookup(lookup_from(&[("MAQTA_MAX_TOTAL_WORDS", "many")]))
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));

        let err =
            Config::from_lookup(lookup_from(&[("MAQTA_MAX_WORDS_PER_SENTENCE", "0")]))
                .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn builder_validates_cap_ordering() {
        let err = Config::builder()
            .max_words_per_sentence(50)
            .max_total_words(10)
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));

        let config = Config::builder()
            .max_words_per_sentence(5)
            .max_total_words(50)
            .build()
            .unwrap();
        assert_eq!(config.max_words_per_sentence, 5);
    }
}
