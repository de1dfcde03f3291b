//! Plausibility scoring for candidate word sequences
//!
//! The language model is an opaque oracle behind [`LanguageModel`]: it takes
//! a normalized, space-joined string and returns a log-likelihood-style
//! value. Only the relative ordering of scores against the same model is
//! meaningful. [`Scorer`] is the adapter the optimizer calls: it joins the
//! words, normalizes them and delegates.

use crate::arabic;
use crate::error::Result;
use std::sync::Arc;

/// A scoring oracle for normalized text.
///
/// Implementations must be safe to call concurrently from multiple
/// segmentation calls; the loaded model is read-only after construction.
/// This allows plugging in different backends (an n-gram model, a native
/// binding, a test stub).
pub trait LanguageModel: Send + Sync {
    /// Score a normalized, space-joined word sequence.
    ///
    /// Higher means more linguistically natural. A failure is fatal for the
    /// segmentation call in flight.
    fn score(&self, text: &str) -> Result<f64>;
}

/// Adapter between word sequences and the scoring oracle.
#[derive(Clone)]
pub struct Scorer {
    model: Arc<dyn LanguageModel>,
}

impl Scorer {
    /// Create a scorer over a shared model.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Score an ordered word sequence.
    ///
    /// The words are joined with single spaces and normalized with
    /// [`arabic::normalize`] before the model sees them; the caller's text
    /// is never mutated.
    pub fn score(&self, words: &[String]) -> Result<f64> {
        let joined = words.join(" ");
        self.model.score(&arabic::normalize(&joined))
    }
}

impl std::fmt::Debug for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scorer").finish_non_exhaustive()
    }
}
