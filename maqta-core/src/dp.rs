//! Dynamic-programming chunk optimizer
//!
//! Partitions a word sequence into contiguous chunks of at most `max_words`
//! words each, maximizing the sum of the chunks' plausibility scores. The
//! cost is O(n * max_words) score evaluations, so latency is bounded by
//! keeping `max_words` small.

use crate::error::Result;
use crate::scorer::Scorer;

/// A contiguous run of words treated as one atomic unit during sentence
/// assembly.
pub type Chunk = Vec<String>;

/// Partition `words` into chunks of at most `max_words` words maximizing
/// total plausibility.
///
/// A sequence already within the cap is returned as one singleton chunk per
/// word, in order, with no scoring at all. Otherwise `optimal[j]` holds the
/// best total score for a partition of `words[..=j]`, and `track[j]` the
/// index the winning partition cut after. Ties keep the earliest-discovered
/// predecessor: the update requires a strictly greater candidate.
pub fn optimize(words: &[String], max_words: usize, scorer: &Scorer) -> Result<Vec<Chunk>> {
    if words.is_empty() {
        return Ok(Vec::new());
    }
    if words.len() <= max_words {
        return Ok(words.iter().map(|w| vec![w.clone()]).collect());
    }

    let n = words.len();
    let mut optimal = vec![f64::NEG_INFINITY; n];
    let mut track: Vec<isize> = vec![-1; n];

    // Base cases: a single chunk covering the prefix.
    for j in 0..max_words.min(n) {
        optimal[j] = scorer.score(&words[..j + 1])?;
    }

    for i in 0..n {
        for width in 1..=max_words {
            let end = i + width;
            if end >= n {
                break;
            }
            let candidate = optimal[i] + scorer.score(&words[i + 1..end + 1])?;
            if optimal[end] < candidate {
                optimal[end] = candidate;
                track[end] = i as isize;
            }
        }
    }

    // Walk the predecessor chain back from the last index.
    let mut cuts = vec![n];
    let mut prev = track[n - 1];
    while prev != -1 {
        cuts.push(prev as usize);
        prev = track[prev as usize];
    }

    let mut chunks = Vec::with_capacity(cuts.len());
    let mut start = 0;
    for &cut in cuts.iter().rev() {
        let end = (cut + 1).min(n);
        chunks.push(words[start..end].to_vec());
        start = end;
    }
    Ok(chunks)
}
