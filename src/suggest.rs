use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::similarity::{quick_ratio_chars, real_quick_ratio_len, similarity_chars};
use crate::vocabulary::Vocabulary;

/// A candidate word and how similar it is to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub word: String,
    pub score: f64,
}

/// Rank `vocabulary` against `query` and return at most `limit` matches
/// scoring at least `cutoff`.
///
/// Matches are ordered by descending score; equal scores keep vocabulary
/// order. Exact members are not treated specially and score `1.0`, so
/// callers wanting "correct vs. suggestions" should test membership first.
pub fn suggest(query: &str, vocabulary: &Vocabulary, cutoff: f64, limit: usize) -> Vec<Match> {
    if limit == 0 || vocabulary.is_empty() {
        return Vec::new();
    }

    let query_chars: Vec<char> = query.chars().collect();

    let mut scored: Vec<(usize, f64)> = vocabulary
        .words()
        .par_iter()
        .enumerate()
        .filter_map(|(position, candidate)| {
            let candidate_chars: Vec<char> = candidate.chars().collect();
            if real_quick_ratio_len(query_chars.len(), candidate_chars.len()) < cutoff
                || quick_ratio_chars(&query_chars, &candidate_chars) < cutoff
            {
                return None;
            }
            let score = similarity_chars(&query_chars, &candidate_chars);
            (score >= cutoff).then_some((position, score))
        })
        .collect();

    // Sorting happens only once every score is in; stable sort plus the
    // position key keeps ties in vocabulary order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    scored.truncate(limit);

    let words = vocabulary.words();
    scored
        .into_iter()
        .map(|(position, score)| Match {
            word: words[position].clone(),
            score,
        })
        .collect()
}
