//! The query engine: where the rubber meets the road.
//!
//! A query is tokenized with the same normalizer as the index, each token is
//! resolved against exact postings plus prefix candidates from the sorted
//! vocabulary, and per-entry contributions accumulate across tokens. This is
//! an OR engine: matching one query token makes an entry eligible, matching
//! more just scores higher.
//!
//! Determinism: scores accumulate per entry in a map, but ranking collects
//! entries in index order first and then stable-sorts by descending score,
//! so equal-scored entries always come back in original index order.

use std::collections::HashMap;

use crate::scoring::{contribution, MatchKind};
use crate::tokenize::tokenize_terms;
use crate::types::{SearchIndex, SearchResult};

/// Search the index, returning at most `limit` ranked results.
///
/// Empty or separator-only queries and `limit == 0` yield an empty result
/// list. A query token matching nothing contributes zero but never
/// disqualifies an entry matched by another token.
pub fn search(index: &SearchIndex, query: &str, limit: usize) -> Vec<SearchResult> {
    if limit == 0 {
        return Vec::new();
    }

    let terms = tokenize_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scores: HashMap<usize, f64> = HashMap::new();

    for term in &terms {
        if let Some(list) = index.inverted().terms.get(term.as_str()) {
            for posting in &list.postings {
                *scores.entry(posting.entry).or_insert(0.0) +=
                    contribution(posting.field, MatchKind::Exact, posting.freq);
            }
        }

        for candidate in prefix_candidates(index.vocabulary(), term) {
            if candidate == term {
                // Already scored as an exact match above.
                continue;
            }
            if let Some(list) = index.inverted().terms.get(candidate.as_str()) {
                for posting in &list.postings {
                    *scores.entry(posting.entry).or_insert(0.0) +=
                        contribution(posting.field, MatchKind::Prefix, posting.freq);
                }
            }
        }
    }

    // Collect in index order so the stable sort's tie-break is load order.
    let mut ids: Vec<usize> = scores.keys().copied().collect();
    ids.sort_unstable();

    let mut results: Vec<SearchResult> = ids
        .into_iter()
        .map(|entry| SearchResult {
            entry,
            score: scores[&entry],
        })
        .filter(|r| r.score > 0.0)
        .collect();

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(limit);
    results
}

/// Vocabulary tokens starting with `prefix`, found by binary search over the
/// lexicographically sorted vocabulary and a bounded forward scan.
fn prefix_candidates<'a>(
    vocabulary: &'a [String],
    prefix: &'a str,
) -> impl Iterator<Item = &'a String> + 'a {
    let start = vocabulary.partition_point(|t| t.as_str() < prefix);
    vocabulary[start..]
        .iter()
        .take_while(move |t| t.starts_with(prefix))
}
