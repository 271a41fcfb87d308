//! Inverted index construction.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: Each posting list is sorted by (entry, field)
//! 2. **ENTRY_FREQ_CORRECT**: `entry_freq` equals count of unique entries
//! 3. **NON_EMPTY**: Every token has at least one posting
//! 4. **FREQ_POSITIVE**: Every posting has `freq ≥ 1`
//!
//! The build runs once, eagerly, at load time. Posting lists list
//! contributing entries in index order, not discovery order, which is what
//! makes the tie-break in the query engine deterministic.

use crate::tokenize::tokenize;
use crate::types::{Field, IndexEntry, InvertedIndex, Posting, PostingList};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;

/// Per-field token frequencies for one entry.
fn entry_term_counts(entry: &IndexEntry) -> HashMap<String, [u32; 4]> {
    let mut counts: HashMap<String, [u32; 4]> = HashMap::new();
    for (slot, field) in Field::ALL.into_iter().enumerate() {
        for token in tokenize(entry.field(field)) {
            counts.entry(token.text).or_default()[slot] += 1;
        }
    }
    counts
}

fn counts_to_postings(entry_id: usize, counts: HashMap<String, [u32; 4]>) -> Vec<(String, Posting)> {
    let mut out = Vec::new();
    for (term, per_field) in counts {
        for (slot, field) in Field::ALL.into_iter().enumerate() {
            if per_field[slot] > 0 {
                out.push((
                    term.clone(),
                    Posting {
                        entry: entry_id,
                        field,
                        freq: per_field[slot],
                    },
                ));
            }
        }
    }
    out
}

fn assemble(per_entry: Vec<Vec<(String, Posting)>>, total_entries: usize) -> InvertedIndex {
    let mut terms: HashMap<String, Vec<Posting>> = HashMap::new();
    for entry_postings in per_entry {
        for (term, posting) in entry_postings {
            terms.entry(term).or_default().push(posting);
        }
    }

    // INVARIANT: POSTING_LIST_SORTED
    for postings in terms.values_mut() {
        postings.sort();
    }

    let final_terms: HashMap<String, PostingList> = terms
        .into_iter()
        .map(|(term, postings)| {
            let mut entries: Vec<usize> = postings.iter().map(|p| p.entry).collect();
            entries.dedup();
            (
                term,
                PostingList {
                    postings,
                    entry_freq: entries.len(),
                },
            )
        })
        .collect();

    InvertedIndex {
        terms: final_terms,
        total_entries,
    }
}

/// Build an inverted index from validated entries.
///
/// Creates a map from tokens to posting lists, one posting per
/// (entry, field) pair with the token's frequency in that field.
pub fn build_inverted_index(entries: &[IndexEntry]) -> InvertedIndex {
    let per_entry: Vec<Vec<(String, Posting)>> = entries
        .iter()
        .enumerate()
        .map(|(entry_id, entry)| counts_to_postings(entry_id, entry_term_counts(entry)))
        .collect();

    assemble(per_entry, entries.len())
}

/// Build an inverted index using parallel map-reduce.
///
/// Map phase tokenizes entries in parallel; the reduce phase merges
/// per-entry postings in index order, so the result is identical to the
/// sequential build.
#[cfg(feature = "parallel")]
pub fn build_inverted_index_parallel(entries: &[IndexEntry]) -> InvertedIndex {
    let per_entry: Vec<Vec<(String, Posting)>> = entries
        .par_iter()
        .enumerate()
        .map(|(entry_id, entry)| counts_to_postings(entry_id, entry_term_counts(entry)))
        .collect();

    assemble(per_entry, entries.len())
}

/// Sequential fallback when the `parallel` feature is disabled.
#[cfg(not(feature = "parallel"))]
pub fn build_inverted_index_parallel(entries: &[IndexEntry]) -> InvertedIndex {
    build_inverted_index(entries)
}

/// Check that an inverted index satisfies its invariants (debug assertion).
#[cfg(any(debug_assertions, test))]
#[allow(dead_code)]
pub fn check_inverted_index_well_formed(index: &InvertedIndex) -> bool {
    for list in index.terms.values() {
        if list.postings.is_empty() {
            return false;
        }

        for i in 1..list.postings.len() {
            let prev = &list.postings[i - 1];
            let curr = &list.postings[i];
            if (prev.entry, prev.field) >= (curr.entry, curr.field) {
                return false;
            }
        }

        for posting in &list.postings {
            if posting.entry >= index.total_entries || posting.freq == 0 {
                return false;
            }
        }

        let mut entries: Vec<usize> = list.postings.iter().map(|p| p.entry).collect();
        entries.dedup();
        if list.entry_freq != entries.len() {
            return false;
        }
    }

    true
}
