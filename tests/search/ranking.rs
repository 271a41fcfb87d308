//! Field-weighted ranking behavior.
//!
//! Tests that:
//! - Title matches outrank category, page, and body-text matches
//! - Prefix matches are discounted relative to exact matches
//! - Contributions accumulate across query tokens and fields

use super::common::{docs_index, hit_locations, make_raw};
use docdex::{search, SearchIndex};

#[test]
fn title_match_ranks_first_on_realistic_corpus() {
    let index = docs_index();

    // "colordiff" appears in one title and one body; the title hit wins.
    let hits = hit_locations(&index, "colordiff", 10);
    assert_eq!(hits[0], "colordifferences.html#Colors.colordiff");
}

#[test]
fn category_match_outranks_page_and_text_matches() {
    let index = SearchIndex::load(vec![
        make_raw("a.html", "Reference", "sort", "function", ""),
        make_raw("b.html", "Functions of note", "misc", "section", ""),
        make_raw("c.html", "Misc", "other", "section", "a function reference list"),
    ])
    .unwrap();

    // All three match "function": entry 0 via category, entry 1 via page,
    // entry 2 via text.
    let results = search(&index, "function", 10);
    assert_eq!(results.len(), 3);
    assert_eq!(index.entry(results[0].entry).location, "a.html");
    assert_eq!(index.entry(results[1].entry).location, "b.html");
    assert_eq!(index.entry(results[2].entry).location, "c.html");
}

#[test]
fn exact_title_outranks_prefix_title() {
    let index = SearchIndex::load(vec![
        make_raw("long.html", "P", "colormapping", "section", ""),
        make_raw("exact.html", "P", "colormap", "section", ""),
    ])
    .unwrap();

    let results = search(&index, "colormap", 10);
    assert_eq!(results.len(), 2);
    assert_eq!(index.entry(results[0].entry).location, "exact.html");
    assert!(results[0].score > results[1].score);
}

#[test]
fn matching_more_query_tokens_accumulates_score() {
    let index = docs_index();

    // "white balance" hits both tokens in the whitebalance entry's body
    // and title; entries matching a single token rank below it.
    let hits = hit_locations(&index, "white balance", 10);
    assert_eq!(hits[0], "colormaps.html#Colors.whitebalance");
}

#[test]
fn body_frequency_breaks_otherwise_equal_entries() {
    let index = SearchIndex::load(vec![
        make_raw("one.html", "P", "a", "section", "gradient"),
        make_raw("two.html", "P", "b", "section", "gradient gradient"),
    ])
    .unwrap();

    let results = search(&index, "gradient", 10);
    assert_eq!(index.entry(results[0].entry).location, "two.html");
    assert!(results[0].score > results[1].score);
}

#[test]
fn title_equal_to_query_scores_at_least_any_text_only_match() {
    let index = docs_index();
    let results = search(&index, "colormap", 20);

    let title_score = results
        .iter()
        .find(|r| index.entry(r.entry).location == "colormaps.html#Colors.colormap")
        .map(|r| r.score)
        .expect("title entry matches");

    for result in &results {
        let entry = index.entry(result.entry);
        if entry.location != "colormaps.html#Colors.colormap" {
            assert!(title_score >= result.score, "text-only hit outranked title");
        }
    }
}
