//! End-to-end correctness on the Documenter-style fixture.

use super::common::{colors_fixture, docs_index, hit_locations};
use docdex::{search, snippet, tokenize_terms};

#[test]
fn color_prefix_query_returns_both_color_functions() {
    let index = colors_fixture();
    let hits = hit_locations(&index, "color", 10);

    assert!(hits.contains(&"a#1".to_string()));
    assert!(hits.contains(&"b#1".to_string()));
    assert!(!hits.contains(&"c#1".to_string()));
}

#[test]
fn unmatched_query_returns_empty() {
    let index = docs_index();
    assert!(search(&index, "xyzzy", 10).is_empty());
}

#[test]
fn every_result_contains_a_query_token_somewhere() {
    let index = docs_index();
    let terms = tokenize_terms("color conversion");

    for result in search(&index, "color conversion", usize::MAX) {
        let entry = index.entry(result.entry);
        let haystack = tokenize_terms(&format!(
            "{} {} {} {}",
            entry.title,
            entry.page,
            entry.category.as_str(),
            entry.text
        ));
        let matched = haystack
            .iter()
            .any(|tok| terms.iter().any(|q| tok == q || tok.starts_with(q.as_str())));
        assert!(matched, "{} has no matching token", entry.location);
    }
}

#[test]
fn snippet_for_each_result_highlights_a_real_match() {
    let index = docs_index();
    let terms = tokenize_terms("colormap");

    for result in search(&index, "colormap", 10) {
        let entry = index.entry(result.entry);
        let snip = snippet(entry, &terms, 100);
        if entry.text.is_empty() {
            assert!(snip.text.is_empty());
            continue;
        }
        for &(start, end) in &snip.highlights {
            let word = &snip.text[start..end];
            assert!(
                docdex::normalize(word).starts_with("colormap"),
                "highlighted '{}' does not match query",
                word
            );
        }
    }
}

#[test]
fn snippet_of_anchor_entry_is_empty() {
    let index = docs_index();
    // The bare page anchor entry has no body text.
    let anchor = index
        .entries()
        .iter()
        .position(|e| e.location == "index.html#")
        .unwrap();
    let snip = snippet(index.entry(anchor), &tokenize_terms("introduction"), 80);
    assert!(snip.text.is_empty());
    assert!(snip.highlights.is_empty());
}
