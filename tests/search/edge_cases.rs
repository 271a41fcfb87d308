//! Degenerate queries and inputs.

use super::common::{docs_index, make_raw};
use docdex::{search, SearchIndex};

#[test]
fn empty_and_separator_only_queries_yield_nothing() {
    let index = docs_index();
    for query in ["", " ", "\t\n", "...", "::", "__", "!?#"] {
        assert!(search(&index, query, 10).is_empty(), "query {:?}", query);
    }
}

#[test]
fn zero_limit_yields_nothing_without_error() {
    let index = docs_index();
    assert!(search(&index, "color", 0).is_empty());
}

#[test]
fn limit_larger_than_corpus_is_fine() {
    let index = docs_index();
    let results = search(&index, "color", 10_000);
    assert!(results.len() <= index.len());
}

#[test]
fn query_with_punctuation_matches_like_its_words() {
    let index = docs_index();
    let plain = search(&index, "colordiff color", 10);
    let noisy = search(&index, "colordiff(::Color)!", 10);
    assert_eq!(plain, noisy);
}

#[test]
fn query_matching_only_a_category_still_hits() {
    let index = docs_index();
    let results = search(&index, "function", usize::MAX);
    // Every function-category entry is eligible through its category field.
    let function_entries = index
        .entries()
        .iter()
        .filter(|e| e.category.as_str() == "function")
        .count();
    assert!(results.len() >= function_entries);
}

#[test]
fn single_entry_index_works() {
    let index = SearchIndex::load(vec![make_raw("only.html", "P", "solo", "page", "one entry")])
        .unwrap();
    assert_eq!(search(&index, "solo", 10).len(), 1);
    assert!(search(&index, "duo", 10).is_empty());
}

#[test]
fn empty_index_returns_nothing_for_any_query() {
    let index = SearchIndex::load(Vec::new()).unwrap();
    assert!(index.is_empty());
    assert!(search(&index, "anything", 10).is_empty());
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn unicode_query_is_normalized_like_the_corpus() {
    let index = SearchIndex::load(vec![make_raw(
        "fr.html",
        "Guide",
        "Café colors",
        "section",
        "Un café bien serré.",
    )])
    .unwrap();

    // Accented and plain spellings resolve to the same token.
    let accented = search(&index, "café", 10);
    let plain = search(&index, "cafe", 10);
    assert_eq!(accented.len(), 1);
    assert_eq!(accented, plain);
}
