//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Category, IndexEntry, RawEntry, SearchIndex};

/// Create a validated index entry. The canonical fixture builder.
pub fn make_entry(location: &str, page: &str, title: &str, category: &str, text: &str) -> IndexEntry {
    IndexEntry {
        location: location.to_string(),
        page: page.to_string(),
        title: title.to_string(),
        category: Category::from_tag(category),
        text: text.to_string(),
    }
}

/// Create a raw (pre-validation) record with all required fields present.
pub fn make_raw(location: &str, page: &str, title: &str, category: &str, text: &str) -> RawEntry {
    RawEntry {
        location: Some(location.to_string()),
        page: Some(page.to_string()),
        title: Some(title.to_string()),
        category: Some(category.to_string()),
        text: text.to_string(),
    }
}

/// The three-entry corpus used throughout the test suite: two color
/// functions plus one unrelated entry as ranking ballast.
pub fn colors_fixture() -> SearchIndex {
    SearchIndex::load(vec![
        make_raw(
            "a#1",
            "A",
            "colormap",
            "function",
            "Returns a predefined sequential colormap.",
        ),
        make_raw(
            "b#1",
            "B",
            "colordiff",
            "function",
            "Evaluate CIEDE2000 color difference.",
        ),
        make_raw(
            "c#1",
            "C",
            "whitebalance",
            "function",
            "Adjust the white point of an image.",
        ),
    ])
    .expect("fixture index is valid")
}

/// A larger synthetic corpus for ranking and bench scenarios.
pub fn synthetic_corpus(pages: usize) -> Vec<RawEntry> {
    let words = [
        "color", "colormap", "gradient", "hue", "saturation", "luminance", "contrast", "palette",
        "channel", "difference",
    ];
    (0..pages)
        .map(|i| {
            let title = format!("{}{}", words[i % words.len()], i);
            let text = (0..12)
                .map(|j| words[(i + j) % words.len()])
                .collect::<Vec<_>>()
                .join(" ");
            make_raw(
                &format!("page{}.html#{}", i / 4, i),
                &format!("Page {}", i / 4),
                &title,
                if i % 3 == 0 { "function" } else { "section" },
                &text,
            )
        })
        .collect()
}
